// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

/// What to do with an operand `text` longer than `MAX_CHARS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Fail construction with `TextTooLong`.
    #[default]
    Reject,

    /// Keep the first `MAX_CHARS` characters and mark the text as truncated.
    Truncate
}

/// Construction settings shared by every operand a decoder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperandConfig {
    pub text_policy: TextPolicy
}

impl OperandConfig {
    pub fn new(text_policy: TextPolicy) -> Self {
        Self { text_policy }
    }

    pub fn truncating() -> Self {
        Self::new(TextPolicy::Truncate)
    }
}
