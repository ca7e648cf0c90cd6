// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

use sassir_target::reg::MAX_CHARS;

use crate::config::TextPolicy;
use crate::errors::OperandError;

/// Fails when `value` is longer than `MAX_CHARS` characters.
pub(crate) fn check_len(field: &'static str, value: &str) -> Result<(), OperandError> {
    let len = value.chars().count();
    if len > MAX_CHARS {
        return Err(OperandError::TextTooLong { field, len, max: MAX_CHARS });
    }
    Ok(())
}

/// Literal token of an operand, at most `MAX_CHARS` characters long.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperandText {
    value: String,
    truncated: bool
}

impl OperandText {
    pub fn new(value: impl Into<String>, policy: TextPolicy) -> Result<Self, OperandError> {
        let mut value = value.into();
        match check_len("text", &value) {
            Ok(()) => Ok(Self { value, truncated: false }),

            Err(err) if policy == TextPolicy::Truncate => {
                log::warn!("{err}; truncating");
                // cut on a char boundary
                if let Some((byte_idx, _)) = value.char_indices().nth(MAX_CHARS) {
                    value.truncate(byte_idx);
                }
                Ok(Self { value, truncated: true })
            },

            Err(err) => Err(err)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Whether characters past `MAX_CHARS` were dropped on construction.
    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub(crate) fn mark_truncated(&mut self) {
        self.truncated = true;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl fmt::Display for OperandText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl PartialEq<str> for OperandText {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for OperandText {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceiling_is_inclusive() {
        let exact = "a".repeat(MAX_CHARS);
        let text = OperandText::new(exact.clone(), TextPolicy::Reject).unwrap();
        assert_eq!(text.as_str(), exact);
        assert!(!text.was_truncated());
    }

    #[test]
    fn test_reject_policy() {
        let long = "a".repeat(MAX_CHARS + 1);
        let err = OperandText::new(long, TextPolicy::Reject).unwrap_err();
        assert_eq!(err, OperandError::TextTooLong { field: "text", len: 257, max: 256 });
    }

    #[test]
    fn test_truncate_policy_on_char_boundary() {
        // multi-byte characters must not be split
        let long = "é".repeat(MAX_CHARS + 10);
        let text = OperandText::new(long, TextPolicy::Truncate).unwrap();
        assert!(text.was_truncated());
        assert_eq!(text.as_str().chars().count(), MAX_CHARS);
        assert_eq!(text.as_str(), "é".repeat(MAX_CHARS));
    }
}
