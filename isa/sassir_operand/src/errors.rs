// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

use crate::kind::OperandKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrCode {
    /// Numeric field out of its architectural range
    OPD1000     = 1000,

    /// Payload read against the wrong kind
    OPD1001     = 1001,

    /// Literal token longer than the character ceiling
    OPD1002     = 1002,

    /// More memory references than one instruction can carry
    INS2000     = 2000
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidOperand {
    OutOfRange {
        kind: OperandKind,
        field: &'static str,
        value: u32,
        max: u32
    },

    /// The builder was asked to build without any payload.
    MissingPayload
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandError {
    InvalidOperand(InvalidOperand),

    KindMismatch {
        expected: OperandKind,
        found: OperandKind
    },

    TextTooLong {
        field: &'static str,
        len: usize,
        max: usize
    }
}

impl OperandError {
    pub fn out_of_range(kind: OperandKind, field: &'static str, value: u32, max: u32) -> Self {
        OperandError::InvalidOperand(InvalidOperand::OutOfRange { kind, field, value, max })
    }

    pub fn code(&self) -> ErrCode {
        match self {
            OperandError::InvalidOperand(_) => ErrCode::OPD1000,
            OperandError::KindMismatch { .. } => ErrCode::OPD1001,
            OperandError::TextTooLong { .. } => ErrCode::OPD1002,
        }
    }

    pub fn dump(&self) {
        eprintln!("{self}");
    }
}

impl fmt::Display for InvalidOperand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidOperand::OutOfRange { kind, field, value, max } => {
                write!(f, "{kind} field `{field}` is {value}, allowed range is 0..={max}")
            },
            InvalidOperand::MissingPayload => write!(f, "operand has no payload")
        }
    }
}

impl fmt::Display for OperandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = self.code();
        match self {
            OperandError::InvalidOperand(reason) => {
                write!(f, "{code:?}: invalid operand: {reason}")
            },

            OperandError::KindMismatch { expected, found } => {
                write!(f, "{code:?}: kind mismatch: expected `{expected}`, found `{found}`")
            },

            OperandError::TextTooLong { field, len, max } => {
                write!(f, "{code:?}: `{field}` is {len} characters long, limit is {max}")
            }
        }
    }
}

impl std::error::Error for OperandError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = OperandError::out_of_range(OperandKind::Reg, "num", 256, 255);
        assert_eq!(err.code(), ErrCode::OPD1000);
        assert_eq!(err.code() as u32, 1000);
        assert_eq!(err.to_string(), "OPD1000: invalid operand: REG field `num` is 256, allowed range is 0..=255");

        let err = OperandError::KindMismatch { expected: OperandKind::Pred, found: OperandKind::UPred };
        assert_eq!(err.code(), ErrCode::OPD1001);
        assert_eq!(err.to_string(), "OPD1001: kind mismatch: expected `PRED`, found `UPRED`");

        let err = OperandError::TextTooLong { field: "text", len: 257, max: 256 };
        assert_eq!(err.code(), ErrCode::OPD1002);
    }
}
