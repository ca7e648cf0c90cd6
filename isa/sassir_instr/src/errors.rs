// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use std::fmt;

use sassir_operand::{ErrCode, OperandError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstrError {
    TooManyMemRefs {
        found: usize,
        max: usize
    },

    Operand(OperandError)
}

impl InstrError {
    pub fn code(&self) -> ErrCode {
        match self {
            InstrError::TooManyMemRefs { .. } => ErrCode::INS2000,
            InstrError::Operand(err) => err.code(),
        }
    }

    pub fn dump(&self) {
        eprintln!("{self}");
    }
}

impl From<OperandError> for InstrError {
    fn from(err: OperandError) -> Self {
        InstrError::Operand(err)
    }
}

impl fmt::Display for InstrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrError::TooManyMemRefs { found, max } => {
                write!(f, "{:?}: instruction has {found} memory references, at most {max} allowed", self.code())
            },
            InstrError::Operand(err) => write!(f, "{err}")
        }
    }
}

impl std::error::Error for InstrError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InstrError::Operand(err) => Some(err),
            _ => None
        }
    }
}
