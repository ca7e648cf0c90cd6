// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

//! Operand data model for decoded GPU (SASS) instructions.
//!
//! A decoder builds [`Operand`] values, groups them per instruction in
//! [`InstrOperands`], and hands them to printers, instrumentors and
//! simulators, which read them without mutating.

pub use sassir_instr as instr;
pub use sassir_operand as operand;
pub use sassir_target as target;

pub use sassir_instr::{InstrError, InstrOperands};
pub use sassir_operand::{Operand, OperandError, OperandKind, OperandPayload};
pub use sassir_target::{MemorySpace, RegFile, RegModifier};

pub mod prelude {
    pub use sassir_instr::{InstrError, InstrOperands};
    pub use sassir_operand::{
        CBankOperand,
        ErrCode,
        InvalidOperand,
        MRefOperand,
        MRefReg,
        MemDescOperand,
        Operand,
        OperandBuilder,
        OperandConfig,
        OperandError,
        OperandHeader,
        OperandKind,
        OperandMods,
        OperandPayload,
        PredOperand,
        RegOperand,
        TextPolicy
    };
    pub use sassir_target::reg::{MAX_CHARS, MAX_NUM_MREF_PER_INSTR, PR, PT, RZ, UPR, UPT, URZ};
    pub use sassir_target::{MemorySpace, RegFile, RegModifier};
}
