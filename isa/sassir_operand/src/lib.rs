// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

//! Decoded operand of a GPU machine instruction.
//!
//! An [`Operand`] carries a common header (literal text, `neg`/`not`/`abs`
//! flags, byte width) and exactly one [`OperandPayload`]. The payload's
//! variant is the operand's [`OperandKind`]. Payloads are read through
//! [`Operand::inspect`], the typed `as_*` accessors, or a `match` on
//! [`Operand::payload`].

pub mod kind;
pub mod errors;
pub mod config;
pub mod text;
pub mod payload;
pub mod operand;
pub mod builder;
pub mod describe;

pub use builder::OperandBuilder;
pub use config::{OperandConfig, TextPolicy};
pub use errors::{ErrCode, InvalidOperand, OperandError};
pub use kind::OperandKind;
pub use operand::{Operand, OperandHeader, OperandMods};
pub use payload::{CBankOperand, MRefOperand, MRefReg, MemDescOperand, OperandPayload, PredOperand, RegOperand};
pub use text::OperandText;
