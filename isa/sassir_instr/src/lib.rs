// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod errors;
pub mod operands;

pub use errors::InstrError;
pub use operands::InstrOperands;
