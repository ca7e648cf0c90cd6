// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

pub mod names;
pub mod reg;
pub mod mem_space;

pub use mem_space::MemorySpace;
pub use reg::{RegFile, RegModifier, RegNum};
