// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use crate::named_enum;
use crate::reg::MAX_NUM_MREF_PER_INSTR;

named_enum! {
    /// Memory space targeted by an instruction as a whole.
    ///
    /// This classifies the instruction, not a single operand. It is read
    /// together with the instruction's memory reference and memory
    /// descriptor operands.
    #[derive(Default)]
    pub enum MemorySpace {
        #[default]
        None => "NONE",
        Local => "LOCAL",
        Generic => "GENERIC",
        Global => "GLOBAL",
        Shared => "SHARED",
        Constant => "CONSTANT",
        /// Read from global memory, then write to shared memory.
        GlobalToShared => "GLOBAL_TO_SHARED",
        Surface => "SURFACE",
        Texture => "TEXTURE",
        DistributedShared => "DISTRIBUTED_SHARED",
        TensorMem => "TENSOR_MEM",
        TensorCoreMem => "TENSOR_CORE_MEM"
    }
}

impl MemorySpace {
    pub fn is_none(self) -> bool {
        self == MemorySpace::None
    }

    /// Number of memory reference operands an instruction in this space
    /// is expected to carry.
    pub fn max_mem_refs(self) -> usize {
        match self {
            MemorySpace::None => 0,
            MemorySpace::GlobalToShared => MAX_NUM_MREF_PER_INSTR,
            _ => 1
        }
    }

    pub fn is_shared_like(self) -> bool {
        matches!(
            self,
            MemorySpace::Shared | MemorySpace::DistributedShared | MemorySpace::GlobalToShared
        )
    }
}
