// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use sassir_target::named_enum;
use sassir_target::RegFile;

named_enum! {
    /// Discriminant of an operand. Each kind selects exactly one payload.
    pub enum OperandKind {
        ImmUint64 => "IMM_UINT64",
        ImmDouble => "IMM_DOUBLE",
        Reg => "REG",
        Pred => "PRED",
        UReg => "UREG",
        UPred => "UPRED",
        CBank => "CBANK",
        MRef => "MREF",
        Generic => "GENERIC",
        MemDesc => "MEM_DESC"
    }
}

impl OperandKind {
    /// Register file indexed by the operand's number, for register and
    /// predicate kinds.
    pub fn reg_file(self) -> Option<RegFile> {
        match self {
            OperandKind::Reg => Some(RegFile::Gpr),
            OperandKind::UReg => Some(RegFile::Ugpr),
            OperandKind::Pred => Some(RegFile::Pred),
            OperandKind::UPred => Some(RegFile::UPred),
            _ => None
        }
    }

    pub fn is_immediate(self) -> bool {
        matches!(self, OperandKind::ImmUint64 | OperandKind::ImmDouble)
    }

    /// Kinds that address memory on their own.
    pub fn is_memory(self) -> bool {
        matches!(self, OperandKind::MRef | OperandKind::MemDesc)
    }
}
