// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use sassir_target::reg::{PR, PT};
use sassir_target::{RegFile, RegModifier, RegNum};

use crate::errors::OperandError;
use crate::kind::OperandKind;
use crate::text::check_len;

/// Range-checks a decoded number against the register file it indexes.
pub(crate) fn check_num(
    kind: OperandKind,
    field: &'static str,
    file: RegFile,
    num: u32
) -> Result<RegNum, OperandError> {
    file.check(num)
        .ok_or_else(|| OperandError::out_of_range(kind, field, num, u32::from(file.max_num())))
}

/// General purpose or uniform register.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegOperand {
    pub num: RegNum,

    /// Register properties, e.g. `.X4` or `.reuse`.
    pub prop: String
}

impl RegOperand {
    pub fn new(num: RegNum, prop: impl Into<String>) -> Self {
        Self { num, prop: prop.into() }
    }

    /// Stride or size modifier named by the property suffixes. The first
    /// recognized suffix wins.
    pub fn modifier(&self) -> RegModifier {
        self.prop
            .split('.')
            .find_map(RegModifier::from_suffix)
            .unwrap_or_default()
    }
}

/// Predicate or uniform predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PredOperand {
    pub num: RegNum
}

impl PredOperand {
    pub fn new(num: RegNum) -> Self {
        Self { num }
    }

    /// `PT` or `UPT`.
    pub fn is_true(&self) -> bool {
        self.num == PT
    }

    /// `PR` or `UPR`.
    pub fn is_whole_register(&self) -> bool {
        self.num == PR
    }
}

/// Reference into a constant bank. Either offset, both or neither may be
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CBankOperand {
    pub id: u32,
    pub imm_offset: Option<i32>,

    /// General purpose register added to the offset.
    pub reg_offset: Option<RegNum>
}

impl CBankOperand {
    pub fn new(id: u32) -> Self {
        Self { id, ..Default::default() }
    }
}

/// Register inside a memory reference, with its stride or size modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MRefReg {
    pub num: RegNum,
    pub modifier: RegModifier
}

impl MRefReg {
    pub fn new(num: RegNum, modifier: RegModifier) -> Self {
        Self { num, modifier }
    }
}

/// Compound addressing operand. Every part is optional; a reference with
/// nothing present is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MRefOperand {
    /// Base address register.
    pub ra: Option<MRefReg>,

    /// Uniform register offset.
    pub ur: Option<MRefReg>,

    pub imm: Option<i32>,

    /// Uniform register holding the memory descriptor.
    pub desc_ureg: Option<RegNum>
}

impl MRefOperand {
    pub fn is_absent(&self) -> bool {
        self.ra.is_none() && self.ur.is_none() && self.imm.is_none() && self.desc_ureg.is_none()
    }
}

/// Descriptor-only memory reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemDescOperand {
    pub ureg_num: RegNum
}

/// Variant payload of an operand. The variant is the operand's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum OperandPayload {
    ImmUint64(u64),
    ImmDouble(f64),
    Reg(RegOperand),
    Pred(PredOperand),
    UReg(RegOperand),
    UPred(PredOperand),
    CBank(CBankOperand),
    MRef(MRefOperand),

    /// Operand forms not otherwise modeled.
    Generic(String),

    MemDesc(MemDescOperand)
}

impl OperandPayload {
    pub fn kind(&self) -> OperandKind {
        match self {
            OperandPayload::ImmUint64(_) => OperandKind::ImmUint64,
            OperandPayload::ImmDouble(_) => OperandKind::ImmDouble,
            OperandPayload::Reg(_) => OperandKind::Reg,
            OperandPayload::Pred(_) => OperandKind::Pred,
            OperandPayload::UReg(_) => OperandKind::UReg,
            OperandPayload::UPred(_) => OperandKind::UPred,
            OperandPayload::CBank(_) => OperandKind::CBank,
            OperandPayload::MRef(_) => OperandKind::MRef,
            OperandPayload::Generic(_) => OperandKind::Generic,
            OperandPayload::MemDesc(_) => OperandKind::MemDesc,
        }
    }

    /// Checks every numeric field against its architectural range and
    /// every buffer against `MAX_CHARS`.
    pub fn validate(&self) -> Result<(), OperandError> {
        let kind = self.kind();
        match self {
            OperandPayload::ImmUint64(_) | OperandPayload::ImmDouble(_) => Ok(()),

            OperandPayload::Reg(reg) | OperandPayload::UReg(reg) => {
                if let Some(file) = kind.reg_file() {
                    check_num(kind, "num", file, u32::from(reg.num))?;
                }
                check_len("prop", &reg.prop)
            },

            OperandPayload::Pred(pred) | OperandPayload::UPred(pred) => {
                if let Some(file) = kind.reg_file() {
                    check_num(kind, "num", file, u32::from(pred.num))?;
                }
                Ok(())
            },

            OperandPayload::CBank(cbank) => {
                if let Some(reg) = cbank.reg_offset {
                    check_num(kind, "reg_offset", RegFile::Gpr, u32::from(reg))?;
                }
                Ok(())
            },

            OperandPayload::MRef(mref) => {
                if let Some(ra) = mref.ra {
                    check_num(kind, "ra_num", RegFile::Gpr, u32::from(ra.num))?;
                }
                if let Some(ur) = mref.ur {
                    check_num(kind, "ur_num", RegFile::Ugpr, u32::from(ur.num))?;
                }
                if let Some(desc) = mref.desc_ureg {
                    check_num(kind, "desc_ureg_num", RegFile::Ugpr, u32::from(desc))?;
                }
                Ok(())
            },

            OperandPayload::Generic(buf) => check_len("generic", buf),

            OperandPayload::MemDesc(desc) => {
                check_num(kind, "ureg_num", RegFile::Ugpr, u32::from(desc.ureg_num))?;
                Ok(())
            }
        }
    }
}
