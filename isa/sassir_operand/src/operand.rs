// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use sassir_target::reg::{RZ, URZ};
use sassir_target::RegFile;

use crate::builder::OperandBuilder;
use crate::config::OperandConfig;
use crate::errors::OperandError;
use crate::kind::OperandKind;
use crate::payload::*;
use crate::text::OperandText;

/// Modifiers that apply to an operand whatever its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OperandMods {
    pub is_neg: bool,
    pub is_not: bool,
    pub is_abs: bool
}

impl OperandMods {
    pub fn is_empty(&self) -> bool {
        !(self.is_neg || self.is_not || self.is_abs)
    }
}

/// Fields shared by every operand, as handed over by a decoder.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperandHeader {
    pub text: String,
    pub mods: OperandMods,

    /// Width in bytes, `0` when the operand has none.
    pub size_bytes: u32
}

/// One operand slot of a decoded instruction.
///
/// Built once and read-only afterwards. A rewritten operand is a new
/// value, see [`Operand::to_builder`].
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    text: OperandText,
    mods: OperandMods,
    size_bytes: u32,
    payload: OperandPayload
}

macro_rules! check_operand_kind {
    ($fn_name:ident, $variant:ident) => {
        pub fn $fn_name(&self) -> bool {
            matches!(self.payload, OperandPayload::$variant(..))
        }
    };
}

macro_rules! impl_as_payload {
    ($fn_name:ident, $variant:ident, &$value_type:ty) => {
        pub fn $fn_name(&self) -> Result<&$value_type, OperandError> {
            match &self.payload {
                OperandPayload::$variant(value) => Ok(value),
                other => Err(OperandError::KindMismatch {
                    expected: OperandKind::$variant,
                    found: other.kind()
                })
            }
        }
    };

    ($fn_name:ident, $variant:ident, $value_type:ty) => {
        pub fn $fn_name(&self) -> Result<$value_type, OperandError> {
            match &self.payload {
                OperandPayload::$variant(value) => Ok(*value),
                other => Err(OperandError::KindMismatch {
                    expected: OperandKind::$variant,
                    found: other.kind()
                })
            }
        }
    };
}

impl Operand {
    pub fn new(header: OperandHeader, payload: OperandPayload) -> Result<Self, OperandError> {
        Self::with_config(header, payload, &OperandConfig::default())
    }

    pub fn with_config(
        header: OperandHeader,
        payload: OperandPayload,
        config: &OperandConfig
    ) -> Result<Self, OperandError> {
        payload.validate()?;
        let text = OperandText::new(header.text, config.text_policy)?;
        Ok(Self {
            text,
            mods: header.mods,
            size_bytes: header.size_bytes,
            payload
        })
    }

    /// Same as [`Operand::new`] for decoders that compute the kind apart
    /// from the payload.
    pub fn with_kind(
        kind: OperandKind,
        header: OperandHeader,
        payload: OperandPayload
    ) -> Result<Self, OperandError> {
        if payload.kind() != kind {
            return Err(OperandError::KindMismatch { expected: kind, found: payload.kind() });
        }
        Self::new(header, payload)
    }

    pub fn builder() -> OperandBuilder {
        OperandBuilder::default()
    }

    /// Builder seeded with the header, payload and truncation state of this
    /// operand. The builder starts with the default [`OperandConfig`];
    /// replacing the text clears the truncation state.
    pub fn to_builder(&self) -> OperandBuilder {
        OperandBuilder::from_parts(self.header(), self.text.was_truncated(), self.payload.clone())
    }

    pub(crate) fn mark_text_truncated(&mut self) {
        self.text.mark_truncated();
    }

    pub fn kind(&self) -> OperandKind {
        self.payload.kind()
    }

    pub fn text(&self) -> &OperandText {
        &self.text
    }

    pub fn mods(&self) -> OperandMods {
        self.mods
    }

    pub fn is_neg(&self) -> bool {
        self.mods.is_neg
    }

    pub fn is_not(&self) -> bool {
        self.mods.is_not
    }

    pub fn is_abs(&self) -> bool {
        self.mods.is_abs
    }

    pub fn size_bytes(&self) -> u32 {
        self.size_bytes
    }

    pub fn payload(&self) -> &OperandPayload {
        &self.payload
    }

    pub fn header(&self) -> OperandHeader {
        OperandHeader {
            text: self.text.as_str().to_string(),
            mods: self.mods,
            size_bytes: self.size_bytes
        }
    }

    /// Payload of the operand if it is of the `expected` kind.
    pub fn inspect(&self, expected: OperandKind) -> Result<&OperandPayload, OperandError> {
        let found = self.kind();
        if found != expected {
            return Err(OperandError::KindMismatch { expected, found });
        }
        Ok(&self.payload)
    }

    check_operand_kind!(is_imm_u64, ImmUint64);
    check_operand_kind!(is_imm_f64, ImmDouble);
    check_operand_kind!(is_reg, Reg);
    check_operand_kind!(is_pred, Pred);
    check_operand_kind!(is_ureg, UReg);
    check_operand_kind!(is_upred, UPred);
    check_operand_kind!(is_cbank, CBank);
    check_operand_kind!(is_mref, MRef);
    check_operand_kind!(is_generic, Generic);
    check_operand_kind!(is_mem_desc, MemDesc);

    impl_as_payload!(as_imm_u64, ImmUint64, u64);
    impl_as_payload!(as_imm_f64, ImmDouble, f64);
    impl_as_payload!(as_reg, Reg, &RegOperand);
    impl_as_payload!(as_pred, Pred, &PredOperand);
    impl_as_payload!(as_ureg, UReg, &RegOperand);
    impl_as_payload!(as_upred, UPred, &PredOperand);
    impl_as_payload!(as_cbank, CBank, &CBankOperand);
    impl_as_payload!(as_mref, MRef, &MRefOperand);
    impl_as_payload!(as_mem_desc, MemDesc, &MemDescOperand);

    pub fn as_generic(&self) -> Result<&str, OperandError> {
        match &self.payload {
            OperandPayload::Generic(buf) => Ok(buf.as_str()),
            other => Err(OperandError::KindMismatch {
                expected: OperandKind::Generic,
                found: other.kind()
            })
        }
    }

    /// Register file the operand's number indexes into, for register and
    /// predicate operands.
    pub fn reg_file(&self) -> Option<RegFile> {
        self.kind().reg_file()
    }

    /// Register or predicate number, for register and predicate operands.
    pub fn reg_num(&self) -> Option<u8> {
        match &self.payload {
            OperandPayload::Reg(reg) | OperandPayload::UReg(reg) => Some(reg.num),
            OperandPayload::Pred(pred) | OperandPayload::UPred(pred) => Some(pred.num),
            _ => None
        }
    }

    /// `RZ` or `URZ`: reads as zero, writes are discarded.
    pub fn is_zero_reg(&self) -> bool {
        match &self.payload {
            OperandPayload::Reg(reg) => reg.num == RZ,
            OperandPayload::UReg(reg) => reg.num == URZ,
            _ => false
        }
    }

    /// `PT` or `UPT`. Inversion is not taken into account.
    pub fn is_true_pred(&self) -> bool {
        match &self.payload {
            OperandPayload::Pred(pred) | OperandPayload::UPred(pred) => pred.is_true(),
            _ => false
        }
    }
}
