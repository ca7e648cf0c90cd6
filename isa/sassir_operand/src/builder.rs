// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use sassir_target::{RegFile, RegModifier};

use crate::config::OperandConfig;
use crate::errors::{InvalidOperand, OperandError};
use crate::kind::OperandKind;
use crate::operand::{Operand, OperandHeader};
use crate::payload::*;

/// Populates an operand field by field, the way a decoder walks an
/// instruction encoding.
///
/// Register numbers are taken as raw decoded values and range-checked.
/// The first failure is kept and reported by [`OperandBuilder::build`].
/// Setting a payload replaces any payload set before.
#[derive(Debug, Clone, Default)]
pub struct OperandBuilder {
    header: OperandHeader,

    /// Text came from an operand that was already truncated.
    text_truncated: bool,
    payload: Option<OperandPayload>,
    config: OperandConfig,
    error: Option<OperandError>
}

impl OperandBuilder {
    pub fn new(config: OperandConfig) -> Self {
        Self { config, ..Default::default() }
    }

    pub(crate) fn from_parts(header: OperandHeader, text_truncated: bool, payload: OperandPayload) -> Self {
        Self {
            header,
            text_truncated,
            payload: Some(payload),
            ..Default::default()
        }
    }

    pub fn config(mut self, config: OperandConfig) -> Self {
        self.config = config;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.header.text = text.into();
        self.text_truncated = false;
        self
    }

    pub fn neg(mut self, is_neg: bool) -> Self {
        self.header.mods.is_neg = is_neg;
        self
    }

    pub fn not(mut self, is_not: bool) -> Self {
        self.header.mods.is_not = is_not;
        self
    }

    pub fn abs(mut self, is_abs: bool) -> Self {
        self.header.mods.is_abs = is_abs;
        self
    }

    pub fn size_bytes(mut self, size_bytes: u32) -> Self {
        self.header.size_bytes = size_bytes;
        self
    }

    pub fn imm_u64(self, value: u64) -> Self {
        self.payload(OperandPayload::ImmUint64(value))
    }

    pub fn imm_f64(self, value: f64) -> Self {
        self.payload(OperandPayload::ImmDouble(value))
    }

    pub fn reg(self, num: u32, prop: impl Into<String>) -> Self {
        match check_num(OperandKind::Reg, "num", RegFile::Gpr, num) {
            Ok(num) => self.payload(OperandPayload::Reg(RegOperand::new(num, prop))),
            Err(err) => self.fail(err)
        }
    }

    pub fn ureg(self, num: u32, prop: impl Into<String>) -> Self {
        match check_num(OperandKind::UReg, "num", RegFile::Ugpr, num) {
            Ok(num) => self.payload(OperandPayload::UReg(RegOperand::new(num, prop))),
            Err(err) => self.fail(err)
        }
    }

    pub fn pred(self, num: u32) -> Self {
        match check_num(OperandKind::Pred, "num", RegFile::Pred, num) {
            Ok(num) => self.payload(OperandPayload::Pred(PredOperand::new(num))),
            Err(err) => self.fail(err)
        }
    }

    pub fn upred(self, num: u32) -> Self {
        match check_num(OperandKind::UPred, "num", RegFile::UPred, num) {
            Ok(num) => self.payload(OperandPayload::UPred(PredOperand::new(num))),
            Err(err) => self.fail(err)
        }
    }

    pub fn generic(self, buf: impl Into<String>) -> Self {
        self.payload(OperandPayload::Generic(buf.into()))
    }

    pub fn mem_desc(self, ureg_num: u32) -> Self {
        match check_num(OperandKind::MemDesc, "ureg_num", RegFile::Ugpr, ureg_num) {
            Ok(ureg_num) => self.payload(OperandPayload::MemDesc(MemDescOperand { ureg_num })),
            Err(err) => self.fail(err)
        }
    }

    /// Constant bank reference with no offset yet.
    pub fn cbank(self, id: u32) -> Self {
        self.payload(OperandPayload::CBank(CBankOperand::new(id)))
    }

    pub fn cbank_imm_offset(self, offset: i32) -> Self {
        self.with_cbank(|cbank| {
            cbank.imm_offset = Some(offset);
            Ok(())
        })
    }

    pub fn cbank_reg_offset(self, num: u32) -> Self {
        self.with_cbank(|cbank| {
            cbank.reg_offset = Some(check_num(OperandKind::CBank, "reg_offset", RegFile::Gpr, num)?);
            Ok(())
        })
    }

    /// Memory reference with nothing present yet.
    pub fn mref(self) -> Self {
        self.payload(OperandPayload::MRef(MRefOperand::default()))
    }

    /// Base address register of a memory reference.
    pub fn mref_ra(self, num: u32, modifier: RegModifier) -> Self {
        self.with_mref(|mref| {
            let num = check_num(OperandKind::MRef, "ra_num", RegFile::Gpr, num)?;
            mref.ra = Some(MRefReg::new(num, modifier));
            Ok(())
        })
    }

    /// Uniform register offset of a memory reference.
    pub fn mref_ur(self, num: u32, modifier: RegModifier) -> Self {
        self.with_mref(|mref| {
            let num = check_num(OperandKind::MRef, "ur_num", RegFile::Ugpr, num)?;
            mref.ur = Some(MRefReg::new(num, modifier));
            Ok(())
        })
    }

    pub fn mref_imm(self, imm: i32) -> Self {
        self.with_mref(|mref| {
            mref.imm = Some(imm);
            Ok(())
        })
    }

    pub fn mref_desc(self, ureg_num: u32) -> Self {
        self.with_mref(|mref| {
            mref.desc_ureg = Some(check_num(OperandKind::MRef, "desc_ureg_num", RegFile::Ugpr, ureg_num)?);
            Ok(())
        })
    }

    /// Validates every field and produces the operand.
    pub fn build(self) -> Result<Operand, OperandError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        let payload = self.payload
            .ok_or(OperandError::InvalidOperand(InvalidOperand::MissingPayload))?;
        let mut op = Operand::with_config(self.header, payload, &self.config)?;
        if self.text_truncated {
            op.mark_text_truncated();
        }
        Ok(op)
    }

    fn payload(mut self, payload: OperandPayload) -> Self {
        self.payload = Some(payload);
        self
    }

    fn fail(mut self, err: OperandError) -> Self {
        if self.error.is_none() {
            self.error = Some(err);
        }
        self
    }

    fn with_cbank<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut CBankOperand) -> Result<(), OperandError>
    {
        // an offset is meaningless without the bank id from `cbank`
        let mut cbank = match self.payload.take() {
            Some(OperandPayload::CBank(cbank)) => cbank,
            other => {
                self.payload = other;
                return self.fail(OperandError::InvalidOperand(InvalidOperand::MissingPayload));
            }
        };
        let result = update(&mut cbank);
        self.payload = Some(OperandPayload::CBank(cbank));
        match result {
            Ok(()) => self,
            Err(err) => self.fail(err)
        }
    }

    fn with_mref<F>(mut self, update: F) -> Self
    where
        F: FnOnce(&mut MRefOperand) -> Result<(), OperandError>
    {
        let mut mref = match self.payload.take() {
            Some(OperandPayload::MRef(mref)) => mref,
            _ => MRefOperand::default()
        };
        let result = update(&mut mref);
        self.payload = Some(OperandPayload::MRef(mref));
        match result {
            Ok(()) => self,
            Err(err) => self.fail(err)
        }
    }
}
