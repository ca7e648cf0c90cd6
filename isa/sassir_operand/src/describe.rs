// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

//! Human readable summaries for logs and debugging. These are not
//! assembly syntax.

use std::fmt;

use itertools::Itertools;
use sassir_target::{RegFile, RegModifier, RegNum};

use crate::operand::{Operand, OperandMods};
use crate::payload::*;

/// `R6`, or `R255(RZ)` when the number is reserved.
fn reg_label(file: RegFile, num: RegNum) -> String {
    let plain = file.reg_name(num);
    match file.reserved_name(num) {
        Some(_) => format!("{}{}({})", file.prefix(), num, plain),
        None => plain
    }
}

fn mref_reg_label(file: RegFile, reg: &MRefReg) -> String {
    match reg.modifier {
        RegModifier::NoMod => reg_label(file, reg.num),
        modifier => format!("{}.{}", reg_label(file, reg.num), modifier)
    }
}

/// Appends a signed offset as `+0x10` or `-0x10`, or alone when `base` is
/// empty.
fn with_offset(base: String, off: Option<i32>) -> String {
    match off {
        None => base,
        Some(off) => {
            let sign = if off < 0 { "-" } else if base.is_empty() { "" } else { "+" };
            format!("{base}{sign}{:#x}", off.unsigned_abs())
        }
    }
}

impl fmt::Display for OperandMods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flags = [(self.is_neg, "neg"), (self.is_not, "not"), (self.is_abs, "abs")];
        let set = flags.iter()
            .filter(|(on, _)| *on)
            .map(|(_, name)| *name)
            .join(",");
        write!(f, "[{set}]")
    }
}

impl fmt::Display for OperandPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandPayload::ImmUint64(value) => write!(f, "{value:#x}"),
            OperandPayload::ImmDouble(value) => write!(f, "{value:?}"),

            OperandPayload::Reg(reg) => write!(f, "{}{}", reg_label(RegFile::Gpr, reg.num), reg.prop),
            OperandPayload::UReg(reg) => write!(f, "{}{}", reg_label(RegFile::Ugpr, reg.num), reg.prop),
            OperandPayload::Pred(pred) => write!(f, "{}", reg_label(RegFile::Pred, pred.num)),
            OperandPayload::UPred(pred) => write!(f, "{}", reg_label(RegFile::UPred, pred.num)),

            OperandPayload::CBank(cbank) => {
                write!(f, "c[{:#x}]", cbank.id)?;
                let reg = cbank.reg_offset.map(|num| reg_label(RegFile::Gpr, num)).unwrap_or_default();
                let offset = with_offset(reg, cbank.imm_offset);
                if !offset.is_empty() {
                    write!(f, "[{offset}]")?;
                }
                Ok(())
            },

            OperandPayload::MRef(mref) => {
                let regs = [
                    mref.ra.map(|ra| mref_reg_label(RegFile::Gpr, &ra)),
                    mref.ur.map(|ur| mref_reg_label(RegFile::Ugpr, &ur)),
                ];
                let base = regs.into_iter().flatten().join("+");
                write!(f, "[{}]", with_offset(base, mref.imm))?;
                if let Some(desc) = mref.desc_ureg {
                    write!(f, " desc={}", reg_label(RegFile::Ugpr, desc))?;
                }
                Ok(())
            },

            OperandPayload::Generic(buf) => write!(f, "{buf:?}"),
            OperandPayload::MemDesc(desc) => write!(f, "desc[{}]", reg_label(RegFile::Ugpr, desc.ureg_num)),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {}", self.kind(), self.text().as_str(), self.payload())?;
        if self.text().was_truncated() {
            write!(f, " (truncated)")?;
        }
        if !self.mods().is_empty() {
            write!(f, " {}", self.mods())?;
        }
        if self.size_bytes() != 0 {
            write!(f, " nbytes={}", self.size_bytes())?;
        }
        Ok(())
    }
}

impl Operand {
    /// Stable one-line summary: kind name, text, payload, modifier flags
    /// and width.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use sassir_target::reg::{PR, PT, RZ, URZ};

    use super::*;

    #[test]
    fn test_describe_inverted_true_predicate() {
        let op = Operand::builder().text("!PT").pred(u32::from(PT)).not(true).build().unwrap();
        assert_eq!(op.describe(), "PRED \"!PT\" P7(PT) [not]");
    }

    #[test]
    fn test_describe_plain_predicate() {
        let op = Operand::builder().text("P0").pred(0).build().unwrap();
        assert_eq!(op.describe(), "PRED \"P0\" P0");

        let op = Operand::builder().text("UPR").upred(u32::from(PR)).build().unwrap();
        assert_eq!(op.describe(), "UPRED \"UPR\" UP8(UPR)");
    }

    #[test]
    fn test_describe_registers() {
        let op = Operand::builder().text("-|R4|").reg(4, "").neg(true).abs(true).size_bytes(4).build().unwrap();
        assert_eq!(op.describe(), "REG \"-|R4|\" R4 [neg,abs] nbytes=4");

        let op = Operand::builder().text("RZ").reg(u32::from(RZ), "").build().unwrap();
        assert_eq!(op.describe(), "REG \"RZ\" R255(RZ)");

        let op = Operand::builder().text("URZ.64").ureg(u32::from(URZ), ".64").build().unwrap();
        assert_eq!(op.describe(), "UREG \"URZ.64\" UR63(URZ).64");
    }

    #[test]
    fn test_describe_cbank() {
        let plain = Operand::builder().text("c[0x0]").cbank(0).build().unwrap();
        assert_eq!(plain.describe(), "CBANK \"c[0x0]\" c[0x0]");

        let both = Operand::builder().text("c[0x0][R2+0x10]").cbank(0).cbank_imm_offset(0x10).cbank_reg_offset(2).build().unwrap();
        assert_eq!(both.describe(), "CBANK \"c[0x0][R2+0x10]\" c[0x0][R2+0x10]");

        let negative = Operand::builder().text("c[0x0][-0x4]").cbank(0).cbank_imm_offset(-4).build().unwrap();
        assert_eq!(negative.describe(), "CBANK \"c[0x0][-0x4]\" c[0x0][-0x4]");

        let reg_minus = Operand::builder().cbank(2).cbank_reg_offset(1).cbank_imm_offset(-0x20).build().unwrap();
        assert_eq!(reg_minus.payload().to_string(), "c[0x2][R1-0x20]");
    }

    #[test]
    fn test_describe_mref() {
        let op = Operand::builder()
            .text("[R6.X4+0x10]")
            .mref_ra(6, RegModifier::X4)
            .mref_imm(0x10)
            .build()
            .unwrap();
        assert_eq!(op.describe(), "MREF \"[R6.X4+0x10]\" [R6.X4+0x10]");

        let op = Operand::builder().text("desc[UR4][R2.64]").mref_ra(2, RegModifier::U64).mref_desc(4).build().unwrap();
        assert_eq!(op.describe(), "MREF \"desc[UR4][R2.64]\" [R2.64] desc=UR4");

        let op = Operand::builder().text("[R1-0x10]").mref_ra(1, RegModifier::NoMod).mref_imm(-16).build().unwrap();
        assert_eq!(op.describe(), "MREF \"[R1-0x10]\" [R1-0x10]");

        let op = Operand::builder().mref_imm(i32::MIN).build().unwrap();
        assert_eq!(op.payload().to_string(), "[-0x80000000]");

        let op = Operand::builder().mref_imm(0x8).build().unwrap();
        assert_eq!(op.payload().to_string(), "[0x8]");

        let empty = Operand::builder().mref().build().unwrap();
        assert_eq!(empty.describe(), "MREF \"\" []");
    }

    #[test]
    fn test_describe_immediates_and_generic() {
        let op = Operand::builder().text("0x1f").imm_u64(0x1f).build().unwrap();
        assert_eq!(op.describe(), "IMM_UINT64 \"0x1f\" 0x1f");

        let op = Operand::builder().text("1").imm_f64(1.0).build().unwrap();
        assert_eq!(op.describe(), "IMM_DOUBLE \"1\" 1.0");

        let op = Operand::builder().text("SR_TID.X").generic("SR_TID.X").build().unwrap();
        assert_eq!(op.describe(), "GENERIC \"SR_TID.X\" \"SR_TID.X\"");
    }

    #[test]
    fn test_describe_is_stable() {
        let op = Operand::builder().text("desc[UR6]").mem_desc(6).build().unwrap();
        assert_eq!(op.describe(), op.describe());
        assert_eq!(op.describe(), "MEM_DESC \"desc[UR6]\" desc[UR6]");
    }
}
