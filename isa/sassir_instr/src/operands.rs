// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use indexmap::IndexMap;
use itertools::Itertools;
use sassir_operand::{MRefOperand, MemDescOperand, Operand, OperandBuilder, OperandKind, OperandPayload};
use sassir_target::reg::MAX_NUM_MREF_PER_INSTR;
use sassir_target::MemorySpace;

use crate::errors::InstrError;

/// Operands of one decoded instruction, together with the memory space the
/// instruction targets.
///
/// The list owns its operands; nothing here is shared with another
/// instruction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InstrOperands {
    mem_space: MemorySpace,
    operands: Vec<Operand>
}

impl InstrOperands {
    pub fn new(mem_space: MemorySpace, operands: Vec<Operand>) -> Result<Self, InstrError> {
        let found = operands.iter().filter(|op| op.is_mref()).count();
        if found > MAX_NUM_MREF_PER_INSTR {
            log::debug!(
                "rejecting {mem_space} operand list [{}]",
                operands.iter().map(|op| op.kind()).join(", ")
            );
            return Err(InstrError::TooManyMemRefs { found, max: MAX_NUM_MREF_PER_INSTR });
        }
        let ops = Self { mem_space, operands };
        if !ops.mem_refs_fit_space() {
            log::debug!(
                "{mem_space} instruction carries {found} memory references, expected at most {}",
                mem_space.max_mem_refs()
            );
        }
        Ok(ops)
    }

    /// Builds every operand in slot order and stops at the first failure.
    pub fn from_builders<I>(mem_space: MemorySpace, builders: I) -> Result<Self, InstrError>
    where
        I: IntoIterator<Item = OperandBuilder>
    {
        let operands = builders.into_iter()
            .map(OperandBuilder::build)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(mem_space, operands)
    }

    pub fn mem_space(&self) -> MemorySpace {
        self.mem_space
    }

    pub fn len(&self) -> usize {
        self.operands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Operand> {
        self.operands.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Operand> {
        self.operands.iter()
    }

    pub fn as_slice(&self) -> &[Operand] {
        &self.operands
    }

    /// First operand of the given kind.
    pub fn find(&self, kind: OperandKind) -> Option<&Operand> {
        self.operands.iter().find(|op| op.kind() == kind)
    }

    pub fn mem_refs(&self) -> impl Iterator<Item = &MRefOperand> {
        self.operands.iter().filter_map(|op| match op.payload() {
            OperandPayload::MRef(mref) => Some(mref),
            _ => None
        })
    }

    /// Whether the memory reference count agrees with the memory space,
    /// e.g. no memory reference at all under `MemorySpace::None`. A
    /// disagreement is logged, not rejected.
    pub fn mem_refs_fit_space(&self) -> bool {
        self.mem_refs().count() <= self.mem_space.max_mem_refs()
    }

    pub fn mem_descs(&self) -> impl Iterator<Item = &MemDescOperand> {
        self.operands.iter().filter_map(|op| match op.payload() {
            OperandPayload::MemDesc(desc) => Some(desc),
            _ => None
        })
    }

    /// Operand count per kind, in order of first appearance.
    pub fn kind_histogram(&self) -> IndexMap<OperandKind, usize> {
        let mut histogram = IndexMap::new();
        for op in &self.operands {
            *histogram.entry(op.kind()).or_insert(0) += 1;
        }
        histogram
    }

    pub fn accesses_memory(&self) -> bool {
        !self.mem_space.is_none() || self.operands.iter().any(|op| op.kind().is_memory())
    }
}

impl<'a> IntoIterator for &'a InstrOperands {
    type Item = &'a Operand;
    type IntoIter = std::slice::Iter<'a, Operand>;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

#[cfg(test)]
mod tests {
    use sassir_target::RegModifier;

    use super::*;

    fn mref(ra: u32) -> Operand {
        Operand::builder()
            .text(format!("[R{ra}]"))
            .mref_ra(ra, RegModifier::NoMod)
            .build()
            .unwrap()
    }

    fn reg(num: u32) -> Operand {
        Operand::builder().text(format!("R{num}")).reg(num, "").build().unwrap()
    }

    #[test]
    fn test_two_mrefs_allowed() {
        // LDGSTS [R2], [R4]
        let ops = InstrOperands::new(MemorySpace::GlobalToShared, vec![mref(2), mref(4)]).unwrap();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops.mem_refs().count(), 2);
        assert_eq!(ops.mem_refs().filter_map(|m| m.ra).map(|ra| ra.num).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_three_mrefs_rejected() {
        let err = InstrOperands::new(MemorySpace::Global, vec![mref(1), mref(2), mref(3)]).unwrap_err();
        assert_eq!(err, InstrError::TooManyMemRefs { found: 3, max: 2 });
        assert_eq!(err.code() as u32, 2000);
    }

    #[test]
    fn test_mem_refs_checked_against_space() {
        let ldgsts = InstrOperands::new(MemorySpace::GlobalToShared, vec![mref(2), mref(4)]).unwrap();
        assert!(ldgsts.mem_refs_fit_space());

        let two_global = InstrOperands::new(MemorySpace::Global, vec![mref(2), mref(4)]).unwrap();
        assert!(!two_global.mem_refs_fit_space());

        // accepted, but flagged
        let unflagged = InstrOperands::new(MemorySpace::None, vec![reg(1), mref(2)]).unwrap();
        assert!(!unflagged.mem_refs_fit_space());

        let alu = InstrOperands::new(MemorySpace::None, vec![reg(1), reg(2)]).unwrap();
        assert!(alu.mem_refs_fit_space());
    }

    #[test]
    fn test_kind_histogram_order() {
        let ops = InstrOperands::new(
            MemorySpace::Global,
            vec![reg(0), mref(2), reg(4), Operand::builder().text("P0").pred(0).build().unwrap()]
        ).unwrap();

        let histogram = ops.kind_histogram();
        let entries: Vec<_> = histogram.into_iter().collect();
        assert_eq!(entries, vec![(OperandKind::Reg, 2), (OperandKind::MRef, 1), (OperandKind::Pred, 1)]);
    }

    #[test]
    fn test_from_builders() {
        // LDG.E.64 R2, desc[UR4][R6.64+0x10]
        let ops = InstrOperands::from_builders(
            MemorySpace::Global,
            [
                Operand::builder().text("R2").reg(2, "").size_bytes(8),
                Operand::builder()
                    .text("desc[UR4][R6.64+0x10]")
                    .mref_ra(6, RegModifier::U64)
                    .mref_imm(0x10)
                    .mref_desc(4),
            ]
        ).unwrap();
        assert_eq!(ops.mem_space(), MemorySpace::Global);
        assert_eq!(ops.get(0).map(|op| op.size_bytes()), Some(8));
        assert_eq!(ops.mem_refs().next().and_then(|m| m.desc_ureg), Some(4));

        let err = InstrOperands::from_builders(
            MemorySpace::Global,
            [Operand::builder().text("R2").reg(2, ""), Operand::builder().pred(12)]
        ).unwrap_err();
        assert!(matches!(err, InstrError::Operand(_)));
        assert_eq!(err.code(), sassir_operand::ErrCode::OPD1000);
    }

    #[test]
    fn test_find_and_access() {
        let desc = Operand::builder().text("desc[UR4]").mem_desc(4).build().unwrap();
        let ops = InstrOperands::new(MemorySpace::None, vec![reg(1), desc]).unwrap();

        assert!(ops.accesses_memory());
        assert_eq!(ops.find(OperandKind::MemDesc).map(|op| op.text().as_str()), Some("desc[UR4]"));
        assert!(ops.find(OperandKind::CBank).is_none());
        assert_eq!(ops.mem_descs().map(|d| d.ureg_num).collect::<Vec<_>>(), vec![4]);

        let alu = InstrOperands::new(MemorySpace::None, vec![reg(1), reg(2)]).unwrap();
        assert!(!alu.accesses_memory());
        assert!(InstrOperands::default().is_empty());
    }
}
