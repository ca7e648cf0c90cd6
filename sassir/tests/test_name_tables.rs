#[cfg(test)]
mod tests_name_tables {
    use sassir::prelude::*;

    #[test]
    pub fn test_every_enumerator_has_a_stable_name() {
        fn check<T: Copy + std::fmt::Display + PartialEq + std::fmt::Debug>(
            all: &[T],
            names: &[&str],
            count: usize,
            name: fn(T) -> &'static str
        ) {
            assert_eq!(all.len(), count);
            assert_eq!(names.len(), count);
            for (ordinal, variant) in all.iter().enumerate() {
                assert!(!names[ordinal].is_empty());
                assert_eq!(name(*variant), names[ordinal]);
                assert_eq!(variant.to_string(), names[ordinal]);
            }
        }

        check(OperandKind::ALL, OperandKind::NAMES, OperandKind::COUNT, OperandKind::name);
        check(RegModifier::ALL, RegModifier::NAMES, RegModifier::COUNT, RegModifier::name);
        check(MemorySpace::ALL, MemorySpace::NAMES, MemorySpace::COUNT, MemorySpace::name);
        check(RegFile::ALL, RegFile::NAMES, RegFile::COUNT, RegFile::name);
    }

    #[test]
    pub fn test_names_keep_their_ordinals() {
        assert_eq!(OperandKind::from_ordinal(7), Some(OperandKind::MRef));
        assert_eq!(OperandKind::MemDesc.name(), "MEM_DESC");
        assert_eq!(MemorySpace::from_ordinal(6), Some(MemorySpace::GlobalToShared));
        assert_eq!(RegModifier::from_ordinal(0), Some(RegModifier::NoMod));
        assert_eq!(RegModifier::U64.name(), "64");
        assert!("U64".parse::<RegModifier>().is_err());
        assert_eq!(RegModifier::from_suffix("U64"), Some(RegModifier::U64));
    }
}
