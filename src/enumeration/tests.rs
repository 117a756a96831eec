use crate::enumeration::{
    IndexRange, MutableEquations, apply_variant, choose_worker_count, decode, encode,
    operator_to_bit, partition, split_samples,
};
use crate::error::{ConfigurationError, IndexOutOfRange};
use crate::model::{LinkOperator, LinkOperators};
use crate::test_utils::{init_logger, mk_model};

#[test]
fn encode_literal_vectors() {
    assert_eq!(encode(0, 1).unwrap(), "0");
    assert_eq!(encode(0, 3).unwrap(), "000");
    assert_eq!(encode(0, 10).unwrap(), "0000000000");
    assert_eq!(encode(5, 3).unwrap(), "101");
    assert_eq!(encode(5, 4).unwrap(), "0101");
    assert_eq!(encode(5, 5).unwrap(), "00101");
    assert_eq!(encode(7, 3).unwrap(), "111");
    assert_eq!(encode(7, 6).unwrap(), "000111");
    assert_eq!(encode(0, 4).unwrap(), "0000");
    assert_eq!(encode(1, 4).unwrap(), "0001");
    assert_eq!(encode(3, 4).unwrap(), "0011");
    assert_eq!(encode(11, 4).unwrap(), "1011");
    assert_eq!(encode(11, 8).unwrap(), "00001011");
}

#[test]
fn encode_rejects_invalid_input() {
    assert_eq!(encode(-1, 0), Err(IndexOutOfRange::Negative(-1)));
    assert_eq!(encode(0, 0), Err(IndexOutOfRange::NoDigits));
    assert!(matches!(
        encode(3, 1),
        Err(IndexOutOfRange::ExceedsDigits { max: 1, .. })
    ));
    assert!(matches!(
        encode(7, 2),
        Err(IndexOutOfRange::ExceedsDigits { max: 3, .. })
    ));
    assert!(matches!(
        encode(16, 4),
        Err(IndexOutOfRange::ExceedsDigits {
            index: 16,
            digits: 4,
            max: 15
        })
    ));
}

#[test]
fn encode_wide_patterns() {
    let max = encode(i64::MAX, 63).unwrap();
    assert_eq!(max.len(), 63);
    assert!(max.chars().all(|it| it == '1'));
    assert_eq!(encode(1, 70).unwrap().len(), 70);
}

#[test]
fn decode_inverts_encode() {
    for digits in 1..=10u32 {
        for index in 0..(1i64 << digits) {
            let bits = encode(index, digits).unwrap();
            assert_eq!(bits.len(), digits as usize);
            assert_eq!(decode(&bits), Some(index));
        }
    }
    assert_eq!(decode(""), None);
    assert_eq!(decode("10a"), None);
}

#[test]
fn mutable_equations_follow_model_order() {
    // Links: And, None, Or, None, And
    let model = mk_model(&[Some(false), None, Some(true), None, Some(false)]);
    let mutable = MutableEquations::from(&model);
    assert_eq!(mutable.positions(), &[0, 2, 4]);
    assert_eq!(mutable.digits(), 3);
    assert_eq!(mutable.variant_count(), Some(8));
    assert_eq!(mutable.try_variant_count(&model).unwrap(), 8);

    let fixed = mk_model(&[None, None]);
    let mutable = MutableEquations::from(&fixed);
    assert!(mutable.is_empty());
    assert!(matches!(
        mutable.try_variant_count(&fixed),
        Err(ConfigurationError::NothingToEnumerate(_))
    ));
}

#[test]
fn apply_variant_matches_bit_pattern() {
    init_logger();
    let mut model = mk_model(&[Some(false), None, Some(true), None, Some(false)]);
    let mutable = MutableEquations::from(&model);

    for index in 0..8u64 {
        apply_variant(&mut model, index, &mutable).unwrap();
        let bits = encode(index as i64, 3).unwrap();
        for (position, digit) in mutable.positions().iter().zip(bits.chars()) {
            assert_eq!(operator_to_bit(model.link_operator(*position)), Some(digit == '1'));
        }
        // Immutable equations are never touched.
        assert_eq!(model.link_operator(1), LinkOperator::None);
        assert_eq!(model.link_operator(3), LinkOperator::None);
    }
}

#[test]
fn apply_variant_is_idempotent_and_reversible() {
    let mut model = mk_model(&[Some(true), Some(false), None, Some(true)]);
    let mutable = MutableEquations::from(&model);

    // The initial assignment is `101` = 5.
    assert_eq!(apply_variant(&mut model, 5, &mutable).unwrap(), 0);

    let original = model.link_operators();
    let flips = apply_variant(&mut model, 2, &mutable).unwrap();
    assert_eq!(flips, 3);
    assert_eq!(apply_variant(&mut model, 2, &mutable).unwrap(), 0);

    apply_variant(&mut model, 6, &mutable).unwrap();
    apply_variant(&mut model, 5, &mutable).unwrap();
    assert_eq!(model.link_operators(), original);
}

#[test]
fn apply_variant_rejects_out_of_range_index() {
    let mut model = mk_model(&[Some(false), Some(false)]);
    let mutable = MutableEquations::from(&model);
    let before = model.link_operators();
    assert!(apply_variant(&mut model, 4, &mutable).is_err());
    assert_eq!(model.link_operators(), before);
}

fn check_partition(num_variants: u64, workers: usize) {
    let ranges = partition(num_variants, workers);
    assert!(!ranges.is_empty());
    assert_eq!(ranges[0].start, 0);
    assert_eq!(ranges[ranges.len() - 1].end, num_variants);
    for pair in ranges.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let total: u64 = ranges.iter().map(|it| it.len()).sum();
    assert_eq!(total, num_variants);

    let w = workers as u64;
    let last = ranges[ranges.len() - 1];
    if workers > 1 && w < num_variants {
        assert_eq!(ranges.len(), workers);
        assert_eq!(last.len(), num_variants - (w - 1) * (num_variants / w));
    } else {
        assert_eq!(ranges, vec![IndexRange::new(0, num_variants)]);
    }
}

#[test]
fn partition_covers_index_space() {
    for num_variants in 1..=64u64 {
        for workers in 1..=12usize {
            check_partition(num_variants, workers);
        }
    }
    check_partition(1 << 40, 6);
}

#[test]
fn partition_remainder_goes_to_last_worker() {
    assert_eq!(
        partition(10, 4),
        vec![
            IndexRange::new(0, 2),
            IndexRange::new(2, 4),
            IndexRange::new(4, 6),
            IndexRange::new(6, 10),
        ]
    );
    assert_eq!(split_samples(10, 4), vec![2, 2, 2, 4]);
    assert_eq!(split_samples(3, 8), vec![3]);
}

#[test]
fn worker_count_selection() {
    assert_eq!(choose_worker_count(8, 1024, false), 1);
    assert_eq!(choose_worker_count(1, 1024, true), 1);
    assert_eq!(choose_worker_count(8, 1024, true), 8);
    assert_eq!(choose_worker_count(7, 1024, true), 6);
    // Never more workers than variants, and no fan-out below two indices per worker.
    assert_eq!(choose_worker_count(16, 8, true), 1);
    assert_eq!(choose_worker_count(16, 9, true), 8);
    assert_eq!(choose_worker_count(3, 2, true), 1);
}

#[test]
fn index_range_basics() {
    let range = IndexRange::new(4, 8);
    assert_eq!(range.len(), 4);
    assert!(range.contains(4));
    assert!(!range.contains(8));
    assert_eq!(range.iter().collect::<Vec<_>>(), vec![4, 5, 6, 7]);
    assert_eq!(range.to_string(), "[4, 8)");
    assert!(IndexRange::new(3, 3).is_empty());
}
