use file_input::domain::select_unit;
use file_input::{ByteUnit, BytesFormatter, FileHandle, FileSet, FileValidators, Validator, to_bytes};
use proptest::prelude::*;

fn unit() -> impl Strategy<Value = ByteUnit> {
    prop::sample::select(ByteUnit::ALL.to_vec())
}

fn file_set() -> impl Strategy<Value = FileSet> {
    prop::collection::vec(0_u64..1_000_000, 1..8)
        .prop_map(|sizes| sizes.into_iter().map(|size| FileHandle::new("f.bin", size)).collect())
}

proptest! {
    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn normalizing_whole_values_is_exact(value in 0_u64..(1 << 20), from in unit()) {
        let expected = u128::from(value) * u128::from(from.scale());
        prop_assert_eq!(to_bytes(value as f64, from), expected as f64);
    }

    #[test]
    fn auto_selected_unit_never_shrinks(a in 0_u64..(1 << 52), b in 0_u64..(1 << 52)) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        #[allow(clippy::cast_precision_loss)]
        let (lo, hi) = (lo as f64, hi as f64);
        prop_assert!(select_unit(lo) <= select_unit(hi));
    }

    #[test]
    fn formatting_is_stable_under_reformatting(bytes in 0_u64..(1 << 45), precision in 0_u32..4) {
        let formatter = BytesFormatter::new();
        let first = formatter.request(bytes).precision(precision).format().into_string();
        let (number, label) = first.split_once(' ').expect("formatted output has a unit");
        let again = formatter
            .request(number)
            .precision(precision)
            .from_unit(label)
            .to_unit(label)
            .format()
            .into_string();
        prop_assert_eq!(again, first);
    }

    #[test]
    fn max_content_size_rejects_exactly_oversized_sets(set in file_set(), limit in 0_u64..4_000_000) {
        let total = set.total_size().bytes();
        let verdict = FileValidators::max_content_size(limit).validate(Some(&set));
        prop_assert_eq!(verdict.is_err(), total > limit);
    }

    #[test]
    fn min_content_size_rejects_exactly_undersized_sets(set in file_set(), limit in 0_u64..4_000_000) {
        let total = set.total_size().bytes();
        let verdict = FileValidators::min_content_size(limit).validate(Some(&set));
        prop_assert_eq!(verdict.is_err(), total < limit);
    }

    #[test]
    fn size_validators_give_the_same_verdict_twice(set in file_set(), limit in 0_u64..4_000_000) {
        let max = FileValidators::max_content_size(limit);
        let min = FileValidators::min_content_size(limit);
        prop_assert_eq!(max.validate(Some(&set)), max.validate(Some(&set)));
        prop_assert_eq!(min.validate(Some(&set)), min.validate(Some(&set)));
    }

    #[test]
    fn passthrough_returns_the_original_text(text in "[a-zA-Z ]{1,16}") {
        let outcome = BytesFormatter::new().format(text.as_str());
        prop_assert_eq!(outcome.to_string(), text);
    }
}
