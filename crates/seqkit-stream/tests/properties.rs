//! Property tests over finite sequences.

use proptest::prelude::*;
use seqkit_stream::{Key, Stream};

fn small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

proptest! {
    #[test]
    fn filter_keeps_matching_subsequence_with_keys(values in small_values(), modulus in 1i32..5) {
        let expected: Vec<(Key, i32)> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| *v % modulus == 0)
            .map(|(i, v)| (Key::Index(i), *v))
            .collect();
        let actual: Vec<(Key, i32)> = Stream::of(values)
            .filter(move |v| v % modulus == 0)
            .items()
            .into_iter()
            .collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn map_applies_elementwise(values in small_values()) {
        let expected: Vec<i64> = values.iter().map(|v| i64::from(*v) * 3 - 1).collect();
        let actual = Stream::of(values).map(|v| i64::from(v) * 3 - 1).values();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn limit_count_is_bounded(values in small_values(), n in -10i64..60) {
        let len = values.len();
        let expected = if n <= 0 { 0 } else { len.min(n as usize) };
        prop_assert_eq!(Stream::of(values).limit(n).count(), expected);
    }

    #[test]
    fn skip_removes_prefix_and_keeps_keys(values in small_values(), n in -10i64..60) {
        let dropped = if n <= 0 { 0 } else { values.len().min(n as usize) };
        let expected: Vec<(Key, i32)> = values
            .iter()
            .enumerate()
            .skip(dropped)
            .map(|(i, v)| (Key::Index(i), *v))
            .collect();
        let actual: Vec<(Key, i32)> = Stream::of(values).skip(n).items().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn sort_matches_std_sort(values in small_values()) {
        let mut expected = values.clone();
        expected.sort();
        let (keys, sorted): (Vec<Key>, Vec<i32>) = Stream::of(values).sort().items().into_iter().unzip();
        prop_assert_eq!(keys, (0..expected.len()).map(Key::Index).collect::<Vec<_>>());
        prop_assert_eq!(sorted, expected);
    }

    #[test]
    fn unique_keeps_first_occurrences(values in small_values()) {
        let mut expected: Vec<(Key, i32)> = Vec::new();
        for (i, v) in values.iter().enumerate() {
            if !expected.iter().any(|(_, seen)| seen == v) {
                expected.push((Key::Index(i), *v));
            }
        }
        let actual: Vec<(Key, i32)> = Stream::of(values).unique().items().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn terminal_twice_yields_empty_second_time(values in small_values()) {
        let mut stream = Stream::of(values.clone()).map(|v| v + 1);
        prop_assert_eq!(stream.values().len(), values.len());
        prop_assert!(stream.values().is_empty());
    }
}
