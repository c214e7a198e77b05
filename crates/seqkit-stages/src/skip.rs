use crate::{clamp_count, extend_lineage};
use seqkit_core::{Pairs, Sequence, Stage};

/// Discards the first `count` pairs and forwards the rest untouched.
pub struct Skip<'a, V> {
    upstream: Sequence<'a, V>,
    count: usize,
}

impl<'a, V: 'a> Skip<'a, V> {
    /// Negative counts are clamped to zero.
    pub fn new(upstream: Sequence<'a, V>, count: i64) -> Self {
        Self {
            upstream,
            count: clamp_count(count),
        }
    }
}

impl<'a, V: 'a> Stage<'a, V> for Skip<'a, V> {
    fn label(&self) -> &'static str {
        "Skip"
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self { upstream, count } = *self;
        Box::new(upstream.into_pairs().skip(count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{assoc, drain, list};
    use seqkit_core::Key;

    #[test]
    fn test_skips_leading_pairs_and_keeps_keys() {
        let stage = Skip::new(list(vec![1, 2, 3]), 1);
        assert_eq!(drain(stage), vec![(Key::Index(1), 2), (Key::Index(2), 3)]);
    }

    #[test]
    fn test_counts_pairs_not_keys() {
        let stage = Skip::new(assoc(vec![("a", 1), ("b", 2), ("c", 3)]), 2);
        assert_eq!(drain(stage), vec![(Key::from("c"), 3)]);
    }

    #[test]
    fn test_negative_and_oversized_counts() {
        assert_eq!(drain(Skip::new(list(vec![1, 2]), -3)).len(), 2);
        assert!(drain(Skip::new(list(vec![1, 2]), 7)).is_empty());
    }
}
