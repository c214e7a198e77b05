use crate::{clamp_count, extend_lineage};
use seqkit_core::{Pairs, Sequence, Stage};

/// Yields at most `limit` leading pairs, then stops pulling upstream.
pub struct Limit<'a, V> {
    upstream: Sequence<'a, V>,
    limit: usize,
}

impl<'a, V: 'a> Limit<'a, V> {
    /// Negative limits are clamped to zero.
    pub fn new(upstream: Sequence<'a, V>, limit: i64) -> Self {
        Self {
            upstream,
            limit: clamp_count(limit),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl<'a, V: 'a> Stage<'a, V> for Limit<'a, V> {
    fn label(&self) -> &'static str {
        "Limit"
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self { upstream, limit } = *self;
        Box::new(upstream.into_pairs().take(limit))
    }
}
