use crate::extend_lineage;
use seqkit_core::{deferred, Key, Pairs, Sequence, Stage, StageKind};
use std::cmp::Ordering;
use tracing::debug;

/// Caller-supplied ordering between two values.
pub type Comparator<'a, V> = Box<dyn FnMut(&V, &V) -> Ordering + 'a>;

/// Drains the upstream, orders it by value and replays it.
///
/// With `preserve_keys` every value keeps its original key (associative
/// sort). Otherwise the output is reindexed `0..n` in sorted order. Sorting
/// is stable: ties keep their input order. The comparator must describe a
/// total order.
pub struct Sort<'a, V> {
    upstream: Sequence<'a, V>,
    comparator: Comparator<'a, V>,
    preserve_keys: bool,
}

impl<'a, V: 'a> Sort<'a, V> {
    /// Sorts with `comparator`, or by natural ascending order when `None`.
    pub fn new(
        upstream: Sequence<'a, V>,
        comparator: Option<Comparator<'a, V>>,
        preserve_keys: bool,
    ) -> Self
    where
        V: PartialOrd,
    {
        let comparator = match comparator {
            Some(comparator) => comparator,
            None => Box::new(natural_order::<V>),
        };
        Self {
            upstream,
            comparator,
            preserve_keys,
        }
    }

    pub fn natural(upstream: Sequence<'a, V>, preserve_keys: bool) -> Self
    where
        V: PartialOrd,
    {
        Self::new(upstream, None, preserve_keys)
    }

    pub fn with_comparator<C>(upstream: Sequence<'a, V>, comparator: C, preserve_keys: bool) -> Self
    where
        C: FnMut(&V, &V) -> Ordering + 'a,
    {
        Self {
            upstream,
            comparator: Box::new(comparator),
            preserve_keys,
        }
    }
}

fn natural_order<V: PartialOrd>(a: &V, b: &V) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

impl<'a, V: 'a> Stage<'a, V> for Sort<'a, V> {
    fn label(&self) -> &'static str {
        "Sort"
    }

    fn kind(&self) -> StageKind {
        StageKind::Stateful
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self {
            upstream,
            mut comparator,
            preserve_keys,
        } = *self;
        deferred(move || {
            let mut pairs: Vec<(Key, V)> = upstream.into_pairs().collect();
            debug!(items = pairs.len(), preserve_keys, "sort materialized upstream");
            pairs.sort_by(|(_, a), (_, b)| comparator(a, b));
            if preserve_keys {
                pairs
            } else {
                pairs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (_, value))| (Key::Index(i), value))
                    .collect()
            }
        })
    }
}
