use crate::extend_lineage;
use seqkit_core::{Key, Pairs, Sequence, Stage};

/// Forwards the pairs whose `(value, key)` satisfy the predicate.
pub struct Filter<'a, V, P> {
    upstream: Sequence<'a, V>,
    predicate: P,
}

impl<'a, V, P> Filter<'a, V, P>
where
    V: 'a,
    P: FnMut(&V, &Key) -> bool + 'a,
{
    pub fn new(upstream: Sequence<'a, V>, predicate: P) -> Self {
        Self { upstream, predicate }
    }
}

impl<'a, V, P> Stage<'a, V> for Filter<'a, V, P>
where
    V: 'a,
    P: FnMut(&V, &Key) -> bool + 'a,
{
    fn label(&self) -> &'static str {
        "Filter"
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self {
            upstream,
            mut predicate,
        } = *self;
        Box::new(
            upstream
                .into_pairs()
                .filter(move |(key, value)| predicate(value, key)),
        )
    }
}
