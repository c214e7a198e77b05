use crate::extend_lineage;
use seqkit_core::{Key, Pairs, Sequence, Stage};
use tracing::trace;

/// Runs an observer on every pulled pair, then forwards it unchanged.
///
/// The observer fires once per pair actually pulled downstream, so a
/// consumer that stops early never triggers it for the remainder.
pub struct Peek<'a, V, O> {
    upstream: Sequence<'a, V>,
    observer: O,
}

impl<'a, V, O> Peek<'a, V, O>
where
    V: 'a,
    O: FnMut(&V, &Key) + 'a,
{
    pub fn new(upstream: Sequence<'a, V>, observer: O) -> Self {
        Self { upstream, observer }
    }
}

impl<'a, V, O> Stage<'a, V> for Peek<'a, V, O>
where
    V: 'a,
    O: FnMut(&V, &Key) + 'a,
{
    fn label(&self) -> &'static str {
        "Peek"
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self {
            upstream,
            mut observer,
        } = *self;
        Box::new(upstream.into_pairs().inspect(move |(key, value)| {
            trace!(%key, "peek");
            observer(value, key);
        }))
    }
}
