use crate::extend_lineage;
use seqkit_core::{Pairs, Sequence, Stage};
use std::marker::PhantomData;

/// Transforms every value, keeping its key.
pub struct Map<'a, V, U, F> {
    upstream: Sequence<'a, V>,
    mapper: F,
    output: PhantomData<fn() -> U>,
}

impl<'a, V, U, F> Map<'a, V, U, F>
where
    V: 'a,
    F: FnMut(V) -> U + 'a,
{
    pub fn new(upstream: Sequence<'a, V>, mapper: F) -> Self {
        Self {
            upstream,
            mapper,
            output: PhantomData,
        }
    }
}

impl<'a, V, U, F> Stage<'a, U> for Map<'a, V, U, F>
where
    V: 'a,
    U: 'a,
    F: FnMut(V) -> U + 'a,
{
    fn label(&self) -> &'static str {
        "Map"
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, U> {
        let Self {
            upstream,
            mut mapper,
            ..
        } = *self;
        Box::new(
            upstream
                .into_pairs()
                .map(move |(key, value)| (key, mapper(value))),
        )
    }
}
