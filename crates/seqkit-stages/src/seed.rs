use seqkit_core::{Key, Pairs, Stage, StageKind};
use tracing::debug;

/// Yields `initial`, then `next(previous)` forever.
///
/// Keys are positions starting at 0. Each successor is computed only when
/// it is pulled. The sequence never ends on its own; consumers must bound
/// it, typically with [`crate::Limit`].
pub struct Seed<V, F> {
    initial: V,
    next: F,
}

impl<V, F> Seed<V, F>
where
    V: Clone,
    F: FnMut(&V) -> V,
{
    pub fn new(initial: V, next: F) -> Self {
        Self { initial, next }
    }
}

impl<'a, V, F> Stage<'a, V> for Seed<V, F>
where
    V: Clone + 'a,
    F: FnMut(&V) -> V + 'a,
{
    fn label(&self) -> &'static str {
        "Seed"
    }

    fn kind(&self) -> StageKind {
        StageKind::Generative
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        debug!("seed traversal started");
        let Self { initial, next } = *self;
        let values = Successors {
            initial: Some(initial),
            previous: None,
            next,
        };
        Box::new(values.enumerate().map(|(i, value)| (Key::Index(i), value)))
    }
}

/// Unlike `std::iter::successors`, computes a value only when asked for it.
struct Successors<V, F> {
    initial: Option<V>,
    previous: Option<V>,
    next: F,
}

impl<V, F> Iterator for Successors<V, F>
where
    V: Clone,
    F: FnMut(&V) -> V,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        let value = match self.previous.take() {
            Some(previous) => (self.next)(&previous),
            None => self.initial.take()?,
        };
        self.previous = Some(value.clone());
        Some(value)
    }
}
