//! Terminal operations: everything that pulls a stream's sequence
use crate::stream::Stream;
use seqkit_core::{Items, Key, Optional, Pairs, Sequence};
use tracing::debug;

impl<'a, V: 'a> Stream<'a, V> {
    /// Takes the sequence out of the facade, leaving it spent.
    fn pull(&mut self, operation: &'static str) -> Pairs<'a, V> {
        let sequence = std::mem::take(&mut self.sequence);
        debug!(
            stream = %self.config.name,
            operation,
            lineage = ?sequence.lineage(),
            kind = ?sequence.kind(),
            max_items = ?self.budget.limit(),
            "pulling sequence"
        );
        sequence.into_pairs()
    }

    fn materialize(&mut self, operation: &'static str) -> Items<V> {
        let items: Items<V> = match std::mem::take(&mut self.sequence) {
            Sequence::Collection(items) => items,
            lazy => {
                self.sequence = lazy;
                self.pull(operation).collect()
            }
        };
        debug!(stream = %self.config.name, operation, items = items.len(), "sequence materialized");
        items
    }

    /// Number of pairs left.
    ///
    /// A plain collection is counted without being consumed. Anything else
    /// is drained to count it, leaving the facade spent.
    ///
    /// # Panics
    ///
    /// When more than the configured `max_items` pairs are pulled from a
    /// lazy source.
    pub fn count(&mut self) -> usize {
        match self.sequence.known_len() {
            Some(len) => len,
            None => self.pull("count").count(),
        }
    }

    /// Materializes the sequence as an ordered `Key → value` map.
    ///
    /// The facade is spent afterwards: a second call returns an empty map.
    ///
    /// # Panics
    ///
    /// When more than the configured `max_items` pairs are pulled from a
    /// lazy source.
    pub fn items(&mut self) -> Items<V> {
        self.materialize("items")
    }

    pub fn keys(&mut self) -> Vec<Key> {
        self.materialize("keys").into_keys().collect()
    }

    pub fn values(&mut self) -> Vec<V> {
        self.materialize("values").into_values().collect()
    }

    /// First value, or empty when there are no pairs.
    pub fn first(&mut self) -> Optional<V> {
        self.first_entry().map(|(_, value)| value)
    }

    /// First pair with its key, or empty when there are no pairs.
    pub fn first_entry(&mut self) -> Optional<(Key, V)> {
        self.materialize("first").into_iter().next().into()
    }

    /// Last value, or empty when there are no pairs.
    pub fn last(&mut self) -> Optional<V> {
        self.last_entry().map(|(_, value)| value)
    }

    pub fn last_entry(&mut self) -> Optional<(Key, V)> {
        self.materialize("last").pop().into()
    }

    /// Folds the values left to right, seeded by the first one.
    pub fn reduce<F>(&mut self, reducer: F) -> Optional<V>
    where
        F: FnMut(V, V) -> V,
    {
        self.materialize("reduce").into_values().reduce(reducer).into()
    }

    /// Folds the values left to right from `initial`.
    ///
    /// Empty when there are no values, whatever `initial` is.
    pub fn fold<A, F>(&mut self, initial: A, folder: F) -> Optional<A>
    where
        F: FnMut(A, V) -> A,
    {
        let items = self.materialize("fold");
        if items.is_empty() {
            return Optional::empty();
        }
        Optional::of(items.into_values().fold(initial, folder))
    }

    /// Hands the materialized items to `collector` and returns its result.
    pub fn collect<R, F>(&mut self, collector: F) -> R
    where
        F: FnOnce(Items<V>) -> R,
    {
        collector(self.materialize("collect"))
    }

    /// Runs `handler` on every value.
    pub fn each<F>(&mut self, handler: F)
    where
        F: FnMut(V),
    {
        self.materialize("each").into_values().for_each(handler);
    }

    /// Runs `handler` on every `(key, value)` pair.
    pub fn for_each<F>(&mut self, mut handler: F)
    where
        F: FnMut(Key, V),
    {
        for (key, value) in self.materialize("for_each") {
            handler(key, value);
        }
    }
}

impl<'a, T: 'a, E: 'a> Stream<'a, Result<T, E>> {
    /// Collects the `Ok` values, stopping at the first `Err` and returning it.
    ///
    /// Pairs after the failing one are never pulled.
    pub fn try_values(&mut self) -> Result<Vec<T>, E> {
        self.pull("try_values").map(|(_, value)| value).collect()
    }
}

impl<'a, V: 'a> IntoIterator for Stream<'a, V> {
    type Item = (Key, V);
    type IntoIter = Pairs<'a, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.pull("into_iter")
    }
}
