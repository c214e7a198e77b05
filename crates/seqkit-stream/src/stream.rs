//! Stream facade: construction and chaining
use seqkit_core::{indexed, Items, Key, Sequence, Stage, StreamConfig, UniqueMode};
use seqkit_stages::{Call, Filter, Guard, Limit, Map, Peek, PullBudget, Seed, Skip, Sort, Unique};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;
use tracing::debug;

/// Chainable handle over a sequence of `(Key, V)` pairs.
///
/// A facade is either fresh or spent. Chaining methods consume the facade
/// and return a new one wrapping a new stage. Terminal methods (see
/// `terminal.rs`) pull the sequence and leave the facade spent, so a second
/// terminal call sees an empty sequence.
///
/// Lazy sources handed to a facade sit behind a [`Guard`] whose budget
/// follows the configured `max_items`, wherever in the chain the config is
/// applied.
pub struct Stream<'a, V> {
    pub(crate) sequence: Sequence<'a, V>,
    pub(crate) config: Arc<StreamConfig>,
    pub(crate) budget: Rc<PullBudget>,
}

impl<'a, V: 'a> Stream<'a, V> {
    pub fn new(sequence: Sequence<'a, V>) -> Self {
        let config = StreamConfig::shared_default();
        let budget = PullBudget::new(config.max_items);
        let sequence = match sequence {
            lazy @ (Sequence::Iter(_) | Sequence::Stage(_)) => {
                Sequence::stage(Guard::new(lazy, Rc::clone(&budget)))
            }
            finite => finite,
        };
        Self {
            sequence,
            config,
            budget,
        }
    }

    /// A stream over nothing, holding the process-wide depleted marker.
    pub fn empty() -> Self {
        Self::new(Sequence::depleted())
    }

    /// Positional stream (`0..n` keys) over `values`.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::new(Sequence::collection(indexed(values)))
    }

    /// Associative stream keeping the given keys.
    ///
    /// A repeated key replaces the earlier value in place.
    pub fn of_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<Key>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_items(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn from_items(items: Items<V>) -> Self {
        Self::new(Sequence::collection(items))
    }

    /// Single-pass positional stream; `values` is pulled lazily.
    pub fn iter<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'a,
    {
        Self::new(Sequence::iter(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v)),
        ))
    }

    /// `initial`, `next(initial)`, `next(next(initial))`, ... without end.
    pub fn seed<F>(initial: V, next: F) -> Self
    where
        V: Clone,
        F: FnMut(&V) -> V + 'a,
    {
        debug!("seed stream created");
        Self::from_stage(Seed::new(initial, next))
    }

    /// `provider()` on every pull, without end.
    pub fn call<F>(provider: F) -> Self
    where
        F: FnMut() -> V + 'a,
    {
        debug!("call stream created");
        Self::from_stage(Call::new(provider))
    }

    pub fn from_stage<S>(stage: S) -> Self
    where
        S: Stage<'a, V> + 'a,
    {
        Self::new(Sequence::stage(stage))
    }

    pub fn with_config(mut self, config: StreamConfig) -> Self {
        self.budget.set(config.max_items);
        self.config = Arc::new(config);
        self
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    /// True when both facades hold the shared depleted marker.
    ///
    /// That covers `Stream::empty()` and every spent facade alike: both
    /// alias the same marker, so this cannot tell them apart.
    pub fn both_depleted(a: &Self, b: &Self) -> bool {
        Sequence::same_marker(&a.sequence, &b.sequence)
    }

    pub fn is_spent(&self) -> bool {
        self.sequence.is_depleted()
    }

    /// Labels from the source to the outermost stage.
    pub fn lineage(&self) -> Vec<&'static str> {
        self.sequence.lineage()
    }

    fn chain<U, S, B>(self, build: B) -> Stream<'a, U>
    where
        U: 'a,
        S: Stage<'a, U> + 'a,
        B: FnOnce(Sequence<'a, V>) -> S,
    {
        Stream {
            sequence: Sequence::stage(build(self.sequence)),
            config: self.config,
            budget: self.budget,
        }
    }

    /// Keeps the values matching `predicate`; keys are preserved.
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&V) -> bool + 'a,
    {
        self.filter_with_key(move |value, _| predicate(value))
    }

    /// Keeps the pairs whose `(value, key)` match `predicate`.
    pub fn filter_with_key<P>(self, predicate: P) -> Self
    where
        P: FnMut(&V, &Key) -> bool + 'a,
    {
        self.chain(|upstream| Filter::new(upstream, predicate))
    }

    pub fn map<U, F>(self, mapper: F) -> Stream<'a, U>
    where
        U: 'a,
        F: FnMut(V) -> U + 'a,
    {
        self.chain(|upstream| Map::new(upstream, mapper))
    }

    /// Calls `observer(value, key)` for each pulled pair.
    pub fn peek<O>(self, observer: O) -> Self
    where
        O: FnMut(&V, &Key) + 'a,
    {
        self.chain(|upstream| Peek::new(upstream, observer))
    }

    /// Ascending natural order, reindexed `0..n`.
    pub fn sort(self) -> Self
    where
        V: PartialOrd,
    {
        self.chain(|upstream| Sort::natural(upstream, false))
    }

    /// Order given by `comparator`, reindexed `0..n`.
    pub fn sort_by<C>(self, comparator: C) -> Self
    where
        C: FnMut(&V, &V) -> Ordering + 'a,
    {
        self.chain(|upstream| Sort::with_comparator(upstream, comparator, false))
    }

    /// Ascending by value, every value keeping its key.
    pub fn sort_preserving_keys(self) -> Self
    where
        V: PartialOrd,
    {
        self.chain(|upstream| Sort::natural(upstream, true))
    }

    pub fn sort_preserving_keys_by<C>(self, comparator: C) -> Self
    where
        C: FnMut(&V, &V) -> Ordering + 'a,
    {
        self.chain(|upstream| Sort::with_comparator(upstream, comparator, true))
    }

    /// Drops repeated values using the configured [`UniqueMode`].
    pub fn unique(self) -> Self
    where
        V: PartialEq + fmt::Display,
    {
        let mode = self.config.unique_mode;
        self.unique_by(mode)
    }

    pub fn unique_by(self, mode: UniqueMode) -> Self
    where
        V: PartialEq + fmt::Display,
    {
        self.chain(|upstream| Unique::new(upstream, mode))
    }

    /// At most `limit` leading pairs; negative limits mean zero.
    pub fn limit(self, limit: i64) -> Self {
        self.chain(|upstream| Limit::new(upstream, limit))
    }

    /// Everything after the first `count` pairs; negative counts mean zero.
    pub fn skip(self, count: i64) -> Self {
        self.chain(|upstream| Skip::new(upstream, count))
    }
}

impl<'a, V: 'a> Default for Stream<'a, V> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, V: 'a> From<Vec<V>> for Stream<'a, V> {
    fn from(values: Vec<V>) -> Self {
        Self::of(values)
    }
}

impl<'a, V: 'a> FromIterator<V> for Stream<'a, V> {
    fn from_iter<I: IntoIterator<Item = V>>(values: I) -> Self {
        Self::of(values)
    }
}

impl<'a, V: 'a> fmt::Display for Stream<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stream[{}]({})",
            self.config.name,
            self.sequence.lineage().join(" -> ")
        )
    }
}

impl<'a, V: 'a> fmt::Debug for Stream<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("name", &self.config.name)
            .field("sequence", &self.sequence)
            .finish()
    }
}
