//! Sequences: single-consumption series of (key, value) pairs
use crate::key::{Items, Key};
use crate::stage::{Stage, StageKind};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::Arc;

/// Lazy traversal over the pairs of a sequence.
pub type Pairs<'a, V> = Box<dyn Iterator<Item = (Key, V)> + 'a>;

/// Marker held by every spent sequence.
#[derive(Debug)]
pub struct Depleted;

static DEPLETED: Lazy<Arc<Depleted>> = Lazy::new(|| Arc::new(Depleted));

/// An ordered series of pairs, consumed at most once.
///
/// Whoever holds a `Sequence` owns it exclusively. Stages take their
/// upstream by value, so a sequence that was handed to a stage cannot be
/// read by anyone else.
pub enum Sequence<'a, V> {
    /// Materialized, re-iterable collection. Its size is known up front.
    Collection(Items<V>),
    /// Single-pass iterator supplied by the caller.
    Iter(Pairs<'a, V>),
    /// Outermost stage of a pipeline.
    Stage(Box<dyn Stage<'a, V> + 'a>),
    /// Nothing left to pull. All spent sequences share one marker.
    Depleted(Arc<Depleted>),
}

impl<'a, V: 'a> Sequence<'a, V> {
    pub fn depleted() -> Self {
        Self::Depleted(Arc::clone(&DEPLETED))
    }

    pub fn collection(items: Items<V>) -> Self {
        Self::Collection(items)
    }

    pub fn iter<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Key, V)>,
        I::IntoIter: 'a,
    {
        Self::Iter(Box::new(pairs.into_iter()))
    }

    pub fn stage<S>(stage: S) -> Self
    where
        S: Stage<'a, V> + 'a,
    {
        Self::Stage(Box::new(stage))
    }

    /// Consumes the sequence and returns its traversal.
    pub fn into_pairs(self) -> Pairs<'a, V> {
        match self {
            Self::Collection(items) => Box::new(items.into_iter()),
            Self::Iter(pairs) => pairs,
            Self::Stage(stage) => stage.traverse(),
            Self::Depleted(_) => Box::new(std::iter::empty()),
        }
    }

    /// Number of pairs, when it is known without pulling anything.
    pub fn known_len(&self) -> Option<usize> {
        match self {
            Self::Collection(items) => Some(items.len()),
            Self::Depleted(_) => Some(0),
            Self::Iter(_) | Self::Stage(_) => None,
        }
    }

    pub fn is_depleted(&self) -> bool {
        matches!(self, Self::Depleted(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Collection(_) => "Collection",
            Self::Iter(_) => "Iter",
            Self::Stage(stage) => stage.label(),
            Self::Depleted(_) => "Depleted",
        }
    }

    /// Kind of the outermost stage; `None` for plain sources.
    pub fn kind(&self) -> Option<StageKind> {
        match self {
            Self::Stage(stage) => Some(stage.kind()),
            _ => None,
        }
    }

    /// Labels from the source to the outermost stage.
    pub fn lineage(&self) -> Vec<&'static str> {
        match self {
            Self::Stage(stage) => stage.lineage(),
            other => vec![other.label()],
        }
    }
}

impl<'a, V> Sequence<'a, V> {
    /// True when both sequences hold the process-wide depleted marker.
    pub fn same_marker(a: &Self, b: &Self) -> bool {
        match (a, b) {
            (Self::Depleted(x), Self::Depleted(y)) => Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

impl<'a, V: 'a> Default for Sequence<'a, V> {
    fn default() -> Self {
        Self::depleted()
    }
}

impl<'a, V: 'a> fmt::Debug for Sequence<'a, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("lineage", &self.lineage())
            .field("kind", &self.kind())
            .field("known_len", &self.known_len())
            .finish()
    }
}

/// Wraps a materializing closure so it only runs on the first pull.
///
/// Stateful stages use this to stay lazy until their consumer asks for the
/// first pair.
pub fn deferred<'a, V, F>(materialize: F) -> Pairs<'a, V>
where
    V: 'a,
    F: FnOnce() -> Vec<(Key, V)> + 'a,
{
    Box::new(Deferred {
        pending: Some(materialize),
        ready: None,
    })
}

struct Deferred<F, V> {
    pending: Option<F>,
    ready: Option<std::vec::IntoIter<(Key, V)>>,
}

impl<F, V> Iterator for Deferred<F, V>
where
    F: FnOnce() -> Vec<(Key, V)>,
{
    type Item = (Key, V);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(materialize) = self.pending.take() {
            self.ready = Some(materialize().into_iter());
        }
        self.ready.as_mut()?.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::indexed;
    use std::cell::Cell;

    #[test]
    fn test_collection_len_is_known() {
        let seq = Sequence::collection(indexed(vec!['a', 'b']));
        assert_eq!(seq.known_len(), Some(2));
        assert_eq!(seq.lineage(), vec!["Collection"]);
        assert_eq!(seq.kind(), None);
    }

    #[test]
    fn test_iter_is_single_pass() {
        let seq: Sequence<'_, i32> = Sequence::iter(vec![(Key::Index(0), 1)]);
        assert_eq!(seq.known_len(), None);
        assert_eq!(seq.into_pairs().count(), 1);
    }

    #[test]
    fn test_depleted_sequences_share_marker() {
        let a: Sequence<'_, i32> = Sequence::depleted();
        let b: Sequence<'_, i32> = Sequence::default();
        assert!(Sequence::same_marker(&a, &b));
        assert!(!Sequence::same_marker(&a, &Sequence::collection(indexed(vec![1]))));
        assert_eq!(a.into_pairs().count(), 0);
    }

    struct Numbers;

    impl<'a> Stage<'a, usize> for Numbers {
        fn label(&self) -> &'static str {
            "Numbers"
        }

        fn kind(&self) -> StageKind {
            StageKind::Generative
        }

        fn traverse(self: Box<Self>) -> Pairs<'a, usize> {
            Box::new((0..).map(|i| (Key::Index(i), i)))
        }
    }

    #[test]
    fn test_stage_kind_and_debug_output() {
        let seq = Sequence::stage(Numbers);
        assert_eq!(seq.kind(), Some(StageKind::Generative));
        let debug = format!("{:?}", seq);
        assert!(debug.contains("Generative"));
        assert!(debug.contains("Numbers"));
    }

    #[test]
    fn test_deferred_runs_on_first_pull() {
        let runs = Cell::new(0);
        let mut pairs = deferred(|| {
            runs.set(runs.get() + 1);
            vec![(Key::Index(0), "x")]
        });
        assert_eq!(runs.get(), 0);
        assert_eq!(pairs.next(), Some((Key::Index(0), "x")));
        assert_eq!(pairs.next(), None);
        assert_eq!(runs.get(), 1);
    }
}
