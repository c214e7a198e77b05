//! Stage Trait: the single contract every transformer implements
use crate::sequence::Pairs;

/// How a stage relates to its upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// Forwards pairs on demand without buffering.
    Stateless,
    /// Drains the whole upstream before producing anything.
    Stateful,
    /// Has no upstream and never ends on its own.
    Generative,
}

/// A lazy transformation node.
///
/// A stage owns exactly one upstream sequence (none for generative stages)
/// and turns it into a new sequence of `(Key, V)` pairs. Nothing is pulled
/// until the consumer pulls from the traversal returned by [`Stage::traverse`].
pub trait Stage<'a, V> {
    /// Human-readable type name, e.g. `"Filter"`.
    fn label(&self) -> &'static str;

    fn kind(&self) -> StageKind {
        StageKind::Stateless
    }

    /// Labels from the source up to and including this stage.
    fn lineage(&self) -> Vec<&'static str> {
        vec![self.label()]
    }

    /// Consumes the stage and returns the transformed traversal.
    fn traverse(self: Box<Self>) -> Pairs<'a, V>;
}
