use crate::extend_lineage;
use seqkit_core::{deferred, fingerprint, Fingerprint, Key, Pairs, Sequence, Stage, StageKind, UniqueMode};
use std::collections::HashSet;
use std::fmt::Display;
use tracing::debug;

/// Drains the upstream and keeps the first occurrence of each value.
///
/// Survivors keep their original keys and first-seen order.
pub struct Unique<'a, V> {
    upstream: Sequence<'a, V>,
    mode: UniqueMode,
}

impl<'a, V: 'a> Unique<'a, V> {
    pub fn new(upstream: Sequence<'a, V>, mode: UniqueMode) -> Self {
        Self { upstream, mode }
    }

    /// Builds from a legacy integer flag; unknown flags mean `Regular`.
    pub fn with_flag(upstream: Sequence<'a, V>, flag: i32) -> Self {
        Self::new(upstream, UniqueMode::from_flag(flag))
    }

    pub fn mode(&self) -> UniqueMode {
        self.mode
    }
}

impl<'a, V> Stage<'a, V> for Unique<'a, V>
where
    V: PartialEq + Display + 'a,
{
    fn label(&self) -> &'static str {
        "Unique"
    }

    fn kind(&self) -> StageKind {
        StageKind::Stateful
    }

    fn lineage(&self) -> Vec<&'static str> {
        extend_lineage(&self.upstream, self.label())
    }

    fn traverse(self: Box<Self>) -> Pairs<'a, V> {
        let Self { upstream, mode } = *self;
        deferred(move || {
            let mut seen: HashSet<Fingerprint> = HashSet::new();
            let mut kept: Vec<(Key, V)> = Vec::new();
            let mut total = 0usize;

            for (key, value) in upstream.into_pairs() {
                total += 1;
                let first = match fingerprint(mode, &value) {
                    None => !kept.iter().any(|(_, other)| *other == value),
                    Some(Fingerprint::Unmatched) => true,
                    Some(print) => seen.insert(print),
                };
                if first {
                    kept.push((key, value));
                }
            }

            debug!(?mode, total, kept = kept.len(), "unique materialized upstream");
            kept
        })
    }
}
