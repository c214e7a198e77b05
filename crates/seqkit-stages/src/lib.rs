//! Seqkit Stages: the transformers a stream pipeline is built from.
//!
//! Every stage takes ownership of one upstream [`Sequence`] (generative
//! stages have none) and produces a new one lazily.
//!
//! # Stage kinds
//!
//! ```text
//! Stateless   Filter, Map, Peek, Limit, Skip   forward pairs on demand
//! Stateful    Sort, Unique                     drain upstream on first pull
//! Generative  Seed, Call                       infinite, bound with Limit
//! Guard                                        pull budget on a source
//! ```

mod call;
mod filter;
mod guard;
mod limit;
mod map;
mod peek;
mod seed;
mod skip;
mod sort;
mod unique;

pub use call::Call;
pub use filter::Filter;
pub use guard::{Guard, PullBudget};
pub use limit::Limit;
pub use map::Map;
pub use peek::Peek;
pub use seed::Seed;
pub use skip::Skip;
pub use sort::{Comparator, Sort};
pub use unique::Unique;

use seqkit_core::Sequence;

/// Upstream lineage followed by `label`.
pub(crate) fn extend_lineage<'a, V: 'a>(upstream: &Sequence<'a, V>, label: &'static str) -> Vec<&'static str> {
    let mut lineage = upstream.lineage();
    lineage.push(label);
    lineage
}

/// Negative counts become zero.
pub(crate) fn clamp_count(count: i64) -> usize {
    usize::try_from(count.max(0)).unwrap_or(usize::MAX)
}
