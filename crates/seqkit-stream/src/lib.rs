//! Seqkit Stream: lazy, chainable pipelines over key-value sequences.
//!
//! # Pipeline Flow
//!
//! ```text
//! Stream::of / seed / call → filter → map → sort → limit → items()
//!       ↓                      ↓        ↓       ↓       ↓        ↓
//!   Sequence                 Stage    Stage   Stage   Stage   terminal
//! ```
//!
//! Every chaining call moves the current sequence into a new stage and
//! returns a new facade. Nothing runs until a terminal operation pulls.
//!
//! # Example
//!
//! ```
//! use seqkit_stream::Stream;
//!
//! let values = Stream::seed(1, |x: &i32| x * 2)
//!     .filter(|x| x % 3 != 0)
//!     .limit(3)
//!     .values();
//! assert_eq!(values, vec![1, 2, 4]);
//! ```
//!
//! Generative streams (`seed`, `call`) never end on their own. Bound them
//! with `limit` before any terminal operation.

mod stream;
mod terminal;

pub use stream::Stream;

pub use seqkit_core::{
    Items, Key, Optional, Outcome, OutcomeError, SeqkitError, Sequence, Stage, StageKind,
    StreamConfig, UniqueMode,
};
pub use seqkit_stages::{Call, Comparator, Filter, Limit, Map, Peek, Seed, Skip, Sort, Unique};
