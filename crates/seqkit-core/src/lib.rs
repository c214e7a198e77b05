//! Seqkit Core: sequence data model, stage contract and value wrappers
//!
//! A sequence is an ordered series of `(Key, value)` pairs that can be
//! consumed once. Stages wrap one sequence and produce another, lazily.
//! `Optional` and `Outcome` are the small value wrappers returned by
//! stream lookups and validation code.

pub mod config;
pub mod error;
pub mod key;
pub mod optional;
pub mod outcome;
pub mod sequence;
pub mod stage;
pub mod unique;

pub use config::StreamConfig;
pub use error::{OutcomeError, SeqkitError};
pub use key::{indexed, Items, Key};
pub use optional::Optional;
pub use outcome::Outcome;
pub use sequence::{deferred, Depleted, Pairs, Sequence};
pub use stage::{Stage, StageKind};
pub use unique::{fingerprint, Fingerprint, UniqueMode};

/// Seqkit version
pub const SEQKIT_VERSION: &str = env!("CARGO_PKG_VERSION");
