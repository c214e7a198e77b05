//! Keys: stable identifiers attached to every value in a sequence
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a single pair in a sequence.
///
/// Positional sources (lists, generative stages, reindexing sorts) produce
/// `Index` keys. Associative sources keep their `Name` keys through every
/// stage that does not explicitly reindex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    Index(usize),
    Name(String),
}

impl Key {
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            Self::Name(_) => None,
        }
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(name),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{}", i),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

/// Materialized sequence: insertion-ordered `Key → value` map.
///
/// Re-inserting an existing key replaces its value but keeps the position
/// of the first insertion.
pub type Items<V> = IndexMap<Key, V>;

/// Builds positional items (`0..n`) from a list of values.
pub fn indexed<V>(values: impl IntoIterator<Item = V>) -> Items<V> {
    values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (Key::Index(i), v))
        .collect()
}
