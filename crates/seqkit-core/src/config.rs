//! Stream Config: settings carried by every facade in a pipeline
use crate::error::SeqkitError;
use crate::unique::UniqueMode;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

static DEFAULT_CONFIG: Lazy<Arc<StreamConfig>> = Lazy::new(|| Arc::new(StreamConfig::default()));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StreamConfig {
    /// Label used in logs and in the facade's `Display` output.
    pub name: String,
    /// Mode applied by `Stream::unique()`.
    pub unique_mode: UniqueMode,
    /// Drain guard for lazy sequences; `None` disables it.
    ///
    /// Meant for test harnesses that exercise generative streams: a terminal
    /// operation pulling more pairs than this panics instead of hanging.
    pub max_items: Option<usize>,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            name: "stream".to_string(),
            unique_mode: UniqueMode::Regular,
            max_items: None,
        }
    }
}

impl StreamConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_unique_mode(mut self, mode: UniqueMode) -> Self {
        self.unique_mode = mode;
        self
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn from_yaml(source: &str) -> Result<Self, SeqkitError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_json(source: &str) -> Result<Self, SeqkitError> {
        Ok(serde_json::from_str(source)?)
    }

    /// The process-wide default, shared by every unconfigured facade.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_CONFIG)
    }
}
