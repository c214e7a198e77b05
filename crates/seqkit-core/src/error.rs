//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeqkitError {
    #[error("OPTIONAL/EMPTY: unexpected empty value")]
    EmptyValue,

    #[error("OUTCOME/{0}")]
    Outcome(#[from] OutcomeError),

    #[error("CONFIG/{0}")]
    Config(String),
}

/// Raised when the value of a failed [`crate::Outcome`] is requested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .errors.join(", "))]
pub struct OutcomeError {
    errors: Vec<String>,
}

impl OutcomeError {
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl From<serde_json::Error> for SeqkitError {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<serde_yaml::Error> for SeqkitError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_uses_category_prefix() {
        assert_eq!(
            SeqkitError::EmptyValue.to_string(),
            "OPTIONAL/EMPTY: unexpected empty value"
        );
        let err: SeqkitError = OutcomeError::new(vec!["Kaput".into(), "Bang".into()]).into();
        assert_eq!(err.to_string(), "OUTCOME/Kaput, Bang");
    }
}
