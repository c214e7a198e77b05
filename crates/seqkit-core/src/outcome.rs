//! Outcome: a value or the list of messages explaining why there is none
use crate::error::OutcomeError;
use std::fmt;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Result-style wrapper carrying either a value or one or more messages.
///
/// Unlike `std::result::Result`, the failure side is always a list of
/// human-readable messages, which keeps validation code free of bespoke
/// error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T> {
    state: State<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<T> {
    Ok(T),
    Failed(Vec<String>),
}

impl<T> Outcome<T> {
    pub fn ok(value: T) -> Self {
        Self {
            state: State::Ok(value),
        }
    }

    /// A failed outcome. Without messages it reports `"Unknown error"`.
    pub fn error<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut errors: Vec<String> = messages.into_iter().map(Into::into).collect();
        if errors.is_empty() {
            errors.push(UNKNOWN_ERROR.to_string());
        }
        Self {
            state: State::Failed(errors),
        }
    }

    pub fn valid(&self) -> bool {
        matches!(self.state, State::Ok(_))
    }

    /// Messages of a failed outcome; empty when valid.
    pub fn errors(&self) -> &[String] {
        match &self.state {
            State::Ok(_) => &[],
            State::Failed(errors) => errors,
        }
    }

    pub fn value(self) -> Result<T, OutcomeError> {
        self.into_result()
    }

    pub fn value_ref(&self) -> Option<&T> {
        match &self.state {
            State::Ok(value) => Some(value),
            State::Failed(_) => None,
        }
    }

    pub fn or_value(self, other: T) -> T {
        match self.state {
            State::Ok(value) => value,
            State::Failed(_) => other,
        }
    }

    /// Returns the value, or asks `provider` to build one from the messages.
    pub fn or_call<F>(self, provider: F) -> T
    where
        F: FnOnce(&[String]) -> T,
    {
        match self.state {
            State::Ok(value) => value,
            State::Failed(errors) => provider(&errors),
        }
    }

    /// Returns the value, or the error `thrower` builds from the messages.
    pub fn or_fail<E, F>(self, thrower: F) -> Result<T, E>
    where
        F: FnOnce(&[String]) -> E,
    {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Failed(errors) => Err(thrower(&errors)),
        }
    }

    /// Transforms the value of a valid outcome; messages pass through.
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            state: match self.state {
                State::Ok(value) => State::Ok(mapper(value)),
                State::Failed(errors) => State::Failed(errors),
            },
        }
    }

    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self.state {
            State::Ok(value) => Ok(value),
            State::Failed(errors) => Err(OutcomeError::new(errors)),
        }
    }
}

impl<T, E: fmt::Display> From<Result<T, E>> for Outcome<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(e) => Self::error([e.to_string()]),
        }
    }
}

impl<T> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Outcome (valid={})", self.valid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok() {
        let outcome = Outcome::ok(());
        assert!(outcome.valid());
        assert!(outcome.errors().is_empty());
        assert_eq!(outcome.value(), Ok(()));

        assert_eq!(Outcome::ok("foo").value(), Ok("foo"));
    }

    #[test]
    fn test_error() {
        let outcome = Outcome::<()>::error(Vec::<String>::new());
        assert!(!outcome.valid());
        assert_eq!(outcome.errors(), ["Unknown error"]);

        let outcome = Outcome::<()>::error(["Kaput"]);
        assert_eq!(outcome.errors(), ["Kaput"]);

        let err = outcome.value().unwrap_err();
        assert_eq!(err.errors(), ["Kaput"]);
    }

    #[test]
    fn test_or_value() {
        assert_eq!(Outcome::ok("foo").or_value("bar"), "foo");
        assert_eq!(Outcome::error(["nope"]).or_value("bar"), "bar");
    }

    #[test]
    fn test_or_call() {
        assert_eq!(Outcome::ok("foo".to_string()).or_call(|e| e.join(", ")), "foo");
        assert_eq!(
            Outcome::<String>::error(["Kaput", "Bang"]).or_call(|e| e.join(", ")),
            "Kaput, Bang"
        );
    }

    #[test]
    fn test_or_fail() {
        assert_eq!(Outcome::ok("foo").or_fail(|e| e.join(", ")), Ok("foo"));
        assert_eq!(
            Outcome::<&str>::error(["Kaput", "Bang"]).or_fail(|e| e.join(", ")),
            Err("Kaput, Bang".to_string())
        );
    }

    #[test]
    fn test_map() {
        let mapped = Outcome::ok("foo").map(|s| s.chars().rev().collect::<String>());
        assert_eq!(mapped.value(), Ok("oof".to_string()));

        let failed = Outcome::<&str>::error(["Kaput"]);
        let mapped = failed.clone().map(|s| s.len());
        assert_eq!(mapped.errors(), failed.errors());
    }

    #[test]
    fn test_from_result() {
        let outcome: Outcome<i32> = "12".parse::<i32>().into();
        assert_eq!(outcome.value_ref(), Some(&12));

        let outcome: Outcome<i32> = "x".parse::<i32>().into();
        assert!(!outcome.valid());
        assert_eq!(outcome.errors().len(), 1);
    }

    #[test]
    fn test_display() {
        assert!(Outcome::ok(()).to_string().contains("valid=true"));
        assert!(Outcome::<()>::error(["x"]).to_string().contains("valid=false"));
    }
}
