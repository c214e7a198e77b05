//! Optional: a value-or-empty container returned by stream lookups
use crate::error::SeqkitError;
use std::fmt;

/// Either empty or holding exactly one value.
///
/// `Stream::first`, `Stream::last`, `Stream::reduce` and `Stream::fold`
/// answer with an `Optional`. Empty there means "no element". When the
/// elements themselves may be absent (`Optional<Option<T>>`), call
/// [`Optional::flatten`] to fold "element is `None`" into empty as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    pub const fn empty() -> Self {
        Self { value: None }
    }

    pub fn of(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn of_nullable(value: Option<T>) -> Self {
        Self { value }
    }

    pub fn valid(&self) -> bool {
        self.value.is_some()
    }

    pub fn invalid(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the held value, or [`SeqkitError::EmptyValue`].
    pub fn value(self) -> Result<T, SeqkitError> {
        self.value.ok_or(SeqkitError::EmptyValue)
    }

    pub fn value_ref(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn or_value(self, other: T) -> T {
        self.value.unwrap_or(other)
    }

    pub fn or_call<F>(self, provider: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.value.unwrap_or_else(provider)
    }

    /// Returns `self` when valid, otherwise the optional built by `provider`.
    pub fn or<F>(self, provider: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        if self.valid() {
            self
        } else {
            provider()
        }
    }

    pub fn or_fail<E, F>(self, provider: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.value.ok_or_else(provider)
    }

    /// Hands the value to `handler` when valid.
    pub fn call<F>(self, handler: F)
    where
        F: FnOnce(T),
    {
        if let Some(value) = self.value {
            handler(value);
        }
    }

    /// Like [`Optional::call`], running `on_empty` when there is no value.
    pub fn call_or<F, G>(self, handler: F, on_empty: G)
    where
        F: FnOnce(T),
        G: FnOnce(),
    {
        match self.value {
            Some(value) => handler(value),
            None => on_empty(),
        }
    }

    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        Self {
            value: self.value.filter(predicate),
        }
    }

    pub fn map<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> U,
    {
        Optional {
            value: self.value.map(mapper),
        }
    }

    /// Maps through a function that may itself produce nothing.
    pub fn and_then<U, F>(self, mapper: F) -> Optional<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        Optional {
            value: self.value.and_then(mapper),
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional {
            value: self.value.as_ref(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Optional<Option<T>> {
    /// Collapses "holds `None`" into empty.
    pub fn flatten(self) -> Optional<T> {
        Optional {
            value: self.value.flatten(),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Self::of_nullable(value)
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(optional: Optional<T>) -> Self {
        optional.value
    }
}

impl<T> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(_) => write!(f, "Optional (value={})", std::any::type_name::<T>()),
            None => f.write_str("Optional (value=null)"),
        }
    }
}
