//! The success-or-failure container and its combinators.
//!
//! An [`Outcome`] is built once by [`Outcome::success`] or
//! [`Outcome::failure`] and never mutated afterwards. Every combinator takes
//! the outcome by value and hands back a new one, so an outcome that has been
//! shared with other readers cannot change underneath them.

mod abort;
mod fallback;
mod transform;
mod unwrap;
#[cfg(feature = "serde")]
mod wire;

pub use abort::UnwrapAbort;
pub use fallback::{or, or_else};
pub use transform::{and_then, map};

use crate::OutcomeError;

/// Either a successfully produced value or the error explaining why none was
/// produced.
///
/// # Examples
///
/// ```
/// use outcome::Outcome;
///
/// let parsed = Outcome::success(3).map(|x| x + 1);
/// assert_eq!(parsed.into_parts(), (4, None));
///
/// let missing: Outcome<u32> = Outcome::failure("fail");
/// assert_eq!(missing.unwrap_or(100), 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an `Outcome` may hold a failure that should be handled"]
pub enum Outcome<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed.
    Failure(OutcomeError),
}

impl<T> Outcome<T> {
    /// Wrap `value` as a success. The value is stored as-is.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wrap `error` as a failure.
    ///
    /// Accepts anything convertible into an [`OutcomeError`], including plain
    /// strings.
    pub fn failure(error: impl Into<OutcomeError>) -> Self {
        Self::Failure(error.into())
    }

    /// Returns `true` when this outcome holds a value.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when this outcome holds an error.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrow the stored value, if any.
    ///
    /// The reference lives no longer than the borrow of `self`.
    ///
    /// ```
    /// use outcome::Outcome;
    /// assert_eq!(Outcome::success(123).as_success(), Some(&123));
    /// assert_eq!(Outcome::<i32>::failure("bad").as_success(), None);
    /// ```
    #[must_use]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the stored error, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&OutcomeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }
}

impl<T> From<Result<T, OutcomeError>> for Outcome<T> {
    fn from(result: Result<T, OutcomeError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, OutcomeError> {
    fn from(outcome: Outcome<T>) -> Self {
        outcome.into_result()
    }
}

#[cfg(test)]
mod tests;
