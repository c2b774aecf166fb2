//! Terminal operations that take the value or error out of an outcome.

use super::{Outcome, abort};
use crate::OutcomeError;

impl<T> Outcome<T> {
    /// Split into the stored value and error.
    ///
    /// A failure yields `T::default()` alongside the error; a success yields
    /// the value and `None`.
    #[must_use]
    pub fn into_parts(self) -> (T, Option<OutcomeError>)
    where
        T: Default,
    {
        match self {
            Self::Success(value) => (value, None),
            Self::Failure(error) => (T::default(), Some(error)),
        }
    }

    /// Take the error out, or `None` on success.
    #[must_use]
    pub fn unwrap_error(self) -> Option<OutcomeError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Return the value, or `fallback` on failure.
    ///
    /// `fallback` is evaluated by the caller before the call; use
    /// [`Outcome::unwrap_or_else`] to compute it only when needed.
    #[must_use]
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => fallback,
        }
    }

    /// Return the value, or the result of `producer` on failure.
    ///
    /// `producer` runs at most once and never on success.
    pub fn unwrap_or_else<F>(self, producer: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => producer(),
        }
    }

    /// Return the value or abort.
    ///
    /// The failure text is reported through a `tracing::error!` event before
    /// unwinding.
    ///
    /// # Panics
    ///
    /// Panics on failure with an [`UnwrapAbort`](super::UnwrapAbort) payload
    /// whose message is the rendered error and whose cause is the stored
    /// error.
    #[track_caller]
    pub fn must_unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => abort::raise(error.to_string(), error),
        }
    }

    /// Return the value or abort with caller-supplied context.
    ///
    /// # Panics
    ///
    /// Panics on failure with the `String` payload `"{message}: {error}"`,
    /// which the default panic hook prints. Use [`Outcome::must_unwrap`] when
    /// the stored error must be recoverable from the panic payload.
    ///
    /// ```should_panic
    /// use outcome::Outcome;
    /// Outcome::<i32>::failure("fail").expect("should not fail");
    /// ```
    #[track_caller]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => abort::raise_with_context(message, &error),
        }
    }

    /// Convert into a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome is a failure.
    pub fn into_result(self) -> Result<T, OutcomeError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(error) => Err(error),
        }
    }
}
