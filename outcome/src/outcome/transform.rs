//! Combinators that transform or chain outcomes.

use std::fmt;

use super::Outcome;
use crate::OutcomeError;

impl<T> Outcome<T> {
    /// Apply `transform` to a stored value, carrying a failure through
    /// untouched.
    ///
    /// `transform` runs exactly once on success and never on failure.
    pub fn map<U, F>(self, transform: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(transform(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Same-type form of [`Outcome::map`].
    pub fn map_same<F>(self, transform: F) -> Self
    where
        F: FnOnce(T) -> T,
    {
        self.map(transform)
    }

    /// Replace a stored error with `transform(error)`.
    ///
    /// A success passes through unchanged without calling `transform`.
    pub fn map_error<F>(self, transform: F) -> Self
    where
        F: FnOnce(OutcomeError) -> OutcomeError,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(error) => Self::Failure(transform(error)),
        }
    }

    /// Feed a stored value into `continuation` and return its outcome as-is.
    ///
    /// A failure short-circuits without calling `continuation`.
    ///
    /// ```
    /// use outcome::Outcome;
    /// let chained = Outcome::success(5).and_then(|x| Outcome::success(format!("{x} ok")));
    /// assert_eq!(chained, Outcome::success(String::from("5 ok")));
    /// ```
    pub fn and_then<U, F>(self, continuation: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => continuation(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Show a stored value to `observer`, then return the outcome unchanged.
    pub fn inspect<F>(self, observer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            observer(value);
        }
        self
    }

    /// Layer context over a stored error.
    ///
    /// `context` is anything displayable: a literal, a `String`, or
    /// `format_args!(..)`. The new error renders as `"{context}: {error}"`
    /// and keeps the previous error as its [`cause`](OutcomeError::cause). A
    /// success passes through unchanged without rendering `context`.
    ///
    /// ```
    /// use outcome::Outcome;
    /// let id = 7;
    /// let failed = Outcome::<()>::failure("not found")
    ///     .errorf(format_args!("loading user {id}"));
    /// assert_eq!(failed.unwrap_error().map(|e| e.to_string()).as_deref(),
    ///            Some("loading user 7: not found"));
    /// ```
    pub fn errorf<C>(self, context: C) -> Self
    where
        C: fmt::Display,
    {
        match self {
            Self::Failure(error) => {
                let rendered = context.to_string();
                tracing::trace!(context = %rendered, %error, "adding context to failed outcome");
                Self::Failure(error.context(rendered))
            }
            success @ Self::Success(_) => success,
        }
    }
}

/// Free-function form of [`Outcome::map`].
pub fn map<T, U, F>(outcome: Outcome<T>, transform: F) -> Outcome<U>
where
    F: FnOnce(T) -> U,
{
    outcome.map(transform)
}

/// Free-function form of [`Outcome::and_then`].
pub fn and_then<T, U, F>(outcome: Outcome<T>, continuation: F) -> Outcome<U>
where
    F: FnOnce(T) -> Outcome<U>,
{
    outcome.and_then(continuation)
}
