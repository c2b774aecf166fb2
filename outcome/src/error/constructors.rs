//! Constructors and conversions for `OutcomeError`.

use std::{error::Error as StdError, fmt, sync::Arc};

use super::OutcomeError;

impl OutcomeError {
    /// Build a failure from a human-readable message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::OutcomeError;
    /// let err = OutcomeError::msg("disk full");
    /// assert_eq!(err.to_string(), "disk full");
    /// ```
    #[must_use]
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Wrap an error produced elsewhere.
    ///
    /// Passing an [`OutcomeError`] returns it unchanged instead of nesting it
    /// inside [`OutcomeError::Foreign`].
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::OutcomeError;
    /// let io = std::io::Error::other("socket closed");
    /// let err = OutcomeError::new(io);
    /// assert_eq!(err.to_string(), "socket closed");
    /// assert!(err.downcast_ref::<std::io::Error>().is_some());
    /// ```
    #[must_use]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(error))
    }

    /// Layer `context` over this error, keeping it as the cause.
    ///
    /// The result renders as `"{context}: {self}"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::OutcomeError;
    /// let err = OutcomeError::msg("not found").context("loading user 7");
    /// assert_eq!(err.to_string(), "loading user 7: not found");
    /// assert_eq!(err.cause(), Some(&OutcomeError::msg("not found")));
    /// ```
    #[must_use]
    pub fn context<C>(self, context: C) -> Self
    where
        C: fmt::Display,
    {
        Self::Context {
            context: context.to_string(),
            source: Arc::new(self),
        }
    }

    fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        match error.downcast::<Self>() {
            Ok(own) => *own,
            Err(other) => Self::Foreign(Arc::from(other)),
        }
    }
}

impl From<&str> for OutcomeError {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<String> for OutcomeError {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for OutcomeError {
    fn from(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_boxed(error)
    }
}
