//! Panic payload raised when a failed outcome is forcibly unwrapped.

use thiserror::Error;

use crate::OutcomeError;

/// Payload carried by the panic that [`Outcome::must_unwrap`] raises on a
/// failure.
///
/// Recover it with [`std::panic::catch_unwind`] and
/// `payload.downcast::<UnwrapAbort>()`. [`Outcome::expect`] panics with a
/// plain `String` instead, so its message reaches the panic hook.
///
/// [`Outcome::must_unwrap`]: crate::Outcome::must_unwrap
/// [`Outcome::expect`]: crate::Outcome::expect
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct UnwrapAbort {
    message: String,
    #[source]
    cause: OutcomeError,
}

impl UnwrapAbort {
    /// Full description of the abort, including any caller context.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error stored in the outcome that was unwrapped.
    #[must_use]
    pub const fn cause(&self) -> &OutcomeError {
        &self.cause
    }

    /// Take ownership of the causing error.
    #[must_use]
    pub fn into_cause(self) -> OutcomeError {
        self.cause
    }
}

/// Log the failure and unwind with an [`UnwrapAbort`] payload.
///
/// The default panic hook cannot render this payload, so the `tracing`
/// event is the only place the text is reported.
#[track_caller]
pub(super) fn raise(message: String, cause: OutcomeError) -> ! {
    log_abort(&message, &cause);
    std::panic::panic_any(UnwrapAbort { message, cause })
}

/// Log the failure and unwind with `"{context}: {cause}"` as a string
/// payload.
#[track_caller]
pub(super) fn raise_with_context(context: &str, cause: &OutcomeError) -> ! {
    let message = format!("{context}: {cause}");
    log_abort(&message, cause);
    panic!("{message}")
}

#[track_caller]
fn log_abort(message: &str, cause: &OutcomeError) {
    let location = std::panic::Location::caller();
    tracing::error!(
        error = %cause,
        %location,
        "{message}"
    );
}
