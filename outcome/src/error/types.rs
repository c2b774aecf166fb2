//! Primary error enum for failed outcomes.

use std::{error::Error as StdError, sync::Arc};

use thiserror::Error;

/// Shared handle to an error produced outside this crate.
pub type ForeignError = Arc<dyn StdError + Send + Sync + 'static>;

/// Describes why an [`Outcome`](crate::Outcome) failed.
///
/// Every variant is cheap to clone: nested causes and foreign errors sit
/// behind [`Arc`], so a failure can be copied into several outcomes without
/// duplicating the underlying error.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum OutcomeError {
    /// Plain human-readable failure.
    #[error("{0}")]
    Message(String),

    /// Context layered over the error that caused it.
    #[error("{context}: {source}")]
    Context {
        /// Text describing what was being attempted.
        context: String,
        /// Error this layer wraps.
        #[source]
        source: Arc<OutcomeError>,
    },

    /// Error value supplied by an arbitrary producer.
    #[error(transparent)]
    Foreign(ForeignError),
}

/// Messages and contexts compare by value; foreign errors compare by
/// identity of the shared allocation.
impl PartialEq for OutcomeError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Message(lhs), Self::Message(rhs)) => lhs == rhs,
            (
                Self::Context {
                    context: lhs_context,
                    source: lhs_source,
                },
                Self::Context {
                    context: rhs_context,
                    source: rhs_source,
                },
            ) => lhs_context == rhs_context && lhs_source == rhs_source,
            (Self::Foreign(lhs), Self::Foreign(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        }
    }
}

impl Eq for OutcomeError {}
