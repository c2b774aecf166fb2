//! Failure payload carried by an [`Outcome`](crate::Outcome).

mod chain;
mod constructors;
mod types;

pub use chain::Chain;
pub use types::{ForeignError, OutcomeError};
