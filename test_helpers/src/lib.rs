//! Test helpers shared across crates.
//!
//! This crate provides invocation counters for callback assertions and a
//! panic catcher that recovers typed payloads.

pub mod calls;
pub mod panics;

pub use calls::CallCounter;
pub use panics::{catch_payload, panic_message};
