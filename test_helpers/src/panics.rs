//! Helpers for asserting on panics raised by the code under test.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::catch_payload;
//!
//! let payload = catch_payload::<u32, ()>(|| std::panic::panic_any(7_u32));
//! assert_eq!(payload, Some(7));
//! ```

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
};

/// Run `f` and return its panic payload when it is of type `P`.
///
/// Returns `None` when `f` completes normally or panics with a payload of a
/// different type.
pub fn catch_payload<P, R>(f: impl FnOnce() -> R) -> Option<P>
where
    P: Any,
{
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => None,
        Err(payload) => payload.downcast::<P>().ok().map(|boxed| *boxed),
    }
}

/// Run `f` and return the message of a string panic, if it raised one.
pub fn panic_message<R>(f: impl FnOnce() -> R) -> Option<String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(_) => None,
        Err(payload) => payload
            .downcast::<String>()
            .map(|boxed| *boxed)
            .or_else(|other| other.downcast::<&'static str>().map(|s| (*s).to_owned()))
            .ok(),
    }
}
