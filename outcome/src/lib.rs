//! An immutable success-or-failure container.
//!
//! [`Outcome<T>`] holds either a value of type `T` or an [`OutcomeError`]
//! describing why no value was produced. Its combinators inspect, transform,
//! chain, and recover from outcomes without exception-style control flow:
//! a failure flows through [`Outcome::map`] and [`Outcome::and_then`]
//! untouched until the caller decides how to consume it.
//!
//! Only [`Outcome::must_unwrap`] and [`Outcome::expect`] can leave the
//! current unit of work abnormally. `must_unwrap` panics with an
//! [`UnwrapAbort`] payload that carries the stored error as its cause;
//! `expect` panics with the message `"{context}: {error}"`.
//!
//! ```
//! use outcome::{Outcome, OutcomeError, and_then};
//!
//! fn parse(raw: &str) -> Outcome<u16> {
//!     match raw.parse() {
//!         Ok(port) => Outcome::success(port),
//!         Err(err) => Outcome::failure(OutcomeError::new(err)),
//!     }
//! }
//!
//! let port = and_then(parse("8080"), |p| {
//!     if p >= 1024 {
//!         Outcome::success(p)
//!     } else {
//!         Outcome::failure("privileged port")
//!     }
//! });
//! assert_eq!(port.unwrap_or(0), 8080);
//!
//! let bad = parse("eighty").errorf("reading port");
//! assert!(bad.is_failure());
//! ```

mod error;
mod outcome;
mod result_ext;

pub use error::{Chain, ForeignError, OutcomeError};
pub use outcome::{Outcome, UnwrapAbort, and_then, map, or, or_else};
pub use result_ext::IntoOutcome;
