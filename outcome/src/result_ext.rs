//! Extensions for turning standard `Result`s into `Outcome`s concisely.
//!
//! These helpers replace repetitive
//! `match r { Ok(v) => Outcome::success(v), Err(e) => Outcome::failure(OutcomeError::new(e)) }`
//! blocks at the boundary where a fallible call completes.
//!
//! # Examples
//!
//! ```
//! use outcome::{IntoOutcome, Outcome};
//!
//! fn port(raw: &str) -> Outcome<u16> {
//!     raw.parse::<u16>().into_outcome()
//! }
//!
//! assert_eq!(port("443").unwrap_or(0), 443);
//! assert!(port("https").is_failure());
//! ```

use std::error::Error as StdError;

use crate::{Outcome, OutcomeError};

/// Converts `Result<T, E>` into [`Outcome<T>`] for any standard error `E`.
pub trait IntoOutcome<T> {
    /// Map `Ok` to a success and `Err` to a failure wrapping the error via
    /// [`OutcomeError::new`].
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> IntoOutcome<T> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(OutcomeError::new(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::ParseIntError;

    use rstest::rstest;

    use super::IntoOutcome;
    use crate::{Outcome, OutcomeError};

    #[rstest]
    #[case("42", Some(42))]
    #[case("-1", None)]
    #[case("", None)]
    fn parses_into_outcome(#[case] raw: &str, #[case] expected: Option<u8>) {
        let outcome = raw.parse::<u8>().into_outcome();
        assert_eq!(outcome.as_success().copied(), expected);
    }

    #[test]
    fn foreign_error_stays_downcastable() {
        let outcome = "x".parse::<u8>().into_outcome();
        let error = outcome.unwrap_error();
        assert!(
            error
                .as_ref()
                .and_then(OutcomeError::downcast_ref::<ParseIntError>)
                .is_some()
        );
    }

    #[test]
    fn own_errors_are_not_rewrapped() {
        let original = OutcomeError::msg("inner");
        let result: Result<(), OutcomeError> = Err(original.clone());
        assert_eq!(result.into_outcome(), Outcome::Failure(original));
    }
}
