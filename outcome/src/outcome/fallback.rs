//! Fallback composition between outcomes.

use super::Outcome;

impl<T> Outcome<T> {
    /// Keep `self` on success, otherwise take `alternative`.
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => alternative,
        }
    }

    /// Keep `self` on success, otherwise return what `producer` builds.
    ///
    /// `producer` runs at most once and never on success.
    pub fn or_else<F>(self, producer: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(_) => self,
            Self::Failure(_) => producer(),
        }
    }
}

/// Free-function form of [`Outcome::or`].
pub fn or<T>(primary: Outcome<T>, alternative: Outcome<T>) -> Outcome<T> {
    primary.or(alternative)
}

/// Free-function form of [`Outcome::or_else`].
pub fn or_else<T, F>(primary: Outcome<T>, producer: F) -> Outcome<T>
where
    F: FnOnce() -> Outcome<T>,
{
    primary.or_else(producer)
}
