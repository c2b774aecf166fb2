//! Walking the cause chain of an `OutcomeError`.

use std::error::Error as StdError;

use super::OutcomeError;

/// Iterator over an error and its causes, outermost layer first.
///
/// Created by [`OutcomeError::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a OutcomeError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a OutcomeError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause();
        Some(current)
    }
}

impl OutcomeError {
    /// The error this one wraps, if it is a context layer.
    #[must_use]
    pub fn cause(&self) -> Option<&Self> {
        match self {
            Self::Context { source, .. } => Some(&**source),
            Self::Message(_) | Self::Foreign(_) => None,
        }
    }

    /// Iterate this error followed by each successive cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome::OutcomeError;
    /// let err = OutcomeError::msg("refused").context("connect").context("sync");
    /// let layers: Vec<String> = err.chain().map(ToString::to_string).collect();
    /// assert_eq!(layers, ["sync: connect: refused", "connect: refused", "refused"]);
    /// ```
    #[must_use = "iterators should be consumed to inspect causes"]
    pub const fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The innermost error of the chain.
    #[must_use]
    pub fn root_cause(&self) -> &Self {
        self.chain().last().unwrap_or(self)
    }

    /// Find a foreign error of type `E` anywhere in the chain, including the
    /// sources reported by foreign errors themselves.
    #[must_use]
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.chain().find_map(|layer| match layer {
            Self::Foreign(foreign) => {
                let first: &(dyn StdError + 'static) = foreign.as_ref();
                std::iter::successors(Some(first), |&err| err.source())
                    .find_map(|err| err.downcast_ref::<E>())
            }
            Self::Message(_) | Self::Context { .. } => None,
        })
    }
}
