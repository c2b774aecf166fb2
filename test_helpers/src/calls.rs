//! Counting how often a callback runs.
//!
//! Combinators promise to call their callbacks exactly once or never; a
//! [`CallCounter`] lets a test observe which.
//!
//! # Examples
//!
//! ```
//! use outcome_test_helpers::CallCounter;
//!
//! let counter = CallCounter::new();
//! let double = |x: i32| counter.tick(x * 2);
//! assert_eq!(double(4), 8);
//! assert_eq!(counter.count(), 1);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

/// Thread-safe tally of callback invocations.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    /// Create a counter that has seen no calls.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
        }
    }

    /// Record one call.
    pub fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    /// Record one call and pass `value` through.
    pub fn tick<R>(&self, value: R) -> R {
        self.record();
        value
    }

    /// Number of calls recorded so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Returns `true` when no call has been recorded.
    #[must_use]
    pub fn never_called(&self) -> bool {
        self.count() == 0
    }

    /// Returns `true` when exactly one call has been recorded.
    #[must_use]
    pub fn called_once(&self) -> bool {
        self.count() == 1
    }
}
