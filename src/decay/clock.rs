//! Time source used to decide when frequencies decay.
//!
//! The cache never reads the system clock directly.  Production code uses
//! [`SystemClock`]; tests hand the cache a [`ManualClock`] and advance it
//! explicitly instead of sleeping.
//!
//! # Example
//! ```
//! use aging_lfu::{ManualClock, WeightedAgingLfuCache};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let mut cache: WeightedAgingLfuCache<&str, u32> = WeightedAgingLfuCache::builder(10)
//!     .decay_interval(Duration::from_secs(30))
//!     .clock(clock.clone())
//!     .build();
//!
//! cache.put_with("a", 1, 1, 8).unwrap();
//! clock.advance(Duration::from_secs(65));
//! cache.get(&"a").unwrap();
//! assert_eq!(cache.frequency(&"a"), Some(3)); // (8 >> 2) + 1
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Supplies the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// Reads [`Instant::now`].  This is the default clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// give another to the cache.
#[derive(Clone, Debug)]
pub struct ManualClock {
    now: Arc<Mutex<Instant>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current instant.
    pub fn new() -> Self {
        ManualClock {
            now: Arc::new(Mutex::new(Instant::now())),
        }
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        *self.now.lock() += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}
