use std::hash::Hash;
use std::time::Duration;

use crate::cache::WeightedAgingLfuCache;
use crate::decay::clock::{Clock, SystemClock};
use crate::decay::DEFAULT_DECAY_INTERVAL;
use crate::listener::{EvictionListener, FnListener};

/// Builder for configuring and constructing a [`WeightedAgingLfuCache`].
///
/// # Example
/// ```
/// use aging_lfu::CacheBuilder;
/// use std::time::Duration;
///
/// let cache: aging_lfu::WeightedAgingLfuCache<String, String> = CacheBuilder::new(1_000)
///     .decay_interval(Duration::from_secs(60))
///     .build();
/// assert_eq!(cache.max_weight(), 1_000);
/// ```
pub struct CacheBuilder<K, V> {
    max_weight: u64,
    decay_interval: Duration,
    clock: Box<dyn Clock>,
    listener: Option<Box<dyn EvictionListener<K, V>>>,
}

impl<K: 'static, V: 'static> CacheBuilder<K, V> {
    /// Starts a builder for a cache holding at most `max_weight` total weight.
    pub fn new(max_weight: u64) -> Self {
        CacheBuilder {
            max_weight,
            decay_interval: DEFAULT_DECAY_INTERVAL,
            clock: Box::new(SystemClock),
            listener: None,
        }
    }

    /// Set how often frequencies are halved (default: 30 seconds).
    ///
    /// Every full interval elapsed between two decays shifts all
    /// frequencies right by one more bit.
    pub fn decay_interval(mut self, interval: Duration) -> Self {
        assert!(
            !interval.is_zero(),
            "decay_interval must be greater than zero"
        );
        self.decay_interval = interval;
        self
    }

    /// Replace the time source (default: [`SystemClock`]).
    pub fn clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Register an eviction listener closure.
    ///
    /// The closure receives the owned key and value of every entry evicted
    /// to make room for a `put`.
    pub fn eviction_listener<F>(mut self, f: F) -> Self
    where
        F: FnMut(K, V) + Send + 'static,
    {
        self.listener = Some(Box::new(FnListener(f)));
        self
    }

    /// Register an eviction listener via the [`EvictionListener`] trait.
    pub fn eviction_listener_impl<L: EvictionListener<K, V> + 'static>(mut self, l: L) -> Self {
        self.listener = Some(Box::new(l));
        self
    }
}

impl<K, V> CacheBuilder<K, V>
where
    K: Hash + Eq + Clone + 'static,
    V: 'static,
{
    pub fn build(self) -> WeightedAgingLfuCache<K, V> {
        WeightedAgingLfuCache::from_parts(
            self.max_weight,
            self.decay_interval,
            self.clock,
            self.listener,
        )
    }
}
