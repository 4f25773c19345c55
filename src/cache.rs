use std::hash::Hash;
use std::time::Duration;

use tracing::{debug, trace};

use crate::builder::CacheBuilder;
use crate::decay::clock::Clock;
use crate::decay::DecayState;
use crate::error::{CacheError, Result};
use crate::listener::EvictionListener;
use crate::metrics::stats::{Metrics, StatsCounter};
use crate::policy::lfu::{Entry, FrequencyList};

/// A weight-bounded LFU cache whose access frequencies decay over time.
///
/// Entries are ordered by frequency; when a `put` needs room, the least
/// frequently used entry goes first, and among equally frequent entries the
/// oldest goes first.  Every full decay interval that elapses halves all
/// frequencies, so entries that were popular long ago do not stay pinned
/// forever.  Decay is applied lazily by [`get`](Self::get); a cache that is
/// only written to never ages.
///
/// The cache is single-threaded.  Wrap it in a mutex to share it.
///
/// # Example
/// ```
/// use aging_lfu::WeightedAgingLfuCache;
///
/// let mut cache: WeightedAgingLfuCache<&str, u32> = WeightedAgingLfuCache::new(3);
/// cache.put("a", 1).unwrap();
/// cache.put("b", 2).unwrap();
/// cache.put("c", 3).unwrap();
/// assert_eq!(cache.get(&"a"), Ok(&1));
///
/// cache.put("d", 4).unwrap(); // evicts "b"
/// assert!(!cache.contains_key(&"b"));
/// ```
pub struct WeightedAgingLfuCache<K, V> {
    entries: FrequencyList<K, V>,
    decay: DecayState,
    clock: Box<dyn Clock>,
    /// Optional eviction listener.  `None` if the user didn't register one.
    listener: Option<Box<dyn EvictionListener<K, V>>>,
    metrics: StatsCounter,
}

impl<K, V> WeightedAgingLfuCache<K, V>
where
    K: Hash + Eq + Clone + 'static,
    V: 'static,
{
    pub(crate) fn from_parts(
        max_weight: u64,
        decay_interval: Duration,
        clock: Box<dyn Clock>,
        listener: Option<Box<dyn EvictionListener<K, V>>>,
    ) -> Self {
        let decay = DecayState::new(decay_interval, clock.now());
        WeightedAgingLfuCache {
            entries: FrequencyList::new(max_weight),
            decay,
            clock,
            listener,
            metrics: StatsCounter::new(),
        }
    }

    /// Creates a cache with the default 30 second decay interval.
    ///
    /// Use [`with_decay_interval`](Self::with_decay_interval) or the
    /// [`builder`](Self::builder) to pick another interval.
    pub fn new(max_weight: u64) -> Self {
        CacheBuilder::new(max_weight).build()
    }

    /// Creates a cache whose frequencies are halved every `decay_interval`.
    ///
    /// # Panics
    ///
    /// Panics if `decay_interval` is zero.
    pub fn with_decay_interval(max_weight: u64, decay_interval: Duration) -> Self {
        CacheBuilder::new(max_weight)
            .decay_interval(decay_interval)
            .build()
    }

    /// Returns a [`CacheBuilder`] for constructing a new cache.
    pub fn builder(max_weight: u64) -> CacheBuilder<K, V> {
        CacheBuilder::new(max_weight)
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    /// Returns the value for `key`, counting one access.
    pub fn get(&mut self, key: &K) -> Result<&V> {
        self.get_by(key, 1)
    }

    /// Returns the value for `key`, adding `increment_by` to its frequency.
    ///
    /// If a decay interval has passed since the last decay, every entry's
    /// frequency is aged first.  A miss neither ages the cache nor counts
    /// as an access.
    pub fn get_by(&mut self, key: &K, increment_by: u64) -> Result<&V> {
        if !self.entries.contains(key) {
            self.metrics.record_miss();
            return Err(CacheError::NotFound);
        }
        self.metrics.record_hit();
        self.apply_decay();
        self.entries
            .touch(key, increment_by)
            .ok_or(CacheError::NotFound)
    }

    /// Returns the value for `key` without counting an access or aging.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key).map(|e| &e.value)
    }

    fn apply_decay(&mut self) {
        let now = self.clock.now();
        if let Some(shift) = self.decay.due_shift(now) {
            debug!(
                shift,
                entries = self.entries.len(),
                "decaying access frequencies"
            );
            self.entries.decay(shift);
            self.metrics.record_decay();
        }
    }

    // -----------------------------------------------------------------------
    // Insertion
    // -----------------------------------------------------------------------

    /// Inserts `value` with weight 1 and initial frequency 1.
    ///
    /// See [`put_with`](Self::put_with).
    pub fn put(&mut self, key: K, value: V) -> Result<()> {
        self.put_with(key, value, 1, 1)
    }

    /// Inserts `value` for `key` with an explicit weight and initial
    /// frequency, evicting the least frequently used entries to make room.
    ///
    /// If `key` is already cached the call does nothing: the stored value,
    /// weight and frequency are kept.  An entry heavier than
    /// [`max_weight`](Self::max_weight) is rejected with
    /// [`CacheError::OversizedEntry`] and the cache is left unchanged.
    pub fn put_with(&mut self, key: K, value: V, weight: u64, frequency: u64) -> Result<()> {
        if self.entries.contains(&key) {
            trace!(weight, frequency, "ignoring put for cached key");
            return Ok(());
        }

        match self.entries.insert(key, value, weight, frequency) {
            Ok(evicted) => {
                self.dispatch_evictions(evicted);
                Ok(())
            }
            Err(err) => {
                debug!(
                    weight,
                    max_weight = self.entries.max_weight(),
                    "rejecting oversized entry"
                );
                self.metrics.record_rejection();
                Err(err)
            }
        }
    }

    /// Fires the listener for capacity-evicted entries and records the metric.
    fn dispatch_evictions(&mut self, evicted: Vec<Entry<K, V>>) {
        if evicted.is_empty() {
            return;
        }
        self.metrics.record_eviction(evicted.len() as u64);
        for entry in evicted {
            trace!(
                weight = entry.weight,
                frequency = entry.frequency,
                "evicted entry"
            );
            if let Some(listener) = self.listener.as_mut() {
                listener.on_evict(entry.key, entry.value);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// Returns every entry as `(key, value, frequency)`, from the next
    /// eviction victim to the most frequently used.
    ///
    /// Intended for tests and debugging.  Debug builds assert that the
    /// frequencies are in order.
    pub fn inspect(&self) -> Vec<(&K, &V, u64)> {
        let snapshot: Vec<(&K, &V, u64)> = self
            .entries
            .iter()
            .map(|e| (&e.key, &e.value, e.frequency))
            .collect();
        debug_assert!(
            snapshot.windows(2).all(|w| w[0].2 <= w[1].2),
            "entries out of frequency order"
        );
        snapshot
    }

    /// Current access frequency of `key`, if cached.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.entries.get(key).map(|e| e.frequency)
    }

    pub fn stats(&self) -> Metrics {
        self.metrics.snapshot()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() == 0
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains(key)
    }

    /// Sum of the weights of all cached entries.
    pub fn current_weight(&self) -> u64 {
        self.entries.current_weight()
    }

    pub fn max_weight(&self) -> u64 {
        self.entries.max_weight()
    }

    pub fn decay_interval(&self) -> Duration {
        self.decay.interval()
    }
}
