/// Counters updated on every cache operation.
#[derive(Debug, Default)]
pub(crate) struct StatsCounter {
    hits: u64,
    misses: u64,
    evictions: u64,
    decays: u64,
    rejections: u64,
}

impl StatsCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    #[inline]
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    #[inline]
    pub(crate) fn record_eviction(&mut self, count: u64) {
        self.evictions += count;
    }

    #[inline]
    pub(crate) fn record_decay(&mut self) {
        self.decays += 1;
    }

    #[inline]
    pub(crate) fn record_rejection(&mut self) {
        self.rejections += 1;
    }

    /// Returns a point-in-time snapshot of the statistics.
    pub(crate) fn snapshot(&self) -> Metrics {
        let total = self.hits + self.misses;
        let hit_rate = if total == 0 {
            0.0_f64
        } else {
            self.hits as f64 / total as f64
        };
        Metrics {
            hits: self.hits,
            misses: self.misses,
            evictions: self.evictions,
            decays: self.decays,
            rejected_puts: self.rejections,
            hit_rate,
        }
    }
}

/// A point-in-time snapshot of cache statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Number of `get` calls that found their key.
    pub hits: u64,
    /// Number of `get` calls that returned `NotFound`.
    pub misses: u64,
    /// Number of entries evicted due to capacity pressure.
    pub evictions: u64,
    /// Number of decay passes applied.
    pub decays: u64,
    /// Number of `put` calls rejected because the entry was too heavy.
    pub rejected_puts: u64,
    /// `hits / (hits + misses)`, or `0.0` if no requests have been made.
    pub hit_rate: f64,
}

impl Metrics {
    pub fn request_count(&self) -> u64 {
        self.hits + self.misses
    }
}
