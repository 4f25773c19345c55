pub mod clock;

use std::time::{Duration, Instant};

/// Decay interval used when none is configured.
pub const DEFAULT_DECAY_INTERVAL: Duration = Duration::from_secs(30);

/// Largest right shift applied in a single decay pass.
pub(crate) const MAX_DECAY_SHIFT: u32 = 31;

/// Tracks when frequencies were last aged.
///
/// Decay is lazy: nothing happens until the cache asks, and the whole
/// backlog of elapsed intervals is folded into one shift.
pub(crate) struct DecayState {
    interval: Duration,
    last_decay: Instant,
}

impl DecayState {
    pub(crate) fn new(interval: Duration, now: Instant) -> Self {
        debug_assert!(!interval.is_zero(), "decay interval must be non-zero");
        DecayState {
            interval,
            last_decay: now,
        }
    }

    /// Returns the number of bits to shift every frequency by, or `None` if
    /// less than one interval has elapsed since the last decay.
    ///
    /// A due decay resets the reference point to `now`; any partial interval
    /// left over is discarded.
    pub(crate) fn due_shift(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last_decay);
        if elapsed < self.interval {
            return None;
        }
        self.last_decay = now;
        let periods = elapsed.as_nanos() / self.interval.as_nanos().max(1);
        Some(periods.min(MAX_DECAY_SHIFT as u128) as u32)
    }

    pub(crate) fn interval(&self) -> Duration {
        self.interval
    }
}
