use thiserror::Error;

/// Errors returned by [`WeightedAgingLfuCache`](crate::WeightedAgingLfuCache).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// The key is not present in the cache.
    ///
    /// Returned instead of a default value so that a cached "zero" stays
    /// distinguishable from a miss.
    #[error("key not found")]
    NotFound,

    /// A single entry is heavier than the whole cache.
    ///
    /// Such a `put` is rejected before anything is evicted.
    #[error("entry weight {weight} exceeds cache capacity {max_weight}")]
    OversizedEntry { weight: u64, max_weight: u64 },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CacheError>;
