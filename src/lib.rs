//! A weighted LFU cache with time-based frequency decay.
//!
//! Every entry carries a caller-assigned weight and an access frequency.
//! The cache keeps `Σ weight ≤ max_weight` by evicting the least frequently
//! used entry, oldest first among ties.  Frequencies are halved once per
//! decay interval, lazily on lookup, so long-dead popularity fades away.
//!
//! ```
//! use aging_lfu::{CacheError, WeightedAgingLfuCache};
//!
//! let mut cache: WeightedAgingLfuCache<String, Vec<u8>> = WeightedAgingLfuCache::new(64);
//! cache.put_with("small".to_string(), vec![0; 8], 8, 1).unwrap();
//! assert!(cache.get(&"small".to_string()).is_ok());
//! assert_eq!(cache.get(&"missing".to_string()), Err(CacheError::NotFound));
//! ```

mod builder;
mod cache;
mod decay;
mod error;
pub mod listener;
mod metrics;
mod policy;

pub use builder::CacheBuilder;
pub use cache::WeightedAgingLfuCache;
pub use decay::clock::{Clock, ManualClock, SystemClock};
pub use decay::DEFAULT_DECAY_INTERVAL;
pub use error::{CacheError, Result};
pub use metrics::stats::Metrics;
