//! Eviction listener: a callback invoked whenever capacity pressure pushes
//! an entry out of the cache.
//!
//! # Example
//! ```
//! use aging_lfu::WeightedAgingLfuCache;
//! use std::sync::{Arc, Mutex};
//!
//! let log: Arc<Mutex<Vec<(u64, String)>>> = Arc::new(Mutex::new(Vec::new()));
//! let log2 = Arc::clone(&log);
//!
//! let mut cache: WeightedAgingLfuCache<u64, String> = WeightedAgingLfuCache::builder(2)
//!     .eviction_listener(move |key, value| log2.lock().unwrap().push((key, value)))
//!     .build();
//!
//! cache.put(1, "one".to_string()).unwrap();
//! cache.put(2, "two".to_string()).unwrap();
//! cache.put(3, "three".to_string()).unwrap(); // evicts key 1
//! assert_eq!(log.lock().unwrap().as_slice(), &[(1, "one".to_string())]);
//! ```

/// A callback invoked each time an entry is evicted.
///
/// The listener takes ownership of the evicted key and value.  It runs
/// inside `put`, after the new entry has been linked in.  It must be `Send`
/// so the cache can move between threads behind a caller's lock.
pub trait EvictionListener<K, V>: Send {
    fn on_evict(&mut self, key: K, value: V);
}

/// An [`EvictionListener`] backed by a closure.
///
/// Created via [`CacheBuilder::eviction_listener`](crate::CacheBuilder::eviction_listener).
pub struct FnListener<F>(pub F);

impl<K, V, F> EvictionListener<K, V> for FnListener<F>
where
    F: FnMut(K, V) + Send,
{
    fn on_evict(&mut self, key: K, value: V) {
        (self.0)(key, value)
    }
}
