//! Frequency-ordered entry storage.
//!
//! All methods are called single-threadedly through `&mut` access from the
//! owning cache.

pub(crate) mod lfu;
