//! Cache Module
//!
//! Provides a bounded in-memory cache of video statistics with TTL freshness
//! and LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{monotonic_now_ms, CacheEntry};
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::VideoCache;

// == Public Constants ==
/// Default freshness window of a cached record (5 minutes)
pub const DEFAULT_TTL_MS: u64 = 5 * 60 * 1000;

/// Default maximum number of cached videos
pub const DEFAULT_MAX_ENTRIES: usize = 1000;
