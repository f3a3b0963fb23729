//! Cache Store Module
//!
//! HashMap of video statistics combined with LRU tracking and TTL freshness.

use std::collections::HashMap;

use crate::cache::{monotonic_now_ms, CacheEntry, CacheStats, LruTracker};
use crate::models::{VideoId, VideoStats};

// == Video Cache ==
/// Bounded statistics cache keyed by video id.
///
/// A stale entry is never served, but it is not purged either: it stays in
/// place until the next successful fetch overwrites it or LRU evicts it.
#[derive(Debug)]
pub struct VideoCache {
    entries: HashMap<VideoId, CacheEntry>,
    lru: LruTracker,
    stats: CacheStats,
    /// Maximum number of videos held at once
    max_entries: usize,
    /// Freshness window in milliseconds
    ttl_ms: u64,
}

impl VideoCache {
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `max_entries` - Capacity; values below 1 are raised to 1
    /// * `ttl_ms` - Freshness window in milliseconds
    pub fn new(max_entries: usize, ttl_ms: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            max_entries: max_entries.max(1),
            ttl_ms,
        }
    }

    // == Get Fresh ==
    /// Returns the cached statistics for `id` if they are still fresh.
    ///
    /// Absent and stale entries both count as a miss.
    pub fn get_fresh(&mut self, id: &VideoId) -> Option<VideoStats> {
        self.get_fresh_at(id, monotonic_now_ms())
    }

    /// `get_fresh` evaluated at an explicit instant (cache clock milliseconds).
    pub fn get_fresh_at(&mut self, id: &VideoId, now_ms: u64) -> Option<VideoStats> {
        let fresh = self
            .entries
            .get(id)
            .filter(|entry| entry.is_fresh_at(now_ms, self.ttl_ms))
            .map(|entry| entry.stats);

        self.stats.record_lookup(fresh.is_some());
        if fresh.is_some() {
            self.lru.touch(id);
        }
        fresh
    }

    // == Insert ==
    /// Stores a freshly fetched snapshot, overwriting any previous one.
    ///
    /// Inserting a new id at capacity evicts the least recently used id.
    pub fn insert(&mut self, id: VideoId, stats: VideoStats) {
        self.insert_at(id, stats, monotonic_now_ms());
    }

    /// `insert` stamped with an explicit instant (cache clock milliseconds).
    pub fn insert_at(&mut self, id: VideoId, stats: VideoStats, now_ms: u64) {
        if !self.entries.contains_key(&id) {
            while self.entries.len() >= self.max_entries {
                match self.lru.evict_oldest() {
                    Some(evicted) => {
                        self.entries.remove(&evicted);
                        self.stats.record_eviction();
                    }
                    None => break,
                }
            }
        }

        self.lru.touch(&id);
        self.entries.insert(id, CacheEntry::at(stats, now_ms));
    }

    /// Returns the raw entry for `id`, fresh or not. Does not count as a lookup.
    #[cfg(test)]
    pub fn peek(&self, id: &VideoId) -> Option<&CacheEntry> {
        self.entries.get(id)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            total_entries: self.entries.len(),
            ..self.stats.clone()
        }
    }

    pub fn ttl_ms(&self) -> u64 {
        self.ttl_ms
    }

    pub fn capacity(&self) -> usize {
        self.max_entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
