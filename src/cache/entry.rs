//! Cache Entry Module
//!
//! A snapshot of one video's statistics and the moment it was fetched.

use std::time::Instant;

use once_cell::sync::Lazy;

use crate::models::VideoStats;

/// Process-local origin of the cache clock.
static CLOCK_ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);

// == Cache Entry ==
/// Represents a single cached statistics snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry {
    /// The stored statistics
    pub stats: VideoStats,
    /// Fetch instant, in milliseconds on the monotonic cache clock
    pub created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    #[cfg(test)]
    pub fn new(stats: VideoStats) -> Self {
        Self::at(stats, monotonic_now_ms())
    }

    /// Creates a new entry stamped with `created_at` (cache clock milliseconds).
    pub fn at(stats: VideoStats, created_at: u64) -> Self {
        Self { stats, created_at }
    }

    // == Freshness ==
    /// Checks whether the entry is still authoritative at `now_ms`.
    ///
    /// Fresh means `now - created_at < ttl`. Once the full TTL has elapsed the
    /// entry is stale. An instant before creation yields age 0.
    pub fn is_fresh_at(&self, now_ms: u64, ttl_ms: u64) -> bool {
        self.age_ms(now_ms) < ttl_ms
    }

    /// Checks freshness against the current time.
    #[cfg(test)]
    pub fn is_fresh(&self, ttl_ms: u64) -> bool {
        self.is_fresh_at(monotonic_now_ms(), ttl_ms)
    }

    /// Milliseconds elapsed between creation and `now_ms`.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at)
    }
}

// == Utility Functions ==
/// Milliseconds elapsed on a monotonic clock since the cache clock started.
///
/// Unaffected by wall-clock adjustments, so it never runs backwards.
pub fn monotonic_now_ms() -> u64 {
    CLOCK_ORIGIN.elapsed().as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    const TTL: u64 = 300_000;

    #[test]
    fn test_entry_creation() {
        let before = monotonic_now_ms();
        let entry = CacheEntry::new(VideoStats::new(42, 7, 0));
        let after = monotonic_now_ms();

        assert_eq!(entry.stats, VideoStats::new(42, 7, 0));
        assert!(entry.created_at >= before && entry.created_at <= after);
        assert!(entry.is_fresh(TTL));
    }

    #[test]
    fn test_fresh_just_before_ttl() {
        let entry = CacheEntry::at(VideoStats::default(), 1_000);
        assert!(entry.is_fresh_at(1_000 + TTL - 1, TTL));
    }

    #[test]
    fn test_stale_at_ttl_boundary() {
        // Exactly TTL elapsed: no longer fresh
        let entry = CacheEntry::at(VideoStats::default(), 1_000);
        assert!(!entry.is_fresh_at(1_000 + TTL, TTL));
        assert!(!entry.is_fresh_at(1_000 + TTL + 1, TTL));
    }

    #[test]
    fn test_instant_before_creation_has_zero_age() {
        let entry = CacheEntry::at(VideoStats::default(), 10_000);
        assert_eq!(entry.age_ms(5_000), 0);
        assert!(entry.is_fresh_at(5_000, TTL));
    }

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let mut previous = monotonic_now_ms();
        for _ in 0..1_000 {
            let now = monotonic_now_ms();
            assert!(now >= previous);
            previous = now;
        }

        sleep(Duration::from_millis(20));
        assert!(monotonic_now_ms() >= previous + 20);
    }

    #[test]
    fn test_entry_goes_stale_in_real_time() {
        let entry = CacheEntry::new(VideoStats::default());
        assert!(entry.is_fresh(50));

        sleep(Duration::from_millis(80));

        assert!(!entry.is_fresh(50));
    }

    #[test]
    fn test_zero_ttl_is_never_fresh() {
        let entry = CacheEntry::new(VideoStats::default());
        assert!(!entry.is_fresh(0));
    }
}
