//! Response DTOs for the stats service
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;

/// Normalized statistics of one video.
///
/// Body of a successful `GET /api/youtube`, and the value held in the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VideoStats {
    /// View count
    pub views: u64,
    /// Like count
    pub likes: u64,
    /// Comment count, omitted when unknown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<u64>,
}

impl VideoStats {
    /// Creates a new VideoStats with all three counters known
    pub fn new(views: u64, likes: u64, comments: u64) -> Self {
        Self {
            views,
            likes,
            comments: Some(comments),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses (absent or stale)
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of videos in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_video_stats_serialize() {
        let stats = VideoStats::new(42, 7, 0);
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value, json!({"views": 42, "likes": 7, "comments": 0}));
    }

    #[test]
    fn test_video_stats_without_comments() {
        let stats = VideoStats {
            views: 1,
            likes: 2,
            comments: None,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(value, json!({"views": 1, "likes": 2}));
    }

    #[test]
    fn test_cache_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            total_entries: 100,
        };
        let resp = CacheStatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.evictions, 5);
    }

    #[test]
    fn test_cache_stats_response_zero_requests() {
        let resp = CacheStatsResponse::from(CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
