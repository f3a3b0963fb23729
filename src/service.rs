//! Video Stats Service
//!
//! The request pipeline behind `GET /api/youtube`: validate the id, answer
//! from the cache while fresh, otherwise fetch once from YouTube and remember
//! the result.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use crate::cache::{CacheStats, VideoCache};
use crate::config::Config;
use crate::error::{Result, StatsError};
use crate::models::{VideoId, VideoStats};
use crate::youtube::YouTubeClient;

/// Where a successful answer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsLookup {
    /// Served from a fresh cache entry, no upstream call
    Hit(VideoStats),
    /// Fetched from YouTube and stored in the cache
    Miss(VideoStats),
}

impl StatsLookup {
    pub fn stats(&self) -> VideoStats {
        match self {
            StatsLookup::Hit(stats) | StatsLookup::Miss(stats) => *stats,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, StatsLookup::Hit(_))
    }
}

/// Owns the cache and the upstream client for one service instance.
///
/// Concurrent lookups of the same uncached id may each call upstream; the
/// last successful fetch wins the cache slot.
#[derive(Clone)]
pub struct VideoStatsService {
    cache: Arc<RwLock<VideoCache>>,
    client: YouTubeClient,
    api_key: Option<String>,
}

impl VideoStatsService {
    pub fn new(cache: VideoCache, client: YouTubeClient, api_key: Option<String>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            client,
            api_key,
        }
    }

    /// Builds the cache and client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = VideoCache::new(config.max_entries, config.cache_ttl_ms);
        let client = YouTubeClient::new(
            config.youtube_api_base_url.clone(),
            config.upstream_timeout(),
        )?;
        Ok(Self::new(cache, client, config.youtube_api_key.clone()))
    }

    // == Lookup ==
    /// Resolves the statistics of `raw_id`.
    ///
    /// Order: presence, format, fresh cache entry, credential, upstream fetch.
    /// Only a successful fetch writes the cache.
    pub async fn lookup(&self, raw_id: Option<&str>) -> Result<StatsLookup> {
        let id = VideoId::require(raw_id).map_err(|err| {
            debug!("Rejected video id {:?}: {}", raw_id, err);
            err
        })?;

        // Write lock: a lookup updates LRU order and counters
        let cached = self.cache.write().await.get_fresh(&id);
        if let Some(stats) = cached {
            debug!("Cache hit for {}", id);
            return Ok(StatsLookup::Hit(stats));
        }

        let Some(api_key) = self.api_key.as_deref() else {
            warn!("YOUTUBE_API_KEY not configured");
            return Err(StatsError::NotConfigured);
        };

        match self.client.fetch_statistics(&id, api_key).await {
            Ok(stats) => {
                self.cache.write().await.insert(id.clone(), stats);
                info!(
                    "Fetched statistics for {}: views={}, likes={}",
                    id, stats.views, stats.likes
                );
                Ok(StatsLookup::Miss(stats))
            }
            Err(err) => {
                match &err {
                    StatsError::NotFound => info!("Video {} not found upstream", id),
                    StatsError::UpstreamTimeout => {
                        warn!("YouTube API timed out after {:?} for {}", self.client.timeout(), id)
                    }
                    StatsError::UpstreamFailure(detail) => {
                        error!("YouTube API error for {}: {}", id, detail)
                    }
                    other => error!("Unexpected error for {}: {}", id, other),
                }
                Err(err)
            }
        }
    }

    /// Current cache counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    /// Freshness window, also advertised to intermediaries via Cache-Control.
    pub async fn cache_ttl_ms(&self) -> u64 {
        self.cache.read().await.ttl_ms()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Shared handle to the cache, for inspection.
    pub fn cache(&self) -> Arc<RwLock<VideoCache>> {
        Arc::clone(&self.cache)
    }
}
