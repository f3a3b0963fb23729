//! API Handlers
//!
//! HTTP request handlers for each endpoint.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::config::Config;
use crate::error::Result;
use crate::models::{CacheStatsResponse, HealthResponse, StatsQuery};
use crate::service::{StatsLookup, VideoStatsService};

/// Marks whether a response was served from the in-process cache.
pub const X_CACHE: &str = "x-cache";

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Stats pipeline owning the cache and the upstream client
    pub service: Arc<VideoStatsService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: VideoStatsService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(VideoStatsService::from_config(config)?))
    }
}

/// Handler for GET /api/youtube
///
/// Cache hits carry `X-Cache: HIT`. Fresh fetches carry `X-Cache: MISS` and a
/// `Cache-Control` header matching the cache TTL. Errors render through
/// `StatsError`. A repeated `id` resolves to its first occurrence; an
/// unreadable query string is treated like a missing id so the body stays JSON.
pub async fn video_stats_handler(
    State(state): State<AppState>,
    pairs: Option<Query<Vec<(String, String)>>>,
) -> Result<Response> {
    let query = pairs
        .map(|Query(pairs)| StatsQuery::from_pairs(pairs))
        .unwrap_or_default();
    let lookup = state.service.lookup(query.raw_id()).await?;

    let x_cache = HeaderName::from_static(X_CACHE);
    let response = match lookup {
        StatsLookup::Hit(stats) => {
            ([(x_cache, HeaderValue::from_static("HIT"))], Json(stats)).into_response()
        }
        StatsLookup::Miss(stats) => {
            let max_age = state.service.cache_ttl_ms().await / 1000;
            (
                [
                    (header::CACHE_CONTROL, cache_control_value(max_age)),
                    (x_cache, HeaderValue::from_static("MISS")),
                ],
                Json(stats),
            )
                .into_response()
        }
    };

    Ok(response)
}

fn cache_control_value(max_age_secs: u64) -> HeaderValue {
    HeaderValue::from_str(&format!("public, max-age={}", max_age_secs))
        .unwrap_or_else(|_| HeaderValue::from_static("public, max-age=300"))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.service.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
