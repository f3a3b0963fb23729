//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL_MS};

/// Default root of the YouTube Data API.
pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// A missing API key is not an error: the service starts and answers 503.
#[derive(Clone)]
pub struct Config {
    /// YouTube Data API key, None when not configured
    pub youtube_api_key: Option<String>,
    /// Root URL of the statistics API
    pub youtube_api_base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Maximum number of videos the cache can hold
    pub max_entries: usize,
    /// How long a cached record stays fresh, in milliseconds
    pub cache_ttl_ms: u64,
    /// Upper bound on a single upstream exchange, in milliseconds
    pub upstream_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `YOUTUBE_API_KEY` - Upstream credential (default: unset)
    /// - `YOUTUBE_API_BASE_URL` - Upstream API root (default: googleapis v3)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `MAX_ENTRIES` - Maximum cached videos (default: 1000)
    /// - `CACHE_TTL_MS` - Cache freshness window (default: 300000)
    /// - `UPSTREAM_TIMEOUT_MS` - Upstream request bound (default: 5000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            youtube_api_key: env::var("YOUTUBE_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            youtube_api_base_url: env::var("YOUTUBE_API_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(defaults.youtube_api_base_url),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            max_entries: parse_var("MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cache_ttl_ms: parse_var("CACHE_TTL_MS").unwrap_or(defaults.cache_ttl_ms),
            upstream_timeout_ms: parse_var("UPSTREAM_TIMEOUT_MS")
                .unwrap_or(defaults.upstream_timeout_ms),
        }
    }

    /// Returns true when an upstream credential is available.
    pub fn has_api_key(&self) -> bool {
        self.youtube_api_key.is_some()
    }

    /// Upstream timeout as a Duration.
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            youtube_api_key: None,
            youtube_api_base_url: DEFAULT_YOUTUBE_API_BASE_URL.to_string(),
            server_port: 3000,
            max_entries: DEFAULT_MAX_ENTRIES,
            cache_ttl_ms: DEFAULT_TTL_MS,
            upstream_timeout_ms: 5_000,
        }
    }
}

// The key is a secret; keep it out of logs and panics.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("youtube_api_key", &self.youtube_api_key.as_ref().map(|_| "<redacted>"))
            .field("youtube_api_base_url", &self.youtube_api_base_url)
            .field("server_port", &self.server_port)
            .field("max_entries", &self.max_entries)
            .field("cache_ttl_ms", &self.cache_ttl_ms)
            .field("upstream_timeout_ms", &self.upstream_timeout_ms)
            .finish()
    }
}
