//! YouTube Data API client
//!
//! One GET per call, no retries. The whole exchange (connect, headers, body)
//! is bounded by the configured timeout; on expiry the in-flight request is
//! dropped.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::models::{VideoId, VideoStats};
use crate::youtube::VideoListResponse;

/// HTTP client for `{base_url}/videos?part=statistics`.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl YouTubeClient {
    /// Creates a client rooted at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("video_stats/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches and normalizes the statistics of one video.
    ///
    /// # Errors
    /// - `UpstreamTimeout` if no full answer arrives within the timeout
    /// - `UpstreamFailure` on transport errors, non-2xx status or bad JSON
    /// - `NotFound` if the API lists no item for `id`
    pub async fn fetch_statistics(&self, id: &VideoId, api_key: &str) -> Result<VideoStats> {
        match tokio::time::timeout(self.timeout, self.request(id, api_key)).await {
            Ok(result) => result,
            Err(_) => Err(StatsError::UpstreamTimeout),
        }
    }

    async fn request(&self, id: &VideoId, api_key: &str) -> Result<VideoStats> {
        let url = format!("{}/videos", self.base_url);
        debug!("Requesting statistics for {} from {}", id, url);

        let response = self
            .http
            .get(&url)
            .query(&[("part", "statistics"), ("id", id.as_str()), ("key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StatsError::UpstreamFailure(format!(
                "YouTube API error: {}",
                status
            )));
        }

        let payload: VideoListResponse = response.json().await?;
        payload.into_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn vid() -> VideoId {
        VideoId::parse("dQw4w9WgXcQ").unwrap()
    }

    #[tokio::test]
    async fn test_sends_expected_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "statistics"))
            .and(query_param("id", "dQw4w9WgXcQ"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{"statistics": {"viewCount": "5", "likeCount": "4", "commentCount": "3"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = YouTubeClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let stats = client.fetch_statistics(&vid(), "test-key").await.unwrap();

        assert_eq!(stats, VideoStats::new(5, 4, 3));
    }

    #[tokio::test]
    async fn test_trailing_slash_in_base_url() {
        let client =
            YouTubeClient::new("http://localhost:1/youtube/v3/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:1/youtube/v3");
    }

    #[tokio::test]
    async fn test_non_success_status_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let client = YouTubeClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let result = client.fetch_statistics(&vid(), "k").await;

        assert!(matches!(result, Err(StatsError::UpstreamFailure(_))));
    }

    #[tokio::test]
    async fn test_invalid_json_is_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = YouTubeClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let result = client.fetch_statistics(&vid(), "k").await;

        assert!(matches!(result, Err(StatsError::UpstreamFailure(_))));
    }

    #[tokio::test]
    async fn test_empty_items_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .mount(&server)
            .await;

        let client = YouTubeClient::new(server.uri(), Duration::from_secs(5)).unwrap();
        let result = client.fetch_statistics(&vid(), "k").await;

        assert!(matches!(result, Err(StatsError::NotFound)));
    }

    #[tokio::test]
    async fn test_slow_upstream_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = YouTubeClient::new(server.uri(), Duration::from_millis(100)).unwrap();
        let result = client.fetch_statistics(&vid(), "k").await;

        assert!(matches!(result, Err(StatsError::UpstreamTimeout)));
    }

    #[tokio::test]
    async fn test_connection_refused_is_failure() {
        // Nothing listens on port 1
        let client = YouTubeClient::new("http://127.0.0.1:1", Duration::from_secs(5)).unwrap();
        let result = client.fetch_statistics(&vid(), "k").await;

        assert!(matches!(result, Err(StatsError::UpstreamFailure(_))));
    }
}
