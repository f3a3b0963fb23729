//! Error types for the stats service
//!
//! Provides unified error handling using thiserror. Every variant renders to a
//! JSON body; upstream-side failures also carry zeroed `views`/`likes` so
//! callers can always read those fields.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Stats Error Enum ==
/// Unified error type for the stats service.
#[derive(Error, Debug)]
pub enum StatsError {
    /// No `id` query parameter was supplied
    #[error("No video ID provided")]
    MissingId,

    /// The `id` did not look like a YouTube video id
    #[error("Invalid video ID format")]
    InvalidId,

    /// No upstream credential configured
    #[error("API key not configured")]
    NotConfigured,

    /// Upstream did not answer within the timeout
    #[error("Request timeout")]
    UpstreamTimeout,

    /// Upstream answered with zero items
    #[error("Video not found")]
    NotFound,

    /// Network error, non-OK status or undecodable payload
    #[error("Failed to fetch video statistics")]
    UpstreamFailure(String),
}

impl StatsError {
    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            StatsError::MissingId | StatsError::InvalidId => StatusCode::BAD_REQUEST,
            StatsError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            StatsError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            StatsError::NotFound => StatusCode::NOT_FOUND,
            StatsError::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for errors caused by the caller's input.
    pub fn is_client_error(&self) -> bool {
        matches!(self, StatsError::MissingId | StatsError::InvalidId)
    }
}

// The request URL carries the API key in its query string, so it is stripped
// before the error text is kept.
impl From<reqwest::Error> for StatsError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StatsError::UpstreamTimeout
        } else {
            StatsError::UpstreamFailure(err.without_url().to_string())
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        let body = if self.is_client_error() {
            Json(json!({
                "error": message
            }))
        } else {
            Json(json!({
                "views": 0,
                "likes": 0,
                "error": message
            }))
        };

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the stats service.
pub type Result<T> = std::result::Result<T, StatsError>;
