//! Request and Response models for the stats service
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! validated video identifier.

pub mod requests;
pub mod responses;
pub mod video_id;

// Re-export commonly used types
pub use requests::StatsQuery;
pub use responses::{CacheStatsResponse, HealthResponse, VideoStats};
pub use video_id::VideoId;
