//! YouTube Module
//!
//! Client for the YouTube Data API `videos` endpoint and normalization of its
//! statistics payload.

mod client;
mod payload;

pub use client::YouTubeClient;
pub(crate) use payload::VideoListResponse;
