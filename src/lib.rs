//! Video Stats - YouTube statistics proxy
//!
//! Validates a video id, answers from a bounded in-memory TTL cache while
//! fresh, otherwise fetches from the YouTube Data API under a timeout and
//! degrades to a JSON error body on every failure.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod youtube;

pub use api::AppState;
pub use config::Config;
pub use error::StatsError;
pub use service::{StatsLookup, VideoStatsService};
