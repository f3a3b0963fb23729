//! API Module
//!
//! HTTP handlers and routing for the stats service.
//!
//! # Endpoints
//! - `GET /api/youtube?id=<video id>` - Video statistics
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
