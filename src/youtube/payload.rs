//! Wire types of the `videos?part=statistics` response.
//!
//! Counts arrive as decimal strings. Anything unreadable becomes 0 instead of
//! failing the request.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, StatsError};
use crate::models::VideoStats;

#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Option<Vec<VideoItem>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    #[serde(default)]
    pub statistics: Option<RawStatistics>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatistics {
    #[serde(default)]
    pub view_count: Option<Value>,
    #[serde(default)]
    pub like_count: Option<Value>,
    #[serde(default)]
    pub comment_count: Option<Value>,
}

impl VideoListResponse {
    /// Normalizes the first item's statistics.
    ///
    /// Returns `StatsError::NotFound` when `items` is missing or empty, and
    /// `StatsError::UpstreamFailure` when the first item carries no
    /// `statistics` block. Only the individual counts are read leniently.
    pub fn into_stats(self) -> Result<VideoStats> {
        let item = self
            .items
            .and_then(|items| items.into_iter().next())
            .ok_or(StatsError::NotFound)?;

        let statistics = item.statistics.ok_or_else(|| {
            StatsError::UpstreamFailure("item has no statistics".to_string())
        })?;
        Ok(statistics.normalize())
    }
}

impl RawStatistics {
    pub fn normalize(&self) -> VideoStats {
        VideoStats::new(
            parse_count(self.view_count.as_ref()),
            parse_count(self.like_count.as_ref()),
            parse_count(self.comment_count.as_ref()),
        )
    }
}

/// Reads a count leniently.
///
/// Strings are read up to the first non-digit after optional leading
/// whitespace and sign ("42abc" is 42). Absent, non-numeric and negative
/// values are 0; values past `u64::MAX` saturate.
pub fn parse_count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::String(s)) => parse_leading_integer(s),
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        _ => 0,
    }
}

fn parse_leading_integer(s: &str) -> u64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..digits_end];

    if digits.is_empty() || negative {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}
