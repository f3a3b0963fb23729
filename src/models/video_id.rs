//! Video Identifier
//!
//! A cheap pre-filter for YouTube video ids: eleven characters from the
//! URL-safe base64 alphabet. Passing it does not mean the video exists.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, StatsError};

static VIDEO_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("video id pattern is valid"));

/// A syntactically valid YouTube video id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validates `raw` and wraps it.
    ///
    /// Returns `StatsError::InvalidId` when the format check fails.
    pub fn parse(raw: &str) -> Result<Self> {
        if VIDEO_ID_PATTERN.is_match(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(StatsError::InvalidId)
        }
    }

    /// Validates an optional raw id: absence (or an empty string) is
    /// `MissingId`, a bad format is `InvalidId`.
    pub fn require(raw: Option<&str>) -> Result<Self> {
        match raw {
            Some(raw) if !raw.is_empty() => Self::parse(raw),
            _ => Err(StatsError::MissingId),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
