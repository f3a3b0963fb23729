//! Request DTOs for the stats service
//!
//! Defines the structure of incoming query strings.

/// Query string of `GET /api/youtube`
///
/// Built from the decoded `key=value` pairs rather than a derived struct so a
/// repeated `id` parameter resolves to its first occurrence.
///
/// # Fields
/// - `id`: Candidate YouTube video id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsQuery {
    /// The candidate video id
    pub id: Option<String>,
}

impl StatsQuery {
    /// Builds the query from decoded pairs, keeping the first `id`.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let id = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "id").then_some(value));
        Self { id }
    }

    /// Returns the id if one was supplied. An empty `id=` counts as absent.
    pub fn raw_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}
