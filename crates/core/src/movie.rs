use serde::{Deserialize, Serialize};

/// A single catalog entry.
///
/// Records are append-only: never updated in place, never deleted. Identity
/// is the case-insensitive title (see [`title_key`]); the catalog invariant
/// that no two records share a title key is enforced at insertion time by
/// the sync agent, not by this type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub genre: String,
    /// Normalized 0-10 scale.
    pub rating: f64,
    pub year: i32,
    pub watched: bool,
}

impl MovieRecord {
    pub fn new(
        title: impl Into<String>,
        genre: impl Into<String>,
        rating: f64,
        year: i32,
        watched: bool,
    ) -> Self {
        Self { title: title.into(), genre: genre.into(), rating, year, watched }
    }

    /// Dedup key for this record's title.
    pub fn title_key(&self) -> String {
        title_key(&self.title)
    }
}

/// Normalized dedup key for a title: Unicode lowercasing, nothing else.
///
/// This is the sole identity comparison used for duplicate detection, by
/// both the storage queries and the sync agent.
pub fn title_key(title: &str) -> String {
    title.to_lowercase()
}
