//! Canonical genre list
//!
//! Shared by the catalog data and the chat genre-token scan, so the two can
//! never drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Fiction,
    NonFiction,
    Mystery,
    Fantasy,
    Romance,
    Thriller,
}

impl Genre {
    /// All genres, in the order the chat scans for them.
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Mystery,
        Genre::Fantasy,
        Genre::Romance,
        Genre::Thriller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Fiction => "fiction",
            Genre::NonFiction => "non-fiction",
            Genre::Mystery => "mystery",
            Genre::Fantasy => "fantasy",
            Genre::Romance => "romance",
            Genre::Thriller => "thriller",
        }
    }

    /// Case-insensitive exact match. "Sci-Fi" and " fiction" are not genres.
    pub fn parse(value: &str) -> Option<Genre> {
        let lower = value.to_lowercase();
        Genre::ALL.into_iter().find(|g| g.as_str() == lower)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
