use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Genre;

// DTO for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub genre: Genre,
}

impl Book {
    pub fn new(id: u32, title: &str, author: &str, genre: Genre) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre,
        }
    }

    /// "Title by Author", as used in chat replies
    pub fn byline(&self) -> String {
        format!("{} by {}", self.title, self.author)
    }
}
