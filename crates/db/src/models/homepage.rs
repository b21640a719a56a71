//! Homepage hero content model and DTO.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `homepage_content` table (latest row wins).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HomepageContent {
    pub id: DbId,
    pub hero_title: String,
    pub hero_subtitle: Option<String>,
    pub cv_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting the homepage content.
///
/// Optional fields arriving as empty strings are normalized to `None` in
/// [`normalized`](Self::normalized) so the database stores NULL instead of
/// empty text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertHomepageContent {
    pub hero_title: String,
    pub hero_subtitle: Option<String>,
    pub cv_url: Option<String>,
}

impl UpsertHomepageContent {
    /// Trim optional fields and map empty strings to `None`.
    pub fn normalized(mut self) -> Self {
        self.hero_subtitle = self
            .hero_subtitle
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self.cv_url = self
            .cv_url
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        self
    }
}
