//! About-page content model and DTO.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `about_content` table. Effectively a singleton: the most
/// recently created row is the live one.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutContent {
    pub id: DbId,
    pub full_name: String,
    pub profession: String,
    pub bio: String,
    pub story: String,
    pub strengths: String,
    pub profile_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting the about-page content.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertAboutContent {
    pub full_name: String,
    pub profession: String,
    pub bio: String,
    pub story: String,
    pub strengths: String,
    pub profile_image: Option<String>,
}
