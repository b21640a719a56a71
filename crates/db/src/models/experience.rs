//! Work experience model and DTOs.

use folio_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: DateOnly,
    pub end_date: Option<DateOnly>,
    pub description: String,
    pub current: bool,
    pub sort_order: i32,
    pub image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an experience entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub start_date: DateOnly,
    pub end_date: Option<DateOnly>,
    pub description: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub sort_order: i32,
    pub image: Option<String>,
}

/// DTO for partially updating an experience entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExperience {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateOnly>,
    pub end_date: Option<DateOnly>,
    pub description: Option<String>,
    pub current: Option<bool>,
    pub sort_order: Option<i32>,
    pub image: Option<String>,
}
