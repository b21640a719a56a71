//! Education history model and DTOs.

use folio_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `education` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_date: DateOnly,
    pub end_date: Option<DateOnly>,
    pub current: bool,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducation {
    pub degree: String,
    pub institution: String,
    pub location: Option<String>,
    pub start_date: DateOnly,
    pub end_date: Option<DateOnly>,
    #[serde(default)]
    pub current: bool,
    pub gpa: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for partially updating an education entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEducation {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<DateOnly>,
    pub end_date: Option<DateOnly>,
    pub current: Option<bool>,
    pub gpa: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
