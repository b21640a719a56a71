//! Skill model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `skills` table. `level` is a 0-100 proficiency value.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub level: i32,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkill {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for partially updating a skill.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSkill {
    pub name: Option<String>,
    pub category: Option<String>,
    pub level: Option<i32>,
    pub sort_order: Option<i32>,
}
