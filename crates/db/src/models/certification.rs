//! Certification model and DTOs.

use folio_core::types::{DateOnly, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `certifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Certification {
    pub id: DbId,
    pub title: String,
    pub issuer: String,
    pub issue_date: DateOnly,
    pub expiry_date: Option<DateOnly>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a certification.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCertification {
    pub title: String,
    pub issuer: String,
    pub issue_date: DateOnly,
    pub expiry_date: Option<DateOnly>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for partially updating a certification.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCertification {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub issue_date: Option<DateOnly>,
    pub expiry_date: Option<DateOnly>,
    pub credential_id: Option<String>,
    pub credential_url: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub sort_order: Option<i32>,
}
