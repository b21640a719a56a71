//! Repository for the `certifications` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::certification::{Certification, CreateCertification, UpdateCertification};

const COLUMNS: &str = "id, title, issuer, issue_date, expiry_date, credential_id, \
                       credential_url, image, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for certifications.
pub struct CertificationRepo;

impl CertificationRepo {
    /// List all certifications, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Certification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certifications ORDER BY created_at DESC");
        sqlx::query_as::<_, Certification>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a certification by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM certifications WHERE id = $1");
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new certification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCertification,
    ) -> Result<Certification, sqlx::Error> {
        let query = format!(
            "INSERT INTO certifications
                (title, issuer, issue_date, expiry_date, credential_id, credential_url,
                 image, description, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(&input.title)
            .bind(&input.issuer)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.credential_id)
            .bind(&input.credential_url)
            .bind(&input.image)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update a certification. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCertification,
    ) -> Result<Option<Certification>, sqlx::Error> {
        let query = format!(
            "UPDATE certifications SET
                title = COALESCE($2, title),
                issuer = COALESCE($3, issuer),
                issue_date = COALESCE($4, issue_date),
                expiry_date = COALESCE($5, expiry_date),
                credential_id = COALESCE($6, credential_id),
                credential_url = COALESCE($7, credential_url),
                image = COALESCE($8, image),
                description = COALESCE($9, description),
                sort_order = COALESCE($10, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Certification>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.issuer)
            .bind(input.issue_date)
            .bind(input.expiry_date)
            .bind(&input.credential_id)
            .bind(&input.credential_url)
            .bind(&input.image)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a certification by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
