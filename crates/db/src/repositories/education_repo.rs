//! Repository for the `education` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::education::{CreateEducation, Education, UpdateEducation};

const COLUMNS: &str = "id, degree, institution, location, start_date, end_date, current, \
                       gpa, description, sort_order, created_at, updated_at";

/// Provides CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// List all education entries, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education ORDER BY created_at DESC");
        sqlx::query_as::<_, Education>(&query).fetch_all(pool).await
    }

    /// Find an education entry by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Education>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM education WHERE id = $1");
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new education entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO education
                (degree, institution, location, start_date, end_date, current, gpa,
                 description, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.current)
            .bind(&input.gpa)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Partially update an education entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE education SET
                degree = COALESCE($2, degree),
                institution = COALESCE($3, institution),
                location = COALESCE($4, location),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                current = COALESCE($7, current),
                gpa = COALESCE($8, gpa),
                description = COALESCE($9, description),
                sort_order = COALESCE($10, sort_order)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(&input.degree)
            .bind(&input.institution)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.current)
            .bind(&input.gpa)
            .bind(&input.description)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete an education entry by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
