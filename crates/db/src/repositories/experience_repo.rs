//! Repository for the `experiences` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::experience::{CreateExperience, Experience, UpdateExperience};

const COLUMNS: &str = "id, title, company, location, start_date, end_date, description, \
                       current, sort_order, image, created_at, updated_at";

/// Provides CRUD operations for work experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// List all experiences, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences ORDER BY created_at DESC");
        sqlx::query_as::<_, Experience>(&query).fetch_all(pool).await
    }

    /// Find an experience by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM experiences WHERE id = $1");
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new experience, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateExperience) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences
                (title, company, location, start_date, end_date, description, current,
                 sort_order, image)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(input.current)
            .bind(input.sort_order)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    /// Partially update an experience. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experiences SET
                title = COALESCE($2, title),
                company = COALESCE($3, company),
                location = COALESCE($4, location),
                start_date = COALESCE($5, start_date),
                end_date = COALESCE($6, end_date),
                description = COALESCE($7, description),
                current = COALESCE($8, current),
                sort_order = COALESCE($9, sort_order),
                image = COALESCE($10, image)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.location)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .bind(input.current)
            .bind(input.sort_order)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Delete an experience by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
