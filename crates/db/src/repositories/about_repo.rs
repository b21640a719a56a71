//! Repository for the `about_content` table.
//!
//! The about page is a logical singleton: reads return the most recently
//! created row, and the upsert updates that row in place (or inserts the
//! first one).

use sqlx::PgPool;

use crate::models::about::{AboutContent, UpsertAboutContent};

const COLUMNS: &str = "id, full_name, profession, bio, story, strengths, profile_image, \
                       created_at, updated_at";

/// Provides data access for the about-page content.
pub struct AboutRepo;

impl AboutRepo {
    /// Fetch the live about content (latest row), if any exists.
    pub async fn get(pool: &PgPool) -> Result<Option<AboutContent>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM about_content ORDER BY created_at DESC LIMIT 1");
        sqlx::query_as::<_, AboutContent>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the live row if one exists, otherwise insert the first row.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        if let Some(existing) = Self::get(pool).await? {
            let query = format!(
                "UPDATE about_content SET
                    full_name = $2,
                    profession = $3,
                    bio = $4,
                    story = $5,
                    strengths = $6,
                    profile_image = $7
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, AboutContent>(&query)
                .bind(existing.id)
                .bind(&input.full_name)
                .bind(&input.profession)
                .bind(&input.bio)
                .bind(&input.story)
                .bind(&input.strengths)
                .bind(&input.profile_image)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO about_content
                    (full_name, profession, bio, story, strengths, profile_image)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, AboutContent>(&query)
                .bind(&input.full_name)
                .bind(&input.profession)
                .bind(&input.bio)
                .bind(&input.story)
                .bind(&input.strengths)
                .bind(&input.profile_image)
                .fetch_one(pool)
                .await
        }
    }
}
