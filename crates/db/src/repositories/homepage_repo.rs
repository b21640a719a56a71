//! Repository for the `homepage_content` table (logical singleton, same
//! latest-row-wins rule as the about content).

use sqlx::PgPool;

use crate::models::homepage::{HomepageContent, UpsertHomepageContent};

const COLUMNS: &str = "id, hero_title, hero_subtitle, cv_url, created_at, updated_at";

/// Provides data access for the homepage hero content.
pub struct HomepageRepo;

impl HomepageRepo {
    /// Fetch the live homepage content (latest row), if any exists.
    pub async fn get(pool: &PgPool) -> Result<Option<HomepageContent>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM homepage_content ORDER BY created_at DESC LIMIT 1");
        sqlx::query_as::<_, HomepageContent>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the live row if one exists, otherwise insert the first row.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertHomepageContent,
    ) -> Result<HomepageContent, sqlx::Error> {
        if let Some(existing) = Self::get(pool).await? {
            let query = format!(
                "UPDATE homepage_content SET
                    hero_title = $2,
                    hero_subtitle = $3,
                    cv_url = $4
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, HomepageContent>(&query)
                .bind(existing.id)
                .bind(&input.hero_title)
                .bind(&input.hero_subtitle)
                .bind(&input.cv_url)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO homepage_content (hero_title, hero_subtitle, cv_url)
                 VALUES ($1, $2, $3)
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, HomepageContent>(&query)
                .bind(&input.hero_title)
                .bind(&input.hero_subtitle)
                .bind(&input.cv_url)
                .fetch_one(pool)
                .await
        }
    }
}
