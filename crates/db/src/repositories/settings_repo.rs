//! Repository for the `site_settings` table (singleton upsert).

use sqlx::PgPool;

use crate::models::settings::{SiteSettings, UpsertSiteSettings};

const COLUMNS: &str = "id, footer_url, email, phone, location, github_url, linkedin_url, \
                       twitter_url, created_at, updated_at";

/// Provides data access for site-wide settings.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row, if one exists.
    pub async fn get(pool: &PgPool) -> Result<Option<SiteSettings>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings LIMIT 1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Replace the settings row if one exists, otherwise insert it.
    ///
    /// A PUT replaces the whole record: absent optional fields become NULL.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpsertSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        if let Some(existing) = Self::get(pool).await? {
            let query = format!(
                "UPDATE site_settings SET
                    footer_url = $2,
                    email = $3,
                    phone = $4,
                    location = $5,
                    github_url = $6,
                    linkedin_url = $7,
                    twitter_url = $8
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, SiteSettings>(&query)
                .bind(existing.id)
                .bind(&input.footer_url)
                .bind(&input.email)
                .bind(&input.phone)
                .bind(&input.location)
                .bind(&input.github_url)
                .bind(&input.linkedin_url)
                .bind(&input.twitter_url)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO site_settings
                    (footer_url, email, phone, location, github_url, linkedin_url, twitter_url)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, SiteSettings>(&query)
                .bind(&input.footer_url)
                .bind(&input.email)
                .bind(&input.phone)
                .bind(&input.location)
                .bind(&input.github_url)
                .bind(&input.linkedin_url)
                .bind(&input.twitter_url)
                .fetch_one(pool)
                .await
        }
    }
}
