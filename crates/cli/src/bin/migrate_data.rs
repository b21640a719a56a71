//! `folio-migrate-data` -- copy portfolio content between databases.
//!
//! Reads every content table from `SOURCE_DATABASE_URL` and inserts the rows
//! into `DATABASE_URL`, preserving ids so cross-references in stored URLs and
//! admin bookmarks keep working. The target must be freshly migrated and
//! empty; the copy aborts on the first failure so a partial import is obvious
//! from the logs.
//!
//! # Environment variables
//!
//! | Variable              | Required | Description                     |
//! |-----------------------|----------|---------------------------------|
//! | `SOURCE_DATABASE_URL` | yes      | Postgres to copy from           |
//! | `DATABASE_URL`        | yes      | Postgres to copy into           |

use anyhow::Context;
use folio_db::models::about::AboutContent;
use folio_db::models::certification::Certification;
use folio_db::models::contact::ContactMessage;
use folio_db::models::education::Education;
use folio_db::models::experience::Experience;
use folio_db::models::gallery::GalleryItem;
use folio_db::models::homepage::HomepageContent;
use folio_db::models::settings::SiteSettings;
use folio_db::models::skill::Skill;
use folio_db::models::user::User;
use folio_db::DbPool;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    folio_cli::init("folio_cli=info,folio_migrate_data=info");

    let source = folio_cli::connect("SOURCE_DATABASE_URL").await?;
    let target = folio_cli::connect("DATABASE_URL").await?;

    folio_db::run_migrations(&target)
        .await
        .context("failed to migrate target database")?;

    copy_users(&source, &target).await?;
    copy_about(&source, &target).await?;
    copy_homepage(&source, &target).await?;
    copy_experiences(&source, &target).await?;
    copy_education(&source, &target).await?;
    copy_certifications(&source, &target).await?;
    copy_skills(&source, &target).await?;
    copy_gallery(&source, &target).await?;
    copy_settings(&source, &target).await?;
    copy_contact_messages(&source, &target).await?;

    fix_sequences(&target).await?;

    tracing::info!("Data migration complete");
    Ok(())
}

async fn copy_users(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<User> = sqlx::query_as(
        "SELECT id, email, name, password_hash, role, created_at, updated_at FROM users",
    )
    .fetch_all(source)
    .await
    .context("reading users")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO users (id, email, name, password_hash, role, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(row.id)
        .bind(&row.email)
        .bind(&row.name)
        .bind(&row.password_hash)
        .bind(&row.role)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting user {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied users");
    Ok(())
}

async fn copy_about(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<AboutContent> = sqlx::query_as(
        "SELECT id, full_name, profession, bio, story, strengths, profile_image,
                created_at, updated_at
         FROM about_content",
    )
    .fetch_all(source)
    .await
    .context("reading about_content")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO about_content
                (id, full_name, profession, bio, story, strengths, profile_image,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(row.id)
        .bind(&row.full_name)
        .bind(&row.profession)
        .bind(&row.bio)
        .bind(&row.story)
        .bind(&row.strengths)
        .bind(&row.profile_image)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting about_content {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied about_content");
    Ok(())
}

async fn copy_homepage(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<HomepageContent> = sqlx::query_as(
        "SELECT id, hero_title, hero_subtitle, cv_url, created_at, updated_at
         FROM homepage_content",
    )
    .fetch_all(source)
    .await
    .context("reading homepage_content")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO homepage_content
                (id, hero_title, hero_subtitle, cv_url, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(row.id)
        .bind(&row.hero_title)
        .bind(&row.hero_subtitle)
        .bind(&row.cv_url)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting homepage_content {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied homepage_content");
    Ok(())
}

async fn copy_experiences(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<Experience> = sqlx::query_as(
        "SELECT id, title, company, location, start_date, end_date, description, current,
                sort_order, image, created_at, updated_at
         FROM experiences",
    )
    .fetch_all(source)
    .await
    .context("reading experiences")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO experiences
                (id, title, company, location, start_date, end_date, description, current,
                 sort_order, image, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.company)
        .bind(&row.location)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(&row.description)
        .bind(row.current)
        .bind(row.sort_order)
        .bind(&row.image)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting experience {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied experiences");
    Ok(())
}

async fn copy_education(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<Education> = sqlx::query_as(
        "SELECT id, degree, institution, location, start_date, end_date, current, gpa,
                description, sort_order, created_at, updated_at
         FROM education",
    )
    .fetch_all(source)
    .await
    .context("reading education")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO education
                (id, degree, institution, location, start_date, end_date, current, gpa,
                 description, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(row.id)
        .bind(&row.degree)
        .bind(&row.institution)
        .bind(&row.location)
        .bind(row.start_date)
        .bind(row.end_date)
        .bind(row.current)
        .bind(&row.gpa)
        .bind(&row.description)
        .bind(row.sort_order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting education {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied education");
    Ok(())
}

async fn copy_certifications(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<Certification> = sqlx::query_as(
        "SELECT id, title, issuer, issue_date, expiry_date, credential_id, credential_url,
                image, description, sort_order, created_at, updated_at
         FROM certifications",
    )
    .fetch_all(source)
    .await
    .context("reading certifications")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO certifications
                (id, title, issuer, issue_date, expiry_date, credential_id, credential_url,
                 image, description, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.issuer)
        .bind(row.issue_date)
        .bind(row.expiry_date)
        .bind(&row.credential_id)
        .bind(&row.credential_url)
        .bind(&row.image)
        .bind(&row.description)
        .bind(row.sort_order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting certification {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied certifications");
    Ok(())
}

async fn copy_skills(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<Skill> = sqlx::query_as(
        "SELECT id, name, category, level, sort_order, created_at, updated_at FROM skills",
    )
    .fetch_all(source)
    .await
    .context("reading skills")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO skills (id, name, category, level, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.category)
        .bind(row.level)
        .bind(row.sort_order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting skill {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied skills");
    Ok(())
}

async fn copy_gallery(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<GalleryItem> = sqlx::query_as(
        "SELECT id, title, description, image_url, category, sort_order, created_at, updated_at
         FROM gallery_items",
    )
    .fetch_all(source)
    .await
    .context("reading gallery_items")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO gallery_items
                (id, title, description, image_url, category, sort_order, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(row.id)
        .bind(&row.title)
        .bind(&row.description)
        .bind(&row.image_url)
        .bind(&row.category)
        .bind(row.sort_order)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting gallery item {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied gallery_items");
    Ok(())
}

async fn copy_settings(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<SiteSettings> = sqlx::query_as(
        "SELECT id, footer_url, email, phone, location, github_url, linkedin_url, twitter_url,
                created_at, updated_at
         FROM site_settings",
    )
    .fetch_all(source)
    .await
    .context("reading site_settings")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO site_settings
                (id, footer_url, email, phone, location, github_url, linkedin_url, twitter_url,
                 created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(row.id)
        .bind(&row.footer_url)
        .bind(&row.email)
        .bind(&row.phone)
        .bind(&row.location)
        .bind(&row.github_url)
        .bind(&row.linkedin_url)
        .bind(&row.twitter_url)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting site_settings {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied site_settings");
    Ok(())
}

async fn copy_contact_messages(source: &DbPool, target: &DbPool) -> anyhow::Result<()> {
    let rows: Vec<ContactMessage> = sqlx::query_as(
        "SELECT id, name, email, subject, message, is_read, created_at, updated_at
         FROM contact_messages",
    )
    .fetch_all(source)
    .await
    .context("reading contact_messages")?;

    for row in &rows {
        sqlx::query(
            "INSERT INTO contact_messages
                (id, name, email, subject, message, is_read, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.email)
        .bind(&row.subject)
        .bind(&row.message)
        .bind(row.is_read)
        .bind(row.created_at)
        .bind(row.updated_at)
        .execute(target)
        .await
        .with_context(|| format!("inserting contact message {}", row.id))?;
    }

    tracing::info!(count = rows.len(), "Copied contact_messages");
    Ok(())
}

/// Advance each table's id sequence past the copied ids so future inserts
/// don't collide.
async fn fix_sequences(target: &DbPool) -> anyhow::Result<()> {
    const TABLES: &[&str] = &[
        "users",
        "about_content",
        "homepage_content",
        "experiences",
        "education",
        "certifications",
        "skills",
        "gallery_items",
        "site_settings",
        "contact_messages",
    ];

    for table in TABLES {
        let query = format!(
            "SELECT setval(pg_get_serial_sequence('{table}', 'id'),
                    COALESCE((SELECT MAX(id) FROM {table}), 0) + 1, false)"
        );
        sqlx::query(&query)
            .execute(target)
            .await
            .with_context(|| format!("resetting sequence for {table}"))?;
    }

    tracing::info!("Sequences advanced past copied ids");
    Ok(())
}
