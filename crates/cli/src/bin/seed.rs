//! `folio-seed` -- create the admin account for a fresh deployment.
//!
//! Runs migrations, then creates the admin user from environment variables
//! if no user with that email exists yet. Safe to run repeatedly.
//!
//! # Environment variables
//!
//! | Variable         | Required | Default   | Description                  |
//! |------------------|----------|-----------|------------------------------|
//! | `DATABASE_URL`   | yes      | --        | Postgres connection string   |
//! | `ADMIN_EMAIL`    | yes      | --        | Email for the admin account  |
//! | `ADMIN_PASSWORD` | yes      | --        | Password for the admin       |
//! | `ADMIN_NAME`     | no       | `Admin`   | Display name                 |

use anyhow::{bail, Context};
use folio_api::auth::password::{hash_password, validate_password_strength};
use folio_core::roles::ROLE_ADMIN;
use folio_db::models::user::CreateUser;
use folio_db::repositories::UserRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    folio_cli::init("folio_cli=info,folio_seed=info");

    let email = folio_cli::require_env("ADMIN_EMAIL")?;
    let password = folio_cli::require_env("ADMIN_PASSWORD")?;
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| "Admin".into());

    if let Err(msg) = validate_password_strength(&password) {
        bail!("ADMIN_PASSWORD rejected: {msg}");
    }

    let pool = folio_cli::connect("DATABASE_URL").await?;

    folio_db::run_migrations(&pool)
        .await
        .context("failed to run migrations")?;
    tracing::info!("Migrations applied");

    if let Some(existing) = UserRepo::find_by_email(&pool, &email).await? {
        tracing::info!(user_id = existing.id, email = %email, "Admin already exists, nothing to do");
        return Ok(());
    }

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    let user = UserRepo::create(
        &pool,
        &CreateUser {
            email,
            name,
            password_hash,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await
    .context("failed to create admin user")?;

    tracing::info!(user_id = user.id, email = %user.email, "Admin account created");
    Ok(())
}
