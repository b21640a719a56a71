//! `folio-reset-admin` -- reset an admin account's password.
//!
//! For when the site owner locks themselves out. Finds the user by email and
//! replaces their password hash.
//!
//! # Environment variables
//!
//! | Variable         | Required | Description                          |
//! |------------------|----------|--------------------------------------|
//! | `DATABASE_URL`   | yes      | Postgres connection string           |
//! | `ADMIN_EMAIL`    | yes      | Email of the account to reset        |
//! | `ADMIN_PASSWORD` | yes      | New password                         |

use anyhow::bail;
use folio_api::auth::password::{hash_password, validate_password_strength};
use folio_db::repositories::UserRepo;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    folio_cli::init("folio_cli=info,folio_reset_admin=info");

    let email = folio_cli::require_env("ADMIN_EMAIL")?;
    let password = folio_cli::require_env("ADMIN_PASSWORD")?;

    if let Err(msg) = validate_password_strength(&password) {
        bail!("ADMIN_PASSWORD rejected: {msg}");
    }

    let pool = folio_cli::connect("DATABASE_URL").await?;

    let user = match UserRepo::find_by_email(&pool, &email).await? {
        Some(user) => user,
        None => bail!("no user with email {email}"),
    };

    let password_hash =
        hash_password(&password).map_err(|e| anyhow::anyhow!("password hashing failed: {e}"))?;

    if !UserRepo::set_password_hash(&pool, user.id, &password_hash).await? {
        bail!("failed to update password for user {}", user.id);
    }

    tracing::info!(user_id = user.id, email = %user.email, "Password reset");
    Ok(())
}
