//! Shared plumbing for the operational command-line tools.
//!
//! Each binary (`folio-seed`, `folio-migrate-data`, `folio-reset-admin`)
//! loads `.env`, initializes tracing, and connects to the database the same
//! way; this crate holds that common setup.

use anyhow::Context;

/// Initialize `.env` loading and tracing for a CLI binary.
///
/// `default_filter` is used when `RUST_LOG` is not set, e.g. `"folio_cli=info"`.
pub fn init(default_filter: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Read a required environment variable, with a useful error message.
pub fn require_env(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("{name} environment variable is required"))
}

/// Connect to the database named by `env_var` and verify connectivity.
pub async fn connect(env_var: &str) -> anyhow::Result<folio_db::DbPool> {
    let url = require_env(env_var)?;
    let pool = folio_db::create_pool(&url)
        .await
        .with_context(|| format!("failed to connect to database from {env_var}"))?;
    folio_db::health_check(&pool)
        .await
        .with_context(|| format!("database from {env_var} failed health check"))?;
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_env_missing() {
        let err = require_env("FOLIO_DEFINITELY_UNSET_VAR").unwrap_err();
        assert!(err.to_string().contains("FOLIO_DEFINITELY_UNSET_VAR"));
    }
}
