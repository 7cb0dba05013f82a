//! Pool backing the PostgreSQL document store.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use portfolio_core::config::DatabaseConfig;
use portfolio_core::error::{AppError, ErrorKind};

/// Shown as `application_name` in `pg_stat_activity`.
const APPLICATION_NAME: &str = "portfolio-server";

/// Connections to the database holding the `documents` table.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Open a pool sized from `config`.
    ///
    /// A malformed URL is a configuration error; an unreachable server is a
    /// database error. Neither message contains the password.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let target = redact_url(&config.url);
        let options = PgConnectOptions::from_str(&config.url)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Invalid document database URL '{target}'"),
                    e,
                )
            })?
            .application_name(APPLICATION_NAME);

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Document database at '{target}' is unreachable"),
                    e,
                )
            })?;

        info!(
            url = %target,
            pool = config.max_connections,
            "Document database connected"
        );
        Ok(Self { pool })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Stored document count per collection, ordered by collection name.
    pub async fn collection_sizes(&self) -> Result<Vec<(String, i64)>, AppError> {
        sqlx::query_as::<_, (String, i64)>(
            "SELECT collection, COUNT(*) FROM documents GROUP BY collection ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count documents", e))
    }
}

/// Replace the password in a connection URL with `****`.
fn redact_url(url: &str) -> String {
    let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
    match url.rfind('@') {
        Some(at) if at > scheme_end => match url[scheme_end..at].find(':') {
            Some(colon) => {
                let colon = scheme_end + colon;
                format!("{}:****{}", &url[..colon], &url[at..])
            }
            None => url.to_string(),
        },
        _ => url.to_string(),
    }
}
