//! Schema for the document store.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{debug, info};

use portfolio_core::error::{AppError, ErrorKind};

/// Embedded migrations from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Latest schema version shipped with this build.
pub fn latest_schema_version() -> Option<i64> {
    MIGRATOR.iter().map(|m| m.version).max()
}

/// Bring the `documents` and `counters` tables up to the latest schema.
///
/// Returns the schema version now in place.
pub async fn run_migrations(pool: &PgPool) -> Result<Option<i64>, AppError> {
    for migration in MIGRATOR.iter() {
        debug!(version = migration.version, name = %migration.description, "Known migration");
    }

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Document schema migration failed: {e}"),
            e,
        )
    })?;

    let version = latest_schema_version();
    info!(schema_version = ?version, "Document schema up to date");
    Ok(version)
}
