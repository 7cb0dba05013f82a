//! Document store implementations.

pub mod filter;
pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

use std::sync::Arc;

use tracing::info;

use portfolio_core::config::{DatabaseConfig, StoreBackend};
use portfolio_core::result::AppResult;
use portfolio_core::traits::DocumentStore;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

/// Open the configured store, running migrations for PostgreSQL.
pub async fn open_store(config: &DatabaseConfig) -> AppResult<Arc<dyn DocumentStore>> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory document store; content is lost on restart");
            Ok(Arc::new(MemoryDocumentStore::new()))
        }
        StoreBackend::Postgres => {
            let db = DatabasePool::connect(config).await?;
            run_migrations(db.pool()).await?;
            Ok(Arc::new(PgDocumentStore::new(db.pool().clone())))
        }
    }
}
