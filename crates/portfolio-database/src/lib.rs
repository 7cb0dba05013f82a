//! # portfolio-database
//!
//! Connection management and the concrete [`DocumentStore`] implementations
//! behind the portfolio services.
//!
//! [`DocumentStore`]: portfolio_core::traits::DocumentStore

pub mod connection;
pub mod migration;
pub mod store;

pub use connection::DatabasePool;
pub use store::{MemoryDocumentStore, PgDocumentStore, open_store};
