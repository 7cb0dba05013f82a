//! # portfolio-core
//!
//! Core crate for the portfolio API. Contains configuration schemas, the
//! unified error system, the task-scoped request context, the document
//! store trait, and shared language types.
//!
//! This crate has **no** internal dependencies on other portfolio crates.

pub mod config;
pub mod context;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
