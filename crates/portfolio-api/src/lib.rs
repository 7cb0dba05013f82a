//! # portfolio-api
//!
//! HTTP API layer for the portfolio built on Axum.
//!
//! Provides the REST endpoints, the middleware chain (audit, request
//! context, trailing-slash redirect, authorization guard, CORS), extractors,
//! DTOs and the response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
