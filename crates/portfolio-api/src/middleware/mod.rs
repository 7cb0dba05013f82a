//! Axum middleware stack.

pub mod audit;
pub mod compression;
pub mod context;
pub mod cors;
pub mod guard;
pub mod slash;
