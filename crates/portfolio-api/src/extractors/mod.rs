//! Custom Axum extractors.

pub mod body;
pub mod query;

pub use body::{JsonBody, LoginBody};
pub use query::{Confirm, Lang};
