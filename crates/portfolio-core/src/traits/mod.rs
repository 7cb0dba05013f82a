//! Core traits defined in `portfolio-core` and implemented by other crates.

pub mod store;

pub use store::{DocumentStore, SortBy, UpdateOutcome};
