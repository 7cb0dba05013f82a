//! Projects.

pub mod service;

pub use service::{ProjectService, WriteOutcome};
