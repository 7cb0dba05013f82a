//! Work experience.

pub mod service;

pub use service::ExperienceService;
