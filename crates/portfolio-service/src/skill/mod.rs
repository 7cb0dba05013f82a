//! Skills.

pub mod service;

pub use service::SkillService;
