//! # portfolio-service
//!
//! Business logic for the portfolio API. Each resource service reads and
//! writes through a shared [`DocumentStore`] and resolves localized fields
//! with the [`TranslationResolver`]; the audit module records one entry per
//! completed request through a single background writer.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.
//!
//! [`DocumentStore`]: portfolio_core::traits::DocumentStore
//! [`TranslationResolver`]: portfolio_i18n::TranslationResolver

pub mod audit;
pub mod experience;
pub mod localize;
pub mod myinfo;
pub mod project;
pub mod skill;
pub mod validation;

pub use audit::{AuditRecorder, AuditSink};
pub use experience::ExperienceService;
pub use myinfo::MyInfoService;
pub use project::ProjectService;
pub use skill::SkillService;
