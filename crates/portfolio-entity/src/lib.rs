//! # portfolio-entity
//!
//! Domain models for the portfolio API. Records stored in the document
//! store have an input shape (`…In`, validated, localized fields as
//! per-language maps) and an output shape (`…Out`, localized fields
//! already resolved to a single string).

pub mod audit;
pub mod experience;
pub mod myinfo;
pub mod project;
pub mod skill;
pub mod user;
pub mod validation;
