//! Core type definitions used across the portfolio workspace.

pub mod language;

pub use language::{Language, SUPPORTED_LANGUAGES, Translations};
