//! # portfolio-i18n
//!
//! Resolves localized fields (per-language value maps) down to a single
//! string for the requested language, falling back to a default language.
//!
//! ## Modules
//!
//! - `resolve`: the pure resolution rule and its failure payload
//! - `resolver`: [`TranslationResolver`], a memoizing front for `resolve`
//!   that also rewrites localized fields of whole records

pub mod resolve;
pub mod resolver;

pub use resolve::resolve;
pub use resolver::TranslationResolver;
