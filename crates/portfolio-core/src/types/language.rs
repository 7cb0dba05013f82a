//! Supported languages and localized field values.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Every language code a localized field may be resolved to.
pub const SUPPORTED_LANGUAGES: [&str; 2] = ["en", "es"];

/// A per-language value map attached to a record's text attribute,
/// keyed by language code (e.g. `{"en": "Hello", "es": "Hola"}`).
pub type Translations = BTreeMap<String, String>;

/// A language a client may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Spanish.
    Es,
}

impl Language {
    /// Return the language as its lowercase code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(AppError::validation(format!(
                "Unsupported language: '{s}'. Expected one of: {}",
                SUPPORTED_LANGUAGES.join(", ")
            ))),
        }
    }
}
