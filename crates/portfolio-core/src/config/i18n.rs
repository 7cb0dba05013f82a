//! Localization configuration.

use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Translation resolver configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// Language used when the requested one is missing from a field.
    #[serde(default)]
    pub default_language: Language,
    /// Maximum number of memoized resolutions.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

fn default_cache_capacity() -> u64 {
    48
}
