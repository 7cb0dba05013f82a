//! Shared field validators.

use std::borrow::Cow;

use validator::ValidationError;

use portfolio_core::types::{SUPPORTED_LANGUAGES, Translations};

/// A localized field must carry at least one supported language.
pub fn validate_translations(value: &Translations) -> Result<(), ValidationError> {
    if value.keys().any(|k| SUPPORTED_LANGUAGES.contains(&k.as_str())) {
        return Ok(());
    }
    let mut err = ValidationError::new("translations");
    err.message = Some(Cow::Owned(format!(
        "must contain at least one of: {}",
        SUPPORTED_LANGUAGES.join(", ")
    )));
    Err(err)
}
