//! Resolution of a localized field to one language.

use serde_json::json;

use portfolio_core::error::{AppError, ErrorKind};
use portfolio_core::result::AppResult;
use portfolio_core::types::{SUPPORTED_LANGUAGES, Translations};

/// Resolve `mapping` to the value for `lang`, falling back to `default`.
///
/// Fails with [`ErrorKind::TranslationUnavailable`] when neither key is
/// present. The error details list the requested language, the languages
/// the mapping actually has, the supported set, the default language and
/// the default translation (always `null` here since it was missing too).
pub fn resolve(mapping: &Translations, lang: &str, default: &str) -> AppResult<String> {
    if let Some(value) = mapping.get(lang).or_else(|| mapping.get(default)) {
        return Ok(value.clone());
    }

    let available: Vec<&str> = mapping.keys().map(String::as_str).collect();
    Err(AppError::new(
        ErrorKind::TranslationUnavailable,
        format!("Translation not available for language '{lang}'"),
    )
    .with_details(json!({
        "requested_language": lang,
        "available_languages": available,
        "expected_available_languages": SUPPORTED_LANGUAGES,
        "default_language": default,
        "default_translation": mapping.get(default),
    })))
}
