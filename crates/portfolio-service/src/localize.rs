//! Turning stored documents into served representations.

use serde::de::DeserializeOwned;
use serde_json::Value;

use portfolio_core::result::AppResult;
use portfolio_i18n::TranslationResolver;

/// Resolve the localized `fields` of a stored document and deserialize it.
///
/// A missing translation aborts the whole conversion.
pub fn localize<T: DeserializeOwned>(
    resolver: &TranslationResolver,
    mut document: Value,
    lang: &str,
    fields: &[&str],
) -> AppResult<T> {
    resolver.apply_translation(&mut document, lang, fields)?;
    Ok(serde_json::from_value(document)?)
}

/// [`localize`] over a list of documents.
pub fn localize_all<T: DeserializeOwned>(
    resolver: &TranslationResolver,
    documents: Vec<Value>,
    lang: &str,
    fields: &[&str],
) -> AppResult<Vec<T>> {
    documents
        .into_iter()
        .map(|document| localize(resolver, document, lang, fields))
        .collect()
}
