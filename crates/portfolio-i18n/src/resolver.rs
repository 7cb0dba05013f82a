//! Memoizing translation resolver.

use moka::sync::Cache;
use serde_json::{Map, Value};

use portfolio_core::config::I18nConfig;
use portfolio_core::result::AppResult;
use portfolio_core::types::Translations;

use crate::resolve::resolve;

/// Cache key: the mapping itself plus both languages.
///
/// Keying by value means an edited record produces a new key, so a cached
/// result can never outlive the content it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ResolveKey {
    mapping: Translations,
    lang: String,
    default: String,
}

/// Resolves localized fields with a bounded LRU cache of successful results.
#[derive(Clone)]
pub struct TranslationResolver {
    /// Memoized successful resolutions.
    cache: Cache<ResolveKey, String>,
    /// Default language code.
    default_language: String,
}

impl std::fmt::Debug for TranslationResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranslationResolver")
            .field("default_language", &self.default_language)
            .field("cached", &self.cache.entry_count())
            .finish()
    }
}

impl TranslationResolver {
    /// Create a resolver from localization configuration.
    pub fn new(config: &I18nConfig) -> Self {
        Self {
            cache: Cache::builder().max_capacity(config.cache_capacity).build(),
            default_language: config.default_language.as_str().to_string(),
        }
    }

    /// The configured default language code.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Resolve `mapping` for `lang`, falling back to `default`.
    ///
    /// Failures are not cached.
    pub fn resolve(&self, mapping: &Translations, lang: &str, default: &str) -> AppResult<String> {
        let key = ResolveKey {
            mapping: mapping.clone(),
            lang: lang.to_string(),
            default: default.to_string(),
        };
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let value = resolve(mapping, lang, default)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Replace each named localized field of `record` with its resolution.
    ///
    /// A field is localized when it is a non-empty JSON object whose values
    /// are all strings. Other fields, missing fields and non-object records
    /// are left untouched. Returns the resolved value of every field that
    /// was rewritten.
    pub fn apply_translation(
        &self,
        record: &mut Value,
        lang: &str,
        fields: &[&str],
    ) -> AppResult<Map<String, Value>> {
        let mut applied = Map::new();
        let Some(object) = record.as_object_mut() else {
            return Ok(applied);
        };

        for field in fields {
            let Some(mapping) = object.get(*field).and_then(as_translations) else {
                continue;
            };
            let resolved = self.resolve(&mapping, lang, &self.default_language)?;
            tracing::trace!(field = %field, lang = %lang, "Resolved localized field");
            object.insert(field.to_string(), Value::String(resolved.clone()));
            applied.insert(field.to_string(), Value::String(resolved));
        }

        Ok(applied)
    }

    /// Number of memoized entries (approximate, for diagnostics).
    pub fn cached_entries(&self) -> u64 {
        self.cache.run_pending_tasks();
        self.cache.entry_count()
    }
}

/// Interpret a JSON value as a localized field.
fn as_translations(value: &Value) -> Option<Translations> {
    let object = value.as_object()?;
    if object.is_empty() {
        return None;
    }
    object
        .iter()
        .map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
        .collect()
}
