//! Skill model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use portfolio_core::types::Translations;

use crate::validation::validate_translations;

/// A skill as written by a maintainer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillIn {
    /// Skill name; unique, used as the lookup key.
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    /// Years of experience.
    pub experience: u32,
    /// Description per language.
    #[validate(custom(function = "validate_translations"))]
    pub description: Translations,
    /// Icon URL or path.
    pub icon_source: String,
    /// Short code sample.
    pub code_example: String,
}

/// A skill as served, with `description` resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillOut {
    pub name: String,
    pub experience: u32,
    pub description: String,
    pub icon_source: String,
    pub code_example: String,
}

/// Partial skill update; only present fields are written.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SkillPatch {
    /// Years of experience.
    #[serde(default)]
    pub experience: Option<u32>,
    /// Description per language.
    #[serde(default)]
    #[validate(custom(function = "validate_translations"))]
    pub description: Option<Translations>,
    /// Icon URL or path.
    #[serde(default)]
    pub icon_source: Option<String>,
    /// Short code sample.
    #[serde(default)]
    pub code_example: Option<String>,
}

impl SkillPatch {
    /// Whether the patch sets nothing.
    pub fn is_empty(&self) -> bool {
        self.experience.is_none()
            && self.description.is_none()
            && self.icon_source.is_none()
            && self.code_example.is_none()
    }

    /// The fields to `$set`, skipping absent ones.
    pub fn into_set(self) -> Map<String, Value> {
        let mut set = Map::new();
        if let Some(v) = self.experience {
            set.insert("experience".into(), Value::from(v));
        }
        if let Some(v) = self.description {
            set.insert(
                "description".into(),
                Value::Object(v.into_iter().map(|(k, v)| (k, Value::String(v))).collect()),
            );
        }
        if let Some(v) = self.icon_source {
            set.insert("icon_source".into(), Value::String(v));
        }
        if let Some(v) = self.code_example {
            set.insert("code_example".into(), Value::String(v));
        }
        set
    }
}
