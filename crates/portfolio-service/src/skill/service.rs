//! Skill CRUD keyed by skill name.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::info;

use portfolio_core::error::AppError;
use portfolio_core::result::AppResult;
use portfolio_core::traits::DocumentStore;
use portfolio_entity::skill::{SkillIn, SkillOut, SkillPatch};
use portfolio_i18n::TranslationResolver;

use crate::localize::{localize, localize_all};
use crate::validation::validate_input;

const COLLECTION: &str = "skills";
const LOCALIZED: &[&str] = &["description"];

/// Manages skills.
#[derive(Debug, Clone)]
pub struct SkillService {
    store: Arc<dyn DocumentStore>,
    resolver: Arc<TranslationResolver>,
}

impl SkillService {
    /// Creates a new skill service.
    pub fn new(store: Arc<dyn DocumentStore>, resolver: Arc<TranslationResolver>) -> Self {
        Self { store, resolver }
    }

    /// Every skill, resolved for `lang`.
    pub async fn list(&self, lang: &str) -> AppResult<Vec<SkillOut>> {
        let documents = self.store.find_many(COLLECTION, &json!({}), None).await?;
        localize_all(&self.resolver, documents, lang, LOCALIZED)
    }

    /// One skill, resolved for `lang`.
    pub async fn get(&self, name: &str, lang: &str) -> AppResult<SkillOut> {
        let document = self
            .store
            .find_one(COLLECTION, &name_filter(name))
            .await?
            .ok_or_else(|| skill_not_found(name))?;
        localize(&self.resolver, document, lang, LOCALIZED)
    }

    /// Add a skill. Names are unique.
    pub async fn create(&self, input: SkillIn) -> AppResult<SkillIn> {
        validate_input(&input)?;
        self.ensure_free(&input.name).await?;
        self.store
            .insert_one(COLLECTION, serde_json::to_value(&input)?)
            .await?;
        info!(skill = %input.name, "Skill created");
        Ok(input)
    }

    /// Replace a skill entirely. The name may change if the new one is free.
    pub async fn replace(&self, name: &str, input: SkillIn) -> AppResult<SkillIn> {
        validate_input(&input)?;
        if input.name != name {
            self.ensure_free(&input.name).await?;
        }
        let replaced = self
            .store
            .replace_one(COLLECTION, &name_filter(name), serde_json::to_value(&input)?)
            .await?;
        if !replaced {
            return Err(skill_not_found(name));
        }
        info!(skill = %name, "Skill replaced");
        Ok(input)
    }

    /// Set the fields present in `patch`.
    pub async fn patch(&self, name: &str, patch: SkillPatch) -> AppResult<Vec<String>> {
        if patch.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }
        validate_input(&patch)?;
        let set = patch.into_set();
        let fields: Vec<String> = set.keys().cloned().collect();

        let outcome = self
            .store
            .update_one(COLLECTION, &name_filter(name), set, &[], false)
            .await?;
        if outcome.matched == 0 {
            return Err(skill_not_found(name));
        }
        info!(skill = %name, ?fields, "Skill patched");
        Ok(fields)
    }

    /// Remove a skill.
    pub async fn delete(&self, name: &str) -> AppResult<()> {
        if self.store.delete_one(COLLECTION, &name_filter(name)).await? == 0 {
            return Err(skill_not_found(name));
        }
        info!(skill = %name, "Skill deleted");
        Ok(())
    }

    async fn ensure_free(&self, name: &str) -> AppResult<()> {
        if self.store.count(COLLECTION, &name_filter(name)).await? > 0 {
            return Err(
                AppError::conflict(format!("Skill '{name}' already exists")).with_code("SKILL_EXISTS")
            );
        }
        Ok(())
    }
}

fn name_filter(name: &str) -> Value {
    json!({ "name": name })
}

fn skill_not_found(name: &str) -> AppError {
    AppError::validation(format!("Skill '{name}' not found")).with_code("SKILL_NOT_FOUND")
}
