//! Work experience entries, looked up by company name.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use portfolio_core::error::AppError;
use portfolio_core::result::AppResult;
use portfolio_core::traits::DocumentStore;
use portfolio_entity::experience::{ExperienceCreated, ExperienceIn, ExperienceOut};
use portfolio_i18n::TranslationResolver;

use crate::localize::localize_all;
use crate::validation::validate_input;

const COLLECTION: &str = "experiences";
const LOCALIZED: &[&str] = &["description"];

/// Manages work experience entries.
#[derive(Debug, Clone)]
pub struct ExperienceService {
    store: Arc<dyn DocumentStore>,
    resolver: Arc<TranslationResolver>,
}

impl ExperienceService {
    /// Creates a new experience service.
    pub fn new(store: Arc<dyn DocumentStore>, resolver: Arc<TranslationResolver>) -> Self {
        Self { store, resolver }
    }

    /// Every experience, resolved for `lang`.
    pub async fn list(&self, lang: &str) -> AppResult<Vec<ExperienceOut>> {
        let documents = self.store.find_many(COLLECTION, &json!({}), None).await?;
        localize_all(&self.resolver, documents, lang, LOCALIZED)
    }

    /// Experiences at `company`, resolved for `lang`.
    pub async fn by_company(&self, company: &str, lang: &str) -> AppResult<Vec<ExperienceOut>> {
        let documents = self
            .store
            .find_many(COLLECTION, &company_filter(company), None)
            .await?;
        if documents.is_empty() {
            return Err(company_not_found(company));
        }
        localize_all(&self.resolver, documents, lang, LOCALIZED)
    }

    /// Store a new experience.
    pub async fn create(&self, input: ExperienceIn) -> AppResult<ExperienceCreated> {
        validate_input(&input)?;
        let created = ExperienceCreated::from(&input);
        self.store
            .insert_one(COLLECTION, serde_json::to_value(&input)?)
            .await?;
        info!(company = %input.company.name, role = %input.role, "Experience created");
        Ok(created)
    }

    /// Delete every experience. Requires explicit confirmation.
    pub async fn delete_all(&self, confirm: bool) -> AppResult<u64> {
        if !confirm {
            return Err(confirm_required());
        }
        let deleted = self.store.delete_many(COLLECTION, &json!({})).await?;
        info!(deleted, "All experiences deleted");
        Ok(deleted)
    }

    /// Delete the experiences at `company`.
    pub async fn delete_company(&self, company: &str) -> AppResult<u64> {
        let deleted = self
            .store
            .delete_many(COLLECTION, &company_filter(company))
            .await?;
        if deleted == 0 {
            return Err(company_not_found(company));
        }
        info!(company, deleted, "Company experiences deleted");
        Ok(deleted)
    }
}

fn company_filter(company: &str) -> serde_json::Value {
    json!({ "company": { "name": company } })
}

fn company_not_found(company: &str) -> AppError {
    AppError::not_found(format!("No experience found for company '{company}'"))
        .with_code("COMPANY_NOT_FOUND")
}

/// Bulk deletes must be confirmed with `?confirm=true`.
pub(crate) fn confirm_required() -> AppError {
    AppError::validation("Add ?confirm=true to delete every entry").with_code("CONFIRM_REQUIRED")
}
