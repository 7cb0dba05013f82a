//! Personal information singleton document.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::info;

use portfolio_core::error::AppError;
use portfolio_core::result::AppResult;
use portfolio_core::traits::{DocumentStore, UpdateOutcome};
use portfolio_entity::myinfo::{MYINFO_ATTRIBUTES, MyInfoIn, MyInfoOut};
use portfolio_i18n::TranslationResolver;

use super::suggest::closest_by_prefix;
use crate::localize::localize;
use crate::validation::validate_input;

const COLLECTION: &str = "myinfo";
const LOCALIZED: &[&str] = &["about_me"];

/// Reads and edits the owner's personal information.
#[derive(Debug, Clone)]
pub struct MyInfoService {
    store: Arc<dyn DocumentStore>,
    resolver: Arc<TranslationResolver>,
}

impl MyInfoService {
    /// Creates a new personal information service.
    pub fn new(store: Arc<dyn DocumentStore>, resolver: Arc<TranslationResolver>) -> Self {
        Self { store, resolver }
    }

    /// The document resolved for `lang`.
    pub async fn get(&self, lang: &str) -> AppResult<MyInfoOut> {
        let document = self
            .store
            .find_one(COLLECTION, &json!({}))
            .await?
            .ok_or_else(info_not_found)?;
        localize(&self.resolver, document, lang, LOCALIZED)
    }

    /// Write every attribute of `input`, creating the document if needed.
    pub async fn upsert(&self, input: MyInfoIn) -> AppResult<UpdateOutcome> {
        validate_input(&input)?;
        let Value::Object(set) = serde_json::to_value(&input)? else {
            return Err(AppError::internal("Personal information did not serialize to an object"));
        };
        let outcome = self
            .store
            .update_one(COLLECTION, &json!({}), set, &[], true)
            .await?;
        info!(upserted = outcome.upserted, "Personal information updated");
        Ok(outcome)
    }

    /// Delete the document.
    pub async fn delete(&self) -> AppResult<u64> {
        let deleted = self.store.delete_many(COLLECTION, &json!({})).await?;
        if deleted == 0 {
            return Err(info_not_found());
        }
        info!("Personal information deleted");
        Ok(deleted)
    }

    /// Remove one attribute from the document.
    ///
    /// Unknown names fail with `ATTRIBUTE_NOT_FOUND` and suggest the closest
    /// known attribute.
    pub async fn delete_attribute(&self, attribute: &str) -> AppResult<UpdateOutcome> {
        if !MYINFO_ATTRIBUTES.contains(&attribute) {
            let suggestion = closest_by_prefix(attribute, &MYINFO_ATTRIBUTES);
            return Err(AppError::validation(format!(
                "Attribute '{attribute}' does not exist"
            ))
            .with_code("ATTRIBUTE_NOT_FOUND")
            .with_details(json!({
                "attribute": attribute,
                "suggestion": suggestion,
                "available_attributes": MYINFO_ATTRIBUTES,
            })));
        }

        let outcome = self
            .store
            .update_one(
                COLLECTION,
                &json!({}),
                serde_json::Map::new(),
                &[attribute.to_string()],
                false,
            )
            .await?;
        if outcome.matched == 0 {
            return Err(info_not_found());
        }
        Ok(outcome)
    }
}

fn info_not_found() -> AppError {
    AppError::not_found("Personal information not found").with_code("INFO_NOT_FOUND")
}
