//! Project CRUD with sequential ids and type grouping.

use std::sync::Arc;

use serde_json::{Value, json};
use tracing::info;

use portfolio_core::error::AppError;
use portfolio_core::result::AppResult;
use portfolio_core::traits::{DocumentStore, SortBy};
use portfolio_entity::project::{ProjectCreated, ProjectGroup, ProjectIn, ProjectOut};
use portfolio_i18n::TranslationResolver;

use crate::experience::service::confirm_required;
use crate::localize::{localize, localize_all};
use crate::validation::validate_input;

const COLLECTION: &str = "projects";
const SEQUENCE: &str = "projects";
const LOCALIZED: &[&str] = &["description"];

/// Whether a write replaced an existing project or created a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// An existing project was replaced.
    Replaced,
    /// A new project was stored.
    Created,
}

/// Manages projects.
#[derive(Debug, Clone)]
pub struct ProjectService {
    store: Arc<dyn DocumentStore>,
    resolver: Arc<TranslationResolver>,
}

impl ProjectService {
    /// Creates a new project service.
    pub fn new(store: Arc<dyn DocumentStore>, resolver: Arc<TranslationResolver>) -> Self {
        Self { store, resolver }
    }

    /// Every project ordered by id, resolved for `lang`.
    pub async fn list(&self, lang: &str) -> AppResult<Vec<ProjectOut>> {
        self.find(&json!({}), lang).await
    }

    /// One project by its path id.
    pub async fn get(&self, raw_id: &str, lang: &str) -> AppResult<ProjectOut> {
        let id = parse_id(raw_id)?;
        let document = self
            .store
            .find_one(COLLECTION, &id_filter(id))
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Project {id} not found")).with_code("PROJECT_NOT_FOUND")
            })?;
        localize(&self.resolver, document, lang, LOCALIZED)
    }

    /// Projects grouped by type label, groups in order of their lowest id.
    pub async fn groups(&self, lang: &str) -> AppResult<Vec<ProjectGroup>> {
        let mut groups: Vec<ProjectGroup> = Vec::new();
        for project in self.list(lang).await? {
            let label = project.kind.label();
            match groups.iter_mut().find(|g| g.label == label) {
                Some(group) => group.projects.push(project),
                None => groups.push(ProjectGroup {
                    label: label.to_string(),
                    projects: vec![project],
                }),
            }
        }
        Ok(groups)
    }

    /// The projects carrying one type label.
    pub async fn group(&self, label: &str, lang: &str) -> AppResult<ProjectGroup> {
        let projects = self.find(&json!({ "type": label }), lang).await?;
        if projects.is_empty() {
            return Err(AppError::validation(format!("No projects of type '{label}'"))
                .with_code("INVALID_REQUEST"));
        }
        Ok(ProjectGroup {
            label: label.to_string(),
            projects,
        })
    }

    /// Store a new project under the next sequential id.
    pub async fn create(&self, input: ProjectIn) -> AppResult<ProjectCreated> {
        validate_input(&input)?;
        let mut document = input.build(0)?;
        document.id = self.store.next_sequence(SEQUENCE).await?;

        self.store
            .insert_one(COLLECTION, serde_json::to_value(&document)?)
            .await?;
        info!(id = document.id, kind = document.kind.label(), "Project created");
        Ok(ProjectCreated::from(&document))
    }

    /// Replace the project at `raw_id`, or create a new one if it does not exist.
    pub async fn upsert(
        &self,
        raw_id: &str,
        input: ProjectIn,
    ) -> AppResult<(ProjectCreated, WriteOutcome)> {
        let id = parse_id(raw_id)?;
        validate_input(&input)?;
        let document = input.clone().build(id)?;

        let replaced = self
            .store
            .replace_one(COLLECTION, &id_filter(id), serde_json::to_value(&document)?)
            .await?;
        if replaced {
            info!(id, "Project replaced");
            return Ok((ProjectCreated::from(&document), WriteOutcome::Replaced));
        }

        let created = self.create(input).await?;
        Ok((created, WriteOutcome::Created))
    }

    /// Delete every project. Requires explicit confirmation.
    pub async fn delete_all(&self, confirm: bool) -> AppResult<u64> {
        if !confirm {
            return Err(confirm_required());
        }
        let deleted = self.store.delete_many(COLLECTION, &json!({})).await?;
        info!(deleted, "All projects deleted");
        Ok(deleted)
    }

    /// Delete one project.
    pub async fn delete(&self, raw_id: &str) -> AppResult<()> {
        let id = parse_id(raw_id)?;
        if self.store.delete_one(COLLECTION, &id_filter(id)).await? == 0 {
            return Err(invalid_id(raw_id));
        }
        info!(id, "Project deleted");
        Ok(())
    }

    async fn find(&self, filter: &Value, lang: &str) -> AppResult<Vec<ProjectOut>> {
        let documents = self
            .store
            .find_many(COLLECTION, filter, Some(&SortBy::ascending("id")))
            .await?;
        localize_all(&self.resolver, documents, lang, LOCALIZED)
    }
}

fn parse_id(raw_id: &str) -> AppResult<i64> {
    raw_id.trim().parse().map_err(|_| invalid_id(raw_id))
}

fn invalid_id(raw_id: &str) -> AppError {
    AppError::validation(format!("Invalid project id '{raw_id}'")).with_code("INVALID_PROJECT_ID")
}

fn id_filter(id: i64) -> Value {
    json!({ "id": id })
}
