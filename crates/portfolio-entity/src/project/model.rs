//! Project model.
//!
//! A project is one of a closed set of shapes selected by its `type`
//! discriminator: a plain project, a web project (adds `stack_end`) or a
//! DevOps project (adds `platform`). Clients name the shape with a builder
//! name (`Project`, `WebProject`, `DevOpsProject`); the stored and served
//! `type` is the human label (`Project`, `Web Project`, `DevOps Project`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::Validate;

use portfolio_core::AppError;
use portfolio_core::result::AppResult;
use portfolio_core::types::Translations;

use crate::validation::validate_translations;

/// Project size, from weekend exercise to product ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Learning,
    #[default]
    Short,
    Medium,
    Long,
    #[serde(alias = "enterprice")]
    Enterprise,
    Ecosystem,
}

/// Which side of the stack a web project covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StackEnd {
    Frontend,
    Backend,
    #[default]
    Fullstack,
}

/// Hosting platform of a DevOps project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Platform {
    #[default]
    #[serde(rename = "AWS")]
    Aws,
    Azure,
    #[serde(rename = "GCP")]
    Gcp,
    DigitalOcean,
    Heroku,
    Vercel,
    Netlify,
}

/// The shape-specific part of a project, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProjectKind {
    /// A project with no extra attributes.
    #[serde(rename = "Project")]
    Generic,
    /// A website or web service.
    #[serde(rename = "Web Project", alias = "WebProject")]
    Web {
        #[serde(default)]
        stack_end: StackEnd,
    },
    /// Infrastructure and delivery work.
    #[serde(rename = "DevOps Project", alias = "DevOpsProject")]
    DevOps {
        #[serde(default)]
        platform: Platform,
    },
}

impl ProjectKind {
    /// The served `type` label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Generic => "Project",
            Self::Web { .. } => "Web Project",
            Self::DevOps { .. } => "DevOps Project",
        }
    }
}

/// Links every project starts with.
pub fn default_links() -> BTreeMap<String, String> {
    BTreeMap::from([("git".to_string(), "https://github.com".to_string())])
}

fn default_description() -> Translations {
    BTreeMap::from([
        ("en".to_string(), "None, english description".to_string()),
        ("es".to_string(), "None, descripción en español".to_string()),
    ])
}

fn default_builder() -> String {
    "Project".to_string()
}

/// A project as written by a maintainer.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProjectIn {
    /// Display name.
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    /// Builder name selecting the project shape.
    #[serde(rename = "type", default = "default_builder")]
    pub builder: String,
    /// Project size.
    #[serde(default)]
    pub scale: Scale,
    /// Whether the project is deployed somewhere.
    #[serde(default)]
    pub deployment: bool,
    /// Description per language.
    #[serde(default = "default_description")]
    #[validate(custom(function = "validate_translations"))]
    pub description: Translations,
    /// Technologies used.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Named links (`git`, `site`, ...).
    #[serde(default = "default_links")]
    pub links: BTreeMap<String, String>,
    /// Web projects only.
    #[serde(default)]
    pub stack_end: Option<StackEnd>,
    /// DevOps projects only.
    #[serde(default)]
    pub platform: Option<Platform>,
}

impl ProjectIn {
    /// Select the project shape named by `type` and build the stored document.
    ///
    /// Unknown builder names fail with `INVALID_REQUEST`.
    pub fn build(self, id: i64) -> AppResult<ProjectDocument> {
        let kind = match self.builder.as_str() {
            "Project" => ProjectKind::Generic,
            "WebProject" | "Web Project" => ProjectKind::Web {
                stack_end: self.stack_end.unwrap_or_default(),
            },
            "DevOpsProject" | "DevOps Project" => ProjectKind::DevOps {
                platform: self.platform.unwrap_or_default(),
            },
            other => {
                return Err(AppError::validation(format!(
                    "The builder project [{other}] doesn't exist."
                ))
                .with_code("INVALID_REQUEST"));
            }
        };

        let mut links = self.links;
        if !matches!(kind, ProjectKind::Generic) {
            links
                .entry("site".to_string())
                .or_insert_with(|| "https://vercel.com".to_string());
        }

        Ok(ProjectDocument {
            id,
            name: self.name,
            kind,
            scale: self.scale,
            deployment: self.deployment,
            description: self.description,
            tech_stack: self.tech_stack,
            links,
        })
    }
}

/// A project as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    /// Sequential identifier.
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub kind: ProjectKind,
    pub scale: Scale,
    pub deployment: bool,
    pub description: Translations,
    pub tech_stack: Vec<String>,
    pub links: BTreeMap<String, String>,
}

/// A project as served, with `description` resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectOut {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub kind: ProjectKind,
    #[serde(default)]
    pub scale: Scale,
    #[serde(default)]
    pub deployment: bool,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
}

/// Projects sharing a `type` label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectGroup {
    /// The shared label.
    #[serde(rename = "type")]
    pub label: String,
    /// Members, ordered by id.
    pub projects: Vec<ProjectOut>,
}

/// Summary returned after a project is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectCreated {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub label: String,
}

impl From<&ProjectDocument> for ProjectCreated {
    fn from(doc: &ProjectDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name.clone(),
            label: doc.kind.label().to_string(),
        }
    }
}
