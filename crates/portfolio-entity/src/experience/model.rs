//! Work experience model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use portfolio_core::types::Translations;

use crate::validation::validate_translations;

/// The company an experience took place at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Company {
    /// Company name; experiences are looked up by it.
    #[validate(length(min = 1, message = "company name is required"))]
    pub name: String,
    /// City / region.
    pub location: String,
    /// Postal code.
    pub zip_code: String,
    /// Industry sector.
    pub industry: String,
    /// Website URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub website: Option<String>,
    /// Foundation year.
    #[serde(alias = "fundation")]
    pub foundation: String,
    /// Whether the company has gone bankrupt.
    #[serde(default)]
    pub bankrupted: bool,
}

/// An experience entry as written by the owner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ExperienceIn {
    /// Job title.
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
    /// Employer.
    #[validate(nested)]
    pub company: Company,
    /// Start date.
    #[validate(length(min = 1))]
    pub start_date: String,
    /// End date; `None` while ongoing.
    #[serde(default)]
    pub end_date: Option<String>,
    /// What was done there, per language.
    #[validate(custom(function = "validate_translations"))]
    pub description: Translations,
}

/// An experience entry as served, with `description` resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceOut {
    /// Job title.
    pub role: String,
    /// Employer.
    pub company: Company,
    /// Start date.
    pub start_date: String,
    /// End date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Resolved description.
    pub description: String,
}

/// Echo returned after an experience is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceCreated {
    pub role: String,
    pub company: Company,
    pub description: Translations,
}

impl From<&ExperienceIn> for ExperienceCreated {
    fn from(input: &ExperienceIn) -> Self {
        Self {
            role: input.role.clone(),
            company: input.company.clone(),
            description: input.description.clone(),
        }
    }
}
