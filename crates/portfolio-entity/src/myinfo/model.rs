//! Personal information model.

use serde::{Deserialize, Serialize};
use validator::Validate;

use portfolio_core::types::Translations;

use crate::validation::validate_translations;

/// Every top-level attribute of the personal information document.
pub const MYINFO_ATTRIBUTES: [&str; 11] = [
    "full_name",
    "first_name",
    "last_name",
    "pseudonym",
    "pseudonym_ascii",
    "about_me",
    "phone",
    "email",
    "emails",
    "location",
    "born_date",
];

/// One of the owner's email addresses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct EmailAddress {
    /// Local part.
    #[validate(length(min = 1))]
    pub name: String,
    /// Domain part.
    #[validate(length(min = 1))]
    pub domain: String,
    /// Whether this is the primary address.
    #[serde(default)]
    pub primary: bool,
}

/// Personal information as written by the owner.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MyInfoIn {
    /// Full name.
    #[validate(length(min = 1, message = "full_name is required"))]
    pub full_name: String,
    /// First name(s).
    #[validate(length(min = 1))]
    pub first_name: String,
    /// Last name(s).
    #[validate(length(min = 1))]
    pub last_name: String,
    /// Pseudonym or nickname.
    pub pseudonym: String,
    /// ASCII-only rendering of the pseudonym.
    pub pseudonym_ascii: String,
    /// Short biography, per language.
    #[validate(custom(function = "validate_translations"))]
    pub about_me: Translations,
    /// Phone number.
    pub phone: String,
    /// Primary email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub email: Option<String>,
    /// All email addresses.
    #[serde(default)]
    #[validate(nested)]
    pub emails: Vec<EmailAddress>,
    /// Location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Birth date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub born_date: Option<String>,
}

/// Personal information as served, with `about_me` resolved.
///
/// Every attribute may be absent since the owner can unset them one by one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MyInfoOut {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub pseudonym: Option<String>,
    pub pseudonym_ascii: Option<String>,
    pub about_me: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub emails: Vec<EmailAddress>,
    pub location: Option<String>,
    pub born_date: Option<String>,
}
