//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Login form or JSON body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Subject to put in the token.
    pub username: String,
    /// Password checked against the configured role hashes.
    #[serde(default)]
    pub password: String,
}

/// `?lang=` query parameter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LangParams {
    /// Requested language code.
    pub lang: Option<String>,
}

/// `?confirm=` query parameter for bulk deletes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfirmParams {
    /// Must be `true` to proceed.
    pub confirm: Option<String>,
}

impl ConfirmParams {
    /// Whether the caller confirmed.
    pub fn confirmed(&self) -> bool {
        self.confirm
            .as_deref()
            .is_some_and(|v| v.eq_ignore_ascii_case("true"))
    }
}

/// `?last=` query parameter of the audit log endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogsParams {
    /// Number of most recent entries to return.
    pub last: Option<String>,
}
