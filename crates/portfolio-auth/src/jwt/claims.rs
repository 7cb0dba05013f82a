//! Token claims.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portfolio_entity::user::Role;

/// Claims payload embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the login name.
    pub sub: String,
    /// Caller role. Absent only in tokens this service did not issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// The verified identity carried by a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Token subject.
    pub subject: String,
    /// Token role.
    pub role: Role,
    /// When the token stops being accepted.
    pub expires_at: DateTime<Utc>,
}
