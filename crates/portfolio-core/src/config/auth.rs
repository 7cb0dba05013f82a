//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Token signing and login credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for token signing. Empty means "generate one at startup".
    #[serde(default)]
    pub jwt_secret: String,
    /// Symmetric signing algorithm: `HS256`, `HS384` or `HS512`.
    #[serde(default = "default_algorithm")]
    pub jwt_algorithm: String,
    /// Access token TTL in minutes. `0` falls back to the default.
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_minutes: u64,
    /// Argon2 PHC hash of the owner password.
    #[serde(default)]
    pub owner_password_hash: Option<String>,
    /// Argon2 PHC hash of the maintainer password.
    #[serde(default)]
    pub maintainer_password_hash: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            jwt_algorithm: default_algorithm(),
            access_token_ttl_minutes: default_access_ttl(),
            owner_password_hash: None,
            maintainer_password_hash: None,
        }
    }
}

fn default_algorithm() -> String {
    "HS256".to_string()
}

/// Access token TTL used when none is configured.
pub const DEFAULT_ACCESS_TTL_MINUTES: u64 = 15;

fn default_access_ttl() -> u64 {
    DEFAULT_ACCESS_TTL_MINUTES
}
