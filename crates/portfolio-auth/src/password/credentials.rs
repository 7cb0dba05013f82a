//! Login role resolution.

use portfolio_core::config::AuthConfig;
use portfolio_entity::user::Role;

use super::hasher::PasswordHasher;

/// Maps a login password to the role it grants.
///
/// The owner hash is checked first, then the maintainer hash. Any other
/// password, including an empty one, yields [`Role::User`].
#[derive(Debug, Clone)]
pub struct CredentialVerifier {
    /// Owner password hash, if configured and well-formed.
    owner_hash: Option<String>,
    /// Maintainer password hash, if configured and well-formed.
    maintainer_hash: Option<String>,
    hasher: PasswordHasher,
}

impl CredentialVerifier {
    /// Build a verifier from auth configuration.
    ///
    /// Malformed hashes are logged and ignored.
    pub fn new(config: &AuthConfig) -> Self {
        let hasher = PasswordHasher::new();
        let owner_hash = Self::accept(&hasher, "owner", config.owner_password_hash.as_deref());
        let maintainer_hash = Self::accept(
            &hasher,
            "maintainer",
            config.maintainer_password_hash.as_deref(),
        );

        Self {
            owner_hash,
            maintainer_hash,
            hasher,
        }
    }

    fn accept(hasher: &PasswordHasher, role: &str, hash: Option<&str>) -> Option<String> {
        let hash = hash.map(str::trim).filter(|h| !h.is_empty())?;
        if hasher.is_valid_hash(hash) {
            Some(hash.to_string())
        } else {
            tracing::warn!(role, "Configured password hash is not a PHC string; ignoring it");
            None
        }
    }

    /// Resolve the role granted by `password`.
    pub fn role_for(&self, password: &str) -> Role {
        if self.matches(self.owner_hash.as_deref(), password) {
            Role::Owner
        } else if self.matches(self.maintainer_hash.as_deref(), password) {
            Role::Maintainer
        } else {
            Role::User
        }
    }

    fn matches(&self, hash: Option<&str>, password: &str) -> bool {
        match hash {
            Some(hash) => self.hasher.verify_password(password, hash).unwrap_or(false),
            None => false,
        }
    }
}
