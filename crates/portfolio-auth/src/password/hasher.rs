//! Argon2id password hashing and verification.

use argon2::{
    Argon2,
    password_hash::{
        PasswordHash, PasswordHasher as ArgonHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use portfolio_core::error::AppError;

/// Hashes and verifies passwords with Argon2id in PHC string format.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }

    /// Verifies a plaintext password against a PHC hash string.
    ///
    /// Returns `Ok(false)` on mismatch and an error if the hash is malformed.
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = Self::parse(hash)?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Password verification failed: {e}"
            ))),
        }
    }

    /// Checks that `hash` is a well-formed PHC string.
    pub fn is_valid_hash(&self, hash: &str) -> bool {
        Self::parse(hash).is_ok()
    }

    fn parse(hash: &str) -> Result<PasswordHash<'_>, AppError> {
        PasswordHash::new(hash)
            .map_err(|e| AppError::configuration(format!("Invalid password hash format: {e}")))
    }
}
