//! Issue-and-verify facade over the encoder and decoder.

use portfolio_core::config::AuthConfig;
use portfolio_core::error::AppError;
use portfolio_entity::user::Role;

use super::claims::Identity;
use super::decoder::JwtDecoder;
use super::encoder::{IssuedToken, JwtEncoder};

/// Signs and verifies access tokens with a single shared secret.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    /// Signing half.
    encoder: JwtEncoder,
    /// Verification half.
    decoder: JwtDecoder,
}

impl TokenCodec {
    /// Build a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        Ok(Self {
            encoder: JwtEncoder::new(config)?,
            decoder: JwtDecoder::new(config)?,
        })
    }

    /// Issue a token for `subject` carrying `role`.
    pub fn issue(&self, subject: &str, role: Role) -> Result<IssuedToken, AppError> {
        self.encoder.issue(subject, role)
    }

    /// Verify a token and return the identity it carries.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        self.decoder.verify(token)
    }

    /// Access the encoder.
    pub fn encoder(&self) -> &JwtEncoder {
        &self.encoder
    }
}
