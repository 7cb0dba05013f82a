//! Token validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, Validation, decode};

use portfolio_core::config::AuthConfig;
use portfolio_core::error::AppError;

use super::claims::{Claims, Identity};
use super::parse_algorithm;

/// Validates tokens and extracts the caller identity.
///
/// Verification is stateless and read-only: there is no revocation list,
/// expiry is the only invalidation mechanism.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let mut validation = Validation::new(parse_algorithm(&config.jwt_algorithm)?);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        })
    }

    /// Decodes and validates a token string.
    ///
    /// Signature, format and expiry failures, and a missing role claim, all
    /// surface as `InvalidToken`.
    pub fn verify(&self, token: &str) -> Result<Identity, AppError> {
        let claims = self.decode_claims(token)?;

        let role = claims
            .role
            .ok_or_else(|| AppError::invalid_token("Token carries no role"))?;
        let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AppError::invalid_token("Token expiry is out of range"))?;

        Ok(Identity {
            subject: claims.sub,
            role,
            expires_at,
        })
    }

    /// Internal decode without role checking.
    fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::invalid_token("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::invalid_token("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::invalid_token("Invalid token signature")
                    }
                    _ => AppError::invalid_token(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}
