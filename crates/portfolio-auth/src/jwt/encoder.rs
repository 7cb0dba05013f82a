//! Token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use portfolio_core::config::AuthConfig;
use portfolio_core::config::auth::DEFAULT_ACCESS_TTL_MINUTES;
use portfolio_core::error::AppError;
use portfolio_entity::user::Role;

use super::claims::Claims;
use super::parse_algorithm;

/// Creates signed access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Header naming the signing algorithm.
    header: Header,
    /// Access token TTL.
    ttl: Duration,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("algorithm", &self.header.alg)
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// A freshly signed token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// Compact signed token.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::configuration("jwt_secret must not be empty"));
        }
        let ttl_minutes = match config.access_token_ttl_minutes {
            0 => DEFAULT_ACCESS_TTL_MINUTES,
            minutes => minutes,
        };

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            header: Header::new(parse_algorithm(&config.jwt_algorithm)?),
            ttl: Duration::minutes(ttl_minutes as i64),
        })
    }

    /// Issues a token for `subject` with `role`, valid for the configured TTL.
    pub fn issue(&self, subject: &str, role: Role) -> Result<IssuedToken, AppError> {
        self.issue_at(subject, role, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    pub fn issue_at(
        &self,
        subject: &str,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, AppError> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: subject.to_string(),
            role: Some(role),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&self.header, &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// The configured token lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}
