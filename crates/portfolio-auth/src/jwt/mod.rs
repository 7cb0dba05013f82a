//! Token encoding, decoding, and claims.

pub mod claims;
pub mod codec;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, Identity};
pub use codec::TokenCodec;
pub use decoder::JwtDecoder;
pub use encoder::{IssuedToken, JwtEncoder};

use std::str::FromStr;

use jsonwebtoken::Algorithm;

use portfolio_core::error::AppError;

/// Parse the configured signing algorithm, accepting only HMAC variants.
pub(crate) fn parse_algorithm(name: &str) -> Result<Algorithm, AppError> {
    let algorithm = Algorithm::from_str(&name.to_uppercase())
        .map_err(|_| AppError::configuration(format!("Unknown JWT algorithm '{name}'")))?;
    match algorithm {
        Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => Ok(algorithm),
        other => Err(AppError::configuration(format!(
            "JWT algorithm {other:?} is not supported; use HS256, HS384 or HS512"
        ))),
    }
}
