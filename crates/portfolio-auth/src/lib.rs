//! # portfolio-auth
//!
//! Authentication and authorization for the portfolio API.
//!
//! ## Modules
//!
//! - `jwt`: signed, expiring role-claim tokens (issue and verify)
//! - `rbac`: permission sets and the guard that checks the current request
//! - `password`: Argon2id hashing and the login role resolution

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, Identity, JwtDecoder, JwtEncoder, TokenCodec};
pub use password::{CredentialVerifier, PasswordHasher};
pub use rbac::{PermissionSet, RbacEnforcer, bearer_token};
