//! Password hashing and login credential resolution.

pub mod credentials;
pub mod hasher;

pub use credentials::CredentialVerifier;
pub use hasher::PasswordHasher;
