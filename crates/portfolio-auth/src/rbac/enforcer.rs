//! Authorization guard for the request bound to the current task.

use std::sync::Arc;

use portfolio_core::context;
use portfolio_core::error::{AppError, ErrorKind};

use super::permission::PermissionSet;
use crate::jwt::{Identity, TokenCodec};

/// Checks the bearer credential of the current request against a permission set.
#[derive(Debug, Clone)]
pub struct RbacEnforcer {
    /// Token verifier.
    codec: Arc<TokenCodec>,
}

impl RbacEnforcer {
    /// Create an enforcer backed by `codec`.
    pub fn new(codec: Arc<TokenCodec>) -> Self {
        Self { codec }
    }

    /// Authorize the request bound to the current task.
    ///
    /// Fails with `Unauthenticated` when no bearer token is present,
    /// `InvalidToken` when it does not verify, and `Forbidden` when its
    /// role is outside `allowed`.
    pub fn require_permission(&self, allowed: PermissionSet) -> Result<Identity, AppError> {
        let ctx = context::current()?;
        self.check(ctx.authorization(), allowed)
    }

    /// Authorize an explicit `Authorization` header value.
    pub fn check(
        &self,
        authorization: Option<&str>,
        allowed: PermissionSet,
    ) -> Result<Identity, AppError> {
        let token = bearer_token(authorization)
            .ok_or_else(|| AppError::unauthenticated("Not authenticated"))?;

        let identity = self.codec.verify(token).map_err(|e| match e.kind {
            ErrorKind::InvalidToken => e,
            _ => AppError::invalid_token("Invalid token"),
        })?;

        if !allowed.allows(identity.role) {
            return Err(AppError::forbidden(format!(
                "Role '{}' is not permitted here; allowed roles: {allowed}",
                identity.role
            )));
        }

        Ok(identity)
    }
}

/// Extract the token from a `Bearer <token>` header value.
pub fn bearer_token(authorization: Option<&str>) -> Option<&str> {
    authorization?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
