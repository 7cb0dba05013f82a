//! Route-level authorization guard.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::MethodRouter;

use portfolio_auth::{PermissionSet, RbacEnforcer};

use crate::error::ApiResult;
use crate::state::AppState;

/// Guard configuration for one set of routes.
#[derive(Debug, Clone)]
pub struct Guard {
    enforcer: Arc<RbacEnforcer>,
    allowed: PermissionSet,
}

/// Rejects the request unless the bound context carries an admitted role.
///
/// On success the verified `Identity` is added to the request extensions.
pub async fn require_role(
    State(guard): State<Guard>,
    mut request: Request,
    next: Next,
) -> ApiResult<Response> {
    let identity = guard.enforcer.require_permission(guard.allowed)?;
    tracing::debug!(subject = %identity.subject, role = %identity.role, "Authorized");
    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

/// Wraps `route` so it only runs for roles in `allowed`.
pub fn guarded(
    allowed: PermissionSet,
    state: &AppState,
    route: MethodRouter<AppState>,
) -> MethodRouter<AppState> {
    let guard = Guard {
        enforcer: Arc::clone(&state.rbac),
        allowed,
    };
    route.route_layer(middleware::from_fn_with_state(guard, require_role))
}
