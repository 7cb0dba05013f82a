//! Auth handlers: login and caller identity.

use std::sync::Arc;

use axum::Extension;
use axum::extract::State;
use axum::http::StatusCode;

use portfolio_auth::Identity;
use portfolio_core::error::AppError;
use portfolio_entity::user::Role;

use crate::dto::response::{ApiResponse, LoginResponse, MeResponse};
use crate::error::ApiResult;
use crate::extractors::LoginBody;
use crate::state::AppState;

/// POST /login
///
/// The password decides the role; a password matching no configured hash
/// still logs in, as `user`.
pub async fn login(
    State(state): State<AppState>,
    LoginBody(req): LoginBody,
) -> ApiResult<(StatusCode, ApiResponse<LoginResponse>)> {
    let username = req.username.trim().to_string();
    if username.is_empty() {
        return Err(AppError::validation("username is required").into());
    }

    // Argon2 verification is CPU-heavy.
    let credentials = Arc::clone(&state.credentials);
    let password = req.password;
    let role = tokio::task::spawn_blocking(move || credentials.role_for(&password))
        .await
        .map_err(|e| AppError::internal(format!("Password check failed: {e}")))?;

    let issued = state.tokens.issue(&username, role)?;
    tracing::info!(subject = %username, role = %role, "Token issued");

    Ok((
        StatusCode::ACCEPTED,
        ApiResponse::ok(
            "Login successful",
            LoginResponse {
                access_token: issued.token,
                token_type: "bearer".to_string(),
                role: role.to_string(),
                expires_at: issued.expires_at,
            },
        ),
    ))
}

/// GET /users/me
pub async fn me(Extension(identity): Extension<Identity>) -> ApiResponse<MeResponse> {
    ApiResponse::ok(
        "Current user",
        MeResponse {
            subject: identity.subject,
            role: identity.role.to_string(),
            available_roles: Role::ALL.iter().map(|r| r.to_string()).collect(),
        },
    )
}
