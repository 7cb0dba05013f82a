//! Response DTOs and the shared envelope.

use axum::Json;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use portfolio_core::context;

/// API version reported in every envelope.
pub const API_VERSION: &str = "v1";

/// Envelope metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    /// Request path, empty outside a request scope.
    pub path: String,
    /// When the response was built.
    pub timestamp: DateTime<Utc>,
    /// API version.
    pub version: String,
}

impl Default for ResponseMeta {
    fn default() -> Self {
        Self {
            path: context::try_current()
                .map(|ctx| ctx.path.clone())
                .unwrap_or_default(),
            timestamp: Utc::now(),
            version: API_VERSION.to_string(),
        }
    }
}

/// Standard response wrapper shared by successes and failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Machine-readable error code, `None` on success.
    pub error: Option<String>,
    /// Human-readable message.
    pub message: String,
    /// Payload.
    pub data: T,
    /// Request metadata.
    pub meta: ResponseMeta,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            error: None,
            message: message.into(),
            data,
            meta: ResponseMeta::default(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Role granted by the password.
    pub role: String,
    /// Access token expiration.
    pub expires_at: DateTime<Utc>,
}

/// Caller identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeResponse {
    /// Token subject.
    pub subject: String,
    /// Token role.
    pub role: String,
    /// Every role the API knows.
    pub available_roles: Vec<String>,
}

/// Endpoint directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    /// Public paths.
    pub available_endpoints: Vec<String>,
}

/// Bulk delete result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    /// Number of documents removed.
    pub deleted_count: u64,
}

/// Audit log truncation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearedLogsResponse {
    /// Number of audit entries removed.
    pub deleted_entries: u64,
}

/// Fields changed by a partial update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedFieldsResponse {
    /// Updated field names.
    pub updated_fields: Vec<String>,
}
