//! Admin handlers: audit log access.

use axum::extract::{Query, State};
use serde_json::json;

use portfolio_core::error::AppError;
use portfolio_entity::audit::AuditEntry;

use crate::dto::request::LogsParams;
use crate::dto::response::{ApiResponse, ClearedLogsResponse, IndexResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /admin
pub async fn overview() -> ApiResponse<IndexResponse> {
    ApiResponse::ok(
        "Admin area",
        IndexResponse {
            available_endpoints: vec!["/admin/logs".to_string()],
        },
    )
}

/// GET /admin/logs
pub async fn list_logs(
    State(state): State<AppState>,
    Query(params): Query<LogsParams>,
) -> ApiResult<ApiResponse<Vec<AuditEntry>>> {
    let last = parse_last(params.last.as_deref())?;
    let entries = state.audit.sink().tail(last).await?;
    Ok(ApiResponse::ok(
        format!("{} audit entries", entries.len()),
        entries,
    ))
}

/// DELETE /admin/logs
pub async fn clear_logs(State(state): State<AppState>) -> ApiResult<ApiResponse<ClearedLogsResponse>> {
    let deleted_entries = state.audit.sink().clear().await?;
    tracing::info!(deleted_entries, "Audit log cleared");
    Ok(ApiResponse::ok(
        "Audit log cleared",
        ClearedLogsResponse { deleted_entries },
    ))
}

/// `?last=` value; absent or empty means every entry.
fn parse_last(raw: Option<&str>) -> Result<usize, AppError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(0),
        Some(value) => value.parse().map_err(|_| {
            AppError::validation(format!("'last' must be a non-negative integer, got '{value}'"))
                .with_code("INVALID_LAST_QUERY")
                .with_details(json!({ "last": value }))
        }),
    }
}
