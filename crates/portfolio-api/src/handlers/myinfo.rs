//! Personal information handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use portfolio_core::traits::UpdateOutcome;
use portfolio_entity::myinfo::{MyInfoIn, MyInfoOut};

use crate::dto::response::{ApiResponse, DeletedResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, Lang};
use crate::state::AppState;

/// GET /personal-info
pub async fn get_info(
    State(state): State<AppState>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<MyInfoOut>> {
    let info = state.myinfo.get(&lang).await?;
    Ok(ApiResponse::ok("Personal information", info))
}

/// PUT /personal-info
pub async fn put_info(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<MyInfoIn>,
) -> ApiResult<(StatusCode, ApiResponse<UpdateOutcome>)> {
    let outcome = state.myinfo.upsert(input).await?;
    Ok((
        StatusCode::ACCEPTED,
        ApiResponse::ok("Personal information updated", outcome),
    ))
}

/// DELETE /personal-info
pub async fn delete_info(State(state): State<AppState>) -> ApiResult<ApiResponse<DeletedResponse>> {
    let deleted_count = state.myinfo.delete().await?;
    Ok(ApiResponse::ok(
        "Personal information deleted",
        DeletedResponse { deleted_count },
    ))
}

/// DELETE /personal-info/{attribute}
pub async fn delete_attribute(
    State(state): State<AppState>,
    Path(attribute): Path<String>,
) -> ApiResult<ApiResponse<UpdateOutcome>> {
    let outcome = state.myinfo.delete_attribute(&attribute).await?;
    Ok(ApiResponse::ok(
        format!("Attribute '{attribute}' removed"),
        outcome,
    ))
}
