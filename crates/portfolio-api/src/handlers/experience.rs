//! Work experience handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use portfolio_entity::experience::{ExperienceCreated, ExperienceIn, ExperienceOut};

use crate::dto::response::{ApiResponse, DeletedResponse};
use crate::error::ApiResult;
use crate::extractors::{Confirm, JsonBody, Lang};
use crate::state::AppState;

/// GET /experiences
pub async fn list_experiences(
    State(state): State<AppState>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<Vec<ExperienceOut>>> {
    let experiences = state.experience.list(&lang).await?;
    Ok(ApiResponse::ok("Experiences", experiences))
}

/// GET /experiences/{company}
pub async fn company_experiences(
    State(state): State<AppState>,
    Path(company): Path<String>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<Vec<ExperienceOut>>> {
    let experiences = state.experience.by_company(&company, &lang).await?;
    Ok(ApiResponse::ok(format!("Experiences at {company}"), experiences))
}

/// PUT /experiences
pub async fn add_experience(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ExperienceIn>,
) -> ApiResult<(StatusCode, ApiResponse<ExperienceCreated>)> {
    let created = state.experience.create(input).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Experience added", created),
    ))
}

/// DELETE /experiences?confirm=true
pub async fn delete_experiences(
    State(state): State<AppState>,
    Confirm(confirm): Confirm,
) -> ApiResult<ApiResponse<DeletedResponse>> {
    let deleted_count = state.experience.delete_all(confirm).await?;
    Ok(ApiResponse::ok(
        "All experiences deleted",
        DeletedResponse { deleted_count },
    ))
}

/// DELETE /experiences/{company}
pub async fn delete_company(
    State(state): State<AppState>,
    Path(company): Path<String>,
) -> ApiResult<ApiResponse<DeletedResponse>> {
    let deleted_count = state.experience.delete_company(&company).await?;
    Ok(ApiResponse::ok(
        format!("Experiences at {company} deleted"),
        DeletedResponse { deleted_count },
    ))
}
