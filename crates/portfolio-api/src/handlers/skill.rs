//! Skill handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use portfolio_entity::skill::{SkillIn, SkillOut, SkillPatch};

use crate::dto::response::{ApiResponse, UpdatedFieldsResponse};
use crate::error::ApiResult;
use crate::extractors::{JsonBody, Lang};
use crate::state::AppState;

/// GET /skills
pub async fn list_skills(
    State(state): State<AppState>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<Vec<SkillOut>>> {
    let skills = state.skill.list(&lang).await?;
    Ok(ApiResponse::ok("Skills", skills))
}

/// GET /skills/{name}
pub async fn get_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<SkillOut>> {
    let skill = state.skill.get(&name, &lang).await?;
    Ok(ApiResponse::ok(format!("Skill {name}"), skill))
}

/// POST /skills
pub async fn create_skill(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<SkillIn>,
) -> ApiResult<(StatusCode, ApiResponse<SkillIn>)> {
    let skill = state.skill.create(input).await?;
    Ok((StatusCode::CREATED, ApiResponse::ok("Skill created", skill)))
}

/// PUT /skills/{name}
pub async fn replace_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(input): JsonBody<SkillIn>,
) -> ApiResult<ApiResponse<SkillIn>> {
    let skill = state.skill.replace(&name, input).await?;
    Ok(ApiResponse::ok(format!("Skill {name} replaced"), skill))
}

/// PATCH /skills/{name}
pub async fn patch_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
    JsonBody(patch): JsonBody<SkillPatch>,
) -> ApiResult<ApiResponse<UpdatedFieldsResponse>> {
    let updated_fields = state.skill.patch(&name, patch).await?;
    Ok(ApiResponse::ok(
        format!("Skill {name} updated"),
        UpdatedFieldsResponse { updated_fields },
    ))
}

/// DELETE /skills/{name}
pub async fn delete_skill(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<ApiResponse<()>> {
    state.skill.delete(&name).await?;
    Ok(ApiResponse::ok(format!("Skill {name} deleted"), ()))
}
