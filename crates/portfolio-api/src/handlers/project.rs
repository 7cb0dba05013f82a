//! Project handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use portfolio_entity::project::{ProjectCreated, ProjectGroup, ProjectIn, ProjectOut};
use portfolio_service::project::WriteOutcome;

use crate::dto::response::{ApiResponse, DeletedResponse};
use crate::error::ApiResult;
use crate::extractors::{Confirm, JsonBody, Lang};
use crate::state::AppState;

/// GET /projects
pub async fn list_projects(
    State(state): State<AppState>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<Vec<ProjectOut>>> {
    let projects = state.project.list(&lang).await?;
    Ok(ApiResponse::ok("Projects", projects))
}

/// GET /projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<ProjectOut>> {
    let project = state.project.get(&id, &lang).await?;
    Ok(ApiResponse::ok(format!("Project {}", project.id), project))
}

/// GET /projects/groups
pub async fn list_groups(
    State(state): State<AppState>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<Vec<ProjectGroup>>> {
    let groups = state.project.groups(&lang).await?;
    Ok(ApiResponse::ok("Projects by type", groups))
}

/// GET /projects/groups/{type}
pub async fn get_group(
    State(state): State<AppState>,
    Path(label): Path<String>,
    Lang(lang): Lang,
) -> ApiResult<ApiResponse<ProjectGroup>> {
    let group = state.project.group(&label, &lang).await?;
    Ok(ApiResponse::ok(format!("{label} projects"), group))
}

/// POST /projects
pub async fn create_project(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProjectIn>,
) -> ApiResult<(StatusCode, ApiResponse<ProjectCreated>)> {
    let created = state.project.create(input).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::ok("Project created", created),
    ))
}

/// PUT /projects/{id}
pub async fn put_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<ProjectIn>,
) -> ApiResult<(StatusCode, ApiResponse<ProjectCreated>)> {
    let (project, outcome) = state.project.upsert(&id, input).await?;
    let response = match outcome {
        WriteOutcome::Replaced => (
            StatusCode::OK,
            ApiResponse::ok(format!("Project {} replaced", project.id), project),
        ),
        WriteOutcome::Created => (
            StatusCode::CREATED,
            ApiResponse::ok(format!("Project {} created", project.id), project),
        ),
    };
    Ok(response)
}

/// DELETE /projects?confirm=true
pub async fn delete_projects(
    State(state): State<AppState>,
    Confirm(confirm): Confirm,
) -> ApiResult<ApiResponse<DeletedResponse>> {
    let deleted_count = state.project.delete_all(confirm).await?;
    Ok(ApiResponse::ok(
        "All projects deleted",
        DeletedResponse { deleted_count },
    ))
}

/// DELETE /projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<ApiResponse<()>> {
    state.project.delete(&id).await?;
    Ok(ApiResponse::ok(format!("Project {id} deleted"), ()))
}
