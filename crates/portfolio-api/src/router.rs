//! Route definitions, one function per resource.

use axum::Router;
use axum::http::{StatusCode, Uri, header};
use axum::response::IntoResponse;
use axum::routing::{MethodRouter, delete, get, options, post, put};

use portfolio_auth::PermissionSet;
use portfolio_core::error::AppError;

use crate::error::ApiError;
use crate::handlers::{admin, auth, experience, myinfo, project, root, skill};
use crate::middleware::guard::guarded;
use crate::state::AppState;

/// Builds the complete router with every route, before the shared layers.
pub fn build_router(state: &AppState) -> Router<AppState> {
    Router::new()
        .merge(root_routes(state))
        .merge(myinfo_routes(state))
        .merge(experience_routes(state))
        .merge(skill_routes(state))
        .merge(project_routes(state))
        .merge(admin_routes(state))
        .fallback(not_found)
}

/// Answers `OPTIONS` with `204` and the methods a path supports.
fn allow(methods: &'static str) -> MethodRouter<AppState> {
    options(move || async move { (StatusCode::NO_CONTENT, [(header::ALLOW, methods)]) })
}

fn root_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(root::index).merge(allow("GET, HEAD, OPTIONS")))
        .route("/login", post(auth::login).merge(allow("POST, OPTIONS")))
        .route(
            "/users/me",
            guarded(PermissionSet::User, state, get(auth::me)).merge(allow("GET, HEAD, OPTIONS")),
        )
}

fn myinfo_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/personal-info",
            get(myinfo::get_info)
                .merge(guarded(
                    PermissionSet::Owner,
                    state,
                    put(myinfo::put_info).delete(myinfo::delete_info),
                ))
                .merge(allow("GET, HEAD, PUT, DELETE, OPTIONS")),
        )
        .route(
            "/personal-info/{attribute}",
            guarded(PermissionSet::Owner, state, delete(myinfo::delete_attribute))
                .merge(allow("DELETE, OPTIONS")),
        )
}

fn experience_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/experiences",
            get(experience::list_experiences)
                .merge(guarded(
                    PermissionSet::Owner,
                    state,
                    put(experience::add_experience).delete(experience::delete_experiences),
                ))
                .merge(allow("GET, HEAD, PUT, DELETE, OPTIONS")),
        )
        .route(
            "/experiences/{company}",
            get(experience::company_experiences)
                .merge(guarded(
                    PermissionSet::Owner,
                    state,
                    delete(experience::delete_company),
                ))
                .merge(allow("GET, HEAD, DELETE, OPTIONS")),
        )
}

fn skill_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/skills",
            get(skill::list_skills)
                .merge(guarded(PermissionSet::Maintainer, state, post(skill::create_skill)))
                .merge(allow("GET, HEAD, POST, OPTIONS")),
        )
        .route(
            "/skills/{name}",
            get(skill::get_skill)
                .merge(guarded(
                    PermissionSet::Maintainer,
                    state,
                    put(skill::replace_skill).patch(skill::patch_skill),
                ))
                .merge(guarded(PermissionSet::Owner, state, delete(skill::delete_skill)))
                .merge(allow("GET, HEAD, PUT, PATCH, DELETE, OPTIONS")),
        )
}

fn project_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/projects",
            get(project::list_projects)
                .merge(guarded(PermissionSet::Maintainer, state, post(project::create_project)))
                .merge(guarded(PermissionSet::Owner, state, delete(project::delete_projects)))
                .merge(allow("GET, HEAD, POST, DELETE, OPTIONS")),
        )
        .route(
            "/projects/groups",
            get(project::list_groups).merge(allow("GET, HEAD, OPTIONS")),
        )
        .route(
            "/projects/groups/{type}",
            get(project::get_group).merge(allow("GET, HEAD, OPTIONS")),
        )
        .route(
            "/projects/{id}",
            get(project::get_project)
                .merge(guarded(
                    PermissionSet::Maintainer,
                    state,
                    put(project::put_project).delete(project::delete_project),
                ))
                .merge(allow("GET, HEAD, PUT, DELETE, OPTIONS")),
        )
}

fn admin_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/admin",
            guarded(PermissionSet::Owner, state, get(admin::overview))
                .merge(allow("GET, HEAD, OPTIONS")),
        )
        .route(
            "/admin/logs",
            guarded(
                PermissionSet::Owner,
                state,
                get(admin::list_logs).delete(admin::clear_logs),
            )
            .merge(allow("GET, HEAD, DELETE, OPTIONS")),
        )
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    ApiError(AppError::not_found(format!("No route for {}", uri.path())))
}
