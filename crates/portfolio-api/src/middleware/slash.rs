//! Trailing-slash normalization.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

/// Answers `/path/` with a temporary redirect to `/path`, keeping the query.
pub async fn redirect_trailing_slash(request: Request, next: Next) -> Response {
    if let Some(target) = trimmed_target(request.uri().path(), request.uri().query()) {
        return Redirect::temporary(&target).into_response();
    }
    next.run(request).await
}

fn trimmed_target(path: &str, query: Option<&str>) -> Option<String> {
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }
    let trimmed = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    Some(match query {
        Some(q) => format!("{trimmed}?{q}"),
        None => trimmed.to_string(),
    })
}
