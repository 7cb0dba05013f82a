//! Task-scoped request context.
//!
//! The context of the request currently being processed is bound to the
//! tokio task with [`scope`] and read anywhere downstream with [`current`].
//! The binding is released when the scoped future completes, fails, or is
//! dropped, and concurrent requests each see only their own value.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderMap, Method, Uri, header};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::result::AppResult;

tokio::task_local! {
    static CURRENT_REQUEST: Arc<RequestContext>;
}

/// Snapshot of the in-flight request made available to downstream code.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this request.
    pub request_id: Uuid,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Raw query string, if any.
    pub query: Option<String>,
    /// Request headers.
    pub headers: HeaderMap,
    /// Client IP address (first `X-Forwarded-For` hop, else the peer address).
    pub client_ip: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: Option<String>,
    /// When processing of this request started.
    pub started_at: DateTime<Utc>,
}

impl RequestContext {
    /// Build a context from the parts of an incoming request.
    pub fn new(method: Method, uri: &Uri, headers: HeaderMap, peer: Option<SocketAddr>) -> Self {
        let client_ip = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .or_else(|| peer.map(|addr| addr.ip().to_string()));

        let user_agent = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        Self {
            request_id: Uuid::now_v7(),
            method,
            path: uri.path().to_string(),
            query: uri.query().map(String::from),
            headers,
            client_ip,
            user_agent,
            started_at: Utc::now(),
        }
    }

    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns the raw `Authorization` header value.
    pub fn authorization(&self) -> Option<&str> {
        self.header(header::AUTHORIZATION.as_str())
    }
}

/// Run `fut` with `ctx` bound as the current request.
pub async fn scope<F>(ctx: RequestContext, fut: F) -> F::Output
where
    F: Future,
{
    CURRENT_REQUEST.scope(Arc::new(ctx), fut).await
}

/// Returns the request bound to the current task.
///
/// Fails with an internal error outside of any request scope.
pub fn current() -> AppResult<Arc<RequestContext>> {
    CURRENT_REQUEST
        .try_with(Arc::clone)
        .map_err(|_| AppError::internal("No request is bound to the current task"))
}

/// Returns the bound request, or `None` outside of any request scope.
pub fn try_current() -> Option<Arc<RequestContext>> {
    CURRENT_REQUEST.try_with(Arc::clone).ok()
}
