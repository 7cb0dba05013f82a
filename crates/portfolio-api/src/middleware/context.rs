//! Binds the request context to the task processing the request.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;

use portfolio_core::context::{self, RequestContext};

/// Runs the rest of the chain with the request bound as the current context.
///
/// Reuses the context captured by the audit middleware when present so
/// both see the same request id.
pub async fn bind_context(request: Request, next: Next) -> Response {
    let ctx = match request.extensions().get::<RequestContext>() {
        Some(ctx) => ctx.clone(),
        None => capture(&request),
    };
    context::scope(ctx, next.run(request)).await
}

/// Snapshot the parts of `request` the context carries.
pub fn capture(request: &Request) -> RequestContext {
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    RequestContext::new(
        request.method().clone(),
        request.uri(),
        request.headers().clone(),
        peer,
    )
}
