//! Audit middleware: one audit entry per request.

use std::time::Instant;

use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use portfolio_core::context::RequestContext;
use portfolio_service::AuditRecorder;
use portfolio_service::audit::RequestOutcome;

use super::context::capture;
use crate::state::AppState;

/// Records the request once the rest of the chain is done with it.
///
/// The entry is emitted from a drop guard, so a request whose future is
/// dropped before a response exists is still recorded with no status.
pub async fn audit_request(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let ctx = capture(&request);
    request.extensions_mut().insert(ctx.clone());

    let mut pending = PendingAudit {
        recorder: state.audit.clone(),
        context: ctx,
        started: Instant::now(),
        outcome: RequestOutcome::default(),
    };

    let response = next.run(request).await;

    pending.outcome.status = Some(response.status().as_u16());
    pending.outcome.location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    response
}

struct PendingAudit {
    recorder: AuditRecorder,
    context: RequestContext,
    started: Instant,
    outcome: RequestOutcome,
}

impl Drop for PendingAudit {
    fn drop(&mut self) {
        self.recorder.finish(&self.context, self.started, &self.outcome);
    }
}
