//! Builds audit entries from finished requests.

use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;

use portfolio_auth::{TokenCodec, bearer_token};
use portfolio_core::context::RequestContext;
use portfolio_entity::audit::AuditEntry;
use portfolio_entity::user::Role;

use super::sink::AuditSink;

/// What is known about a request when it stops being processed.
#[derive(Debug, Clone, Default)]
pub struct RequestOutcome {
    /// Response status, `None` if the request was cancelled first.
    pub status: Option<u16>,
    /// Response `Location` header, if any.
    pub location: Option<String>,
}

/// Observes requests and emits one audit entry per completed request.
///
/// Identity is recovered optimistically from any bearer token: a token that
/// fails to verify degrades the identity to an anonymous `user` instead of
/// failing the request. A signed token without a role claim does not verify,
/// so its subject is not recorded either.
#[derive(Debug, Clone)]
pub struct AuditRecorder {
    /// Token verifier.
    codec: Arc<TokenCodec>,
    /// Destination of finished entries.
    sink: AuditSink,
}

impl AuditRecorder {
    /// Create a recorder writing to `sink`.
    pub fn new(codec: Arc<TokenCodec>, sink: AuditSink) -> Self {
        Self { codec, sink }
    }

    /// The sink entries are written to.
    pub fn sink(&self) -> &AuditSink {
        &self.sink
    }

    /// Subject and role carried by an `Authorization` header value.
    pub fn identity(&self, authorization: Option<&str>) -> (Option<String>, Option<Role>) {
        let Some(token) = bearer_token(authorization) else {
            return (None, None);
        };
        match self.codec.verify(token) {
            Ok(identity) => (Some(identity.subject), Some(identity.role)),
            Err(_) => (None, Some(Role::User)),
        }
    }

    /// Record the end of `request`, unless it was a redirect to itself.
    ///
    /// Returns the entry handed to the sink.
    pub fn finish(
        &self,
        request: &RequestContext,
        started: Instant,
        outcome: &RequestOutcome,
    ) -> Option<AuditEntry> {
        if let (Some(status), Some(location)) = (outcome.status, outcome.location.as_deref()) {
            if is_self_redirect(status, location, &request.path) {
                tracing::trace!(path = %request.path, "Self-redirect not audited");
                return None;
            }
        }

        let (subject, role) = self.identity(request.authorization());
        let entry = AuditEntry {
            timestamp: Utc::now(),
            subject,
            role,
            path: request.path.clone(),
            method: request.method.to_string(),
            status_code: outcome.status,
            client_ip: request.client_ip.clone(),
            user_agent: request.user_agent.clone(),
            duration_ms: AuditEntry::round_duration(started.elapsed().as_secs_f64() * 1000.0),
        };
        self.sink.record(entry.clone());
        Some(entry)
    }
}

/// Whether a response redirects to the request's own path.
///
/// Trailing slashes are ignored on both sides, as are the scheme, host and
/// query of the `Location` value.
pub fn is_self_redirect(status: u16, location: &str, request_path: &str) -> bool {
    if !(300..400).contains(&status) {
        return false;
    }
    normalize(location_path(location)) == normalize(request_path)
}

fn location_path(location: &str) -> &str {
    let without_origin = match location.find("://") {
        Some(scheme_end) => {
            let rest = &location[scheme_end + 3..];
            rest.find('/').map_or("", |slash| &rest[slash..])
        }
        None => location,
    };
    let end = without_origin
        .find(['?', '#'])
        .unwrap_or(without_origin.len());
    &without_origin[..end]
}

fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}
