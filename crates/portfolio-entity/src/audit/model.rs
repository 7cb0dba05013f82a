//! Audit entry model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::user::Role;

/// One immutable record of a completed request.
///
/// Serialized as a single JSON line in the audit log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
    /// Token subject, if a valid token was presented.
    pub subject: Option<String>,
    /// Caller role (`user` when no valid token was presented).
    pub role: Option<Role>,
    /// Request path.
    pub path: String,
    /// HTTP method.
    pub method: String,
    /// Response status, or `None` when the request was cancelled first.
    pub status_code: Option<u16>,
    /// Client IP address.
    pub client_ip: Option<String>,
    /// Client User-Agent.
    pub user_agent: Option<String>,
    /// Wall-clock processing time in milliseconds, rounded to two decimals.
    pub duration_ms: f64,
}

impl AuditEntry {
    /// Round a millisecond duration to two decimal places.
    pub fn round_duration(ms: f64) -> f64 {
        (ms.max(0.0) * 100.0).round() / 100.0
    }
}
