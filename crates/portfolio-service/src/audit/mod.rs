//! Request audit trail.
//!
//! [`AuditRecorder`] turns a finished request into an [`AuditEntry`] and hands
//! it to the [`AuditSink`], whose single background writer appends JSON lines
//! to a size-rotated file.
//!
//! [`AuditEntry`]: portfolio_entity::audit::AuditEntry

pub mod recorder;
pub mod rotation;
pub mod sink;

pub use recorder::{AuditRecorder, RequestOutcome, is_self_redirect};
pub use rotation::RotatingFileWriter;
pub use sink::{AuditCommand, AuditSink};
