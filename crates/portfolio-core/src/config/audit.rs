//! Audit trail configuration.

use serde::{Deserialize, Serialize};

/// Rotating JSON-lines audit log configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Path of the active audit log file.
    #[serde(default = "default_file")]
    pub file: String,
    /// Rotate before an append would grow the file past this many bytes.
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Number of rotated files to retain (`0` disables rotation).
    #[serde(default = "default_backup_count")]
    pub backup_count: u32,
    /// Capacity of the writer queue; entries beyond it are dropped.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
            max_bytes: default_max_bytes(),
            backup_count: default_backup_count(),
            queue_capacity: default_queue_capacity(),
        }
    }
}

fn default_file() -> String {
    "logs/audit.log".to_string()
}

fn default_max_bytes() -> u64 {
    5_000_000
}

fn default_backup_count() -> u32 {
    10
}

fn default_queue_capacity() -> usize {
    1024
}
