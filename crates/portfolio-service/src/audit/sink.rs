//! Single-writer audit sink.

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use portfolio_core::config::AuditConfig;
use portfolio_core::error::{AppError, ErrorKind};
use portfolio_core::result::AppResult;
use portfolio_entity::audit::AuditEntry;

use super::rotation::RotatingFileWriter;

/// Commands accepted by the writer task.
#[derive(Debug)]
pub enum AuditCommand {
    /// Append an entry.
    Record(Box<AuditEntry>),
    /// Read the most recent `last` entries (all when `0`).
    Tail {
        last: usize,
        reply: oneshot::Sender<AppResult<Vec<AuditEntry>>>,
    },
    /// Truncate the active file.
    Clear { reply: oneshot::Sender<AppResult<u64>> },
}

/// Handle to the audit writer. Cheap to clone.
///
/// Every append, read and truncate goes through one queue consumed by one
/// blocking writer thread, so entries are never interleaved.
#[derive(Debug, Clone)]
pub struct AuditSink {
    tx: mpsc::Sender<AuditCommand>,
}

impl AuditSink {
    /// Open the audit file and start the writer.
    ///
    /// The writer stops once every handle has been dropped.
    pub fn spawn(config: &AuditConfig) -> AppResult<(Self, JoinHandle<()>)> {
        let writer = RotatingFileWriter::open(&config.file, config.max_bytes, config.backup_count)
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to open audit log '{}': {e}", config.file),
                    e,
                )
            })?;

        info!(
            file = %config.file,
            max_bytes = config.max_bytes,
            backup_count = config.backup_count,
            "Audit sink started"
        );

        let (tx, rx) = mpsc::channel(config.queue_capacity.max(1));
        let handle = tokio::task::spawn_blocking(move || run_writer(writer, rx));
        Ok((Self { tx }, handle))
    }

    /// Queue an entry without waiting.
    ///
    /// A full or closed queue drops the entry; the loss is reported on the
    /// `audit` log target and never reaches the caller.
    pub fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.tx.try_send(AuditCommand::Record(Box::new(entry))) {
            let reason = match e {
                mpsc::error::TrySendError::Full(_) => "queue full",
                mpsc::error::TrySendError::Closed(_) => "writer stopped",
            };
            warn!(target: "audit", reason, "Dropped audit entry");
        }
    }

    /// The most recent `last` entries of the active file, oldest first.
    pub async fn tail(&self, last: usize) -> AppResult<Vec<AuditEntry>> {
        let (reply, rx) = oneshot::channel();
        self.send(AuditCommand::Tail { last, reply }).await?;
        rx.await.map_err(|_| writer_gone())?
    }

    /// Truncate the active file, returning the number of entries removed.
    pub async fn clear(&self) -> AppResult<u64> {
        let (reply, rx) = oneshot::channel();
        self.send(AuditCommand::Clear { reply }).await?;
        rx.await.map_err(|_| writer_gone())?
    }

    async fn send(&self, command: AuditCommand) -> AppResult<()> {
        self.tx.send(command).await.map_err(|_| writer_gone())
    }
}

fn writer_gone() -> AppError {
    AppError::internal("Audit writer is not running")
}

fn run_writer(mut writer: RotatingFileWriter, mut rx: mpsc::Receiver<AuditCommand>) {
    while let Some(command) = rx.blocking_recv() {
        match command {
            AuditCommand::Record(entry) => {
                let written = serde_json::to_string(&entry)
                    .map_err(AppError::from)
                    .and_then(|line| writer.append_line(&line).map_err(AppError::from));
                if let Err(e) = written {
                    error!(target: "audit", error = %e, path = %entry.path, "Failed to write audit entry");
                }
            }
            AuditCommand::Tail { last, reply } => {
                let _ = reply.send(read_tail(&writer, last));
            }
            AuditCommand::Clear { reply } => {
                let _ = reply.send(writer.clear().map_err(AppError::from));
            }
        }
    }
    info!(target: "audit", "Audit writer stopped");
}

fn read_tail(writer: &RotatingFileWriter, last: usize) -> AppResult<Vec<AuditEntry>> {
    let lines = writer.read_lines()?;
    let start = match last {
        0 => 0,
        n => lines.len().saturating_sub(n),
    };
    Ok(lines[start..]
        .iter()
        .filter_map(|line| match serde_json::from_str(line) {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!(target: "audit", error = %e, "Skipping malformed audit line");
                None
            }
        })
        .collect())
}
