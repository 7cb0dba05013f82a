//! Size-bounded rotating JSON-lines file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

/// Appends lines to a file, rolling it over before it grows past `max_bytes`.
///
/// On rollover `file.{n-1}` becomes `file.{n}` down to `file` becoming
/// `file.1`; anything past `backup_count` is discarded. With
/// `backup_count == 0` or `max_bytes == 0` the file simply grows.
#[derive(Debug)]
pub struct RotatingFileWriter {
    /// Active file path.
    path: PathBuf,
    /// Rollover threshold in bytes.
    max_bytes: u64,
    /// Rotated files to retain.
    backup_count: u32,
    /// Open handle on the active file.
    file: File,
    /// Current size of the active file.
    size: u64,
}

impl RotatingFileWriter {
    /// Open (or create) the active file, creating parent directories.
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backup_count: u32) -> io::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let file = open_append(&path)?;
        let size = file.metadata()?.len();
        Ok(Self {
            path,
            max_bytes,
            backup_count,
            file,
            size,
        })
    }

    /// Path of the active file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line, rotating first if it would not fit.
    pub fn append_line(&mut self, line: &str) -> io::Result<()> {
        let len = line.len() as u64 + 1;
        if self.should_rollover(len) {
            self.rollover()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.file.flush()?;
        self.size += len;
        Ok(())
    }

    fn should_rollover(&self, incoming: u64) -> bool {
        self.backup_count > 0
            && self.max_bytes > 0
            && self.size > 0
            && self.size + incoming > self.max_bytes
    }

    fn rollover(&mut self) -> io::Result<()> {
        for index in (1..self.backup_count).rev() {
            let source = self.backup_path(index);
            if source.exists() {
                let target = self.backup_path(index + 1);
                if target.exists() {
                    fs::remove_file(&target)?;
                }
                fs::rename(&source, &target)?;
            }
        }
        let first = self.backup_path(1);
        if first.exists() {
            fs::remove_file(&first)?;
        }
        fs::rename(&self.path, &first)?;

        self.file = open_append(&self.path)?;
        self.size = 0;
        tracing::debug!(target: "audit", path = %self.path.display(), "Audit log rotated");
        Ok(())
    }

    fn backup_path(&self, index: u32) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".{index}"));
        PathBuf::from(name)
    }

    /// Read every line of the active file.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        let reader = BufReader::new(File::open(&self.path)?);
        reader
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .collect()
    }

    /// Truncate the active file, returning how many lines it held.
    pub fn clear(&mut self) -> io::Result<u64> {
        let count = self.read_lines()?.len() as u64;
        self.file.set_len(0)?;
        self.size = 0;
        Ok(count)
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
