// ABOUTME: JSONL command logger — appends one entry per executed command line.
// ABOUTME: Stores logs per starting directory in <log dir>/<workspace_hash>/<timestamp>.jsonl.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// How a logged command line ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandStatus {
    /// The handler completed.
    Ok,
    /// The handler reported a usage or filesystem error.
    Failed,
    /// No handler is registered under that name.
    Unknown,
    /// The handler ended the session.
    Exit,
}

/// A single JSONL log entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub working_directory: String,
    pub command: String,
    pub status: CommandStatus,
}

/// Computes a deterministic hex hash of a directory path.
pub fn workspace_hash(workspace_dir: &Path) -> String {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::hash::DefaultHasher::new();
    workspace_dir.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}

/// Appends executed command lines as JSONL to a per-session file.
pub struct CommandLog {
    writer: BufWriter<File>,
    pub path: PathBuf,
}

impl CommandLog {
    /// Create a log under `log_dir`, grouped by the directory the session started in.
    pub fn new(log_dir: &Path, workspace_dir: &Path) -> anyhow::Result<Self> {
        let session_dir = log_dir.join(workspace_hash(workspace_dir));
        Self::new_in_dir(&session_dir)
    }

    /// Create a log that writes straight into `session_dir`.
    ///
    /// Creates the directory and opens a new file named with the current
    /// timestamp.
    pub fn new_in_dir(session_dir: &Path) -> anyhow::Result<Self> {
        fs::create_dir_all(session_dir)?;
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = session_dir.join(format!("{}.jsonl", timestamp));
        let file = File::create(&path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Append one command line.
    pub fn record(
        &mut self,
        working_directory: &Path,
        command: &str,
        status: CommandStatus,
    ) -> anyhow::Result<()> {
        let entry = LogEntry {
            timestamp: Utc::now().to_rfc3339(),
            working_directory: working_directory.to_string_lossy().into_owned(),
            command: command.to_string(),
            status,
        };
        let line = serde_json::to_string(&entry)?;
        writeln!(self.writer, "{}", line)?;
        self.writer.flush()?;
        Ok(())
    }
}
