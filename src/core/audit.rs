use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

use chrono::Local;

use crate::core::model::{AuditLevel, TIMESTAMP_FORMAT};
use crate::core::ports::AuditSink;

/// Append-only audit trail, one `<timestamp> [ACTION|ERROR]: <message>`
/// line per event. The file is opened and closed within each call.
///
/// A failed log write cannot be logged, so it is reported straight to the
/// operator on stderr and swallowed.
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn append(&self, level: AuditLevel, message: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{} [{}]: {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level,
            message
        )
    }
}

impl AuditSink for FileAuditLog {
    fn action(&self, message: &str) {
        if let Err(err) = self.append(AuditLevel::Action, message) {
            eprintln!("Could not write an action entry to the audit log: {err}");
        }
    }

    fn error(&self, message: &str) {
        if let Err(err) = self.append(AuditLevel::Error, message) {
            eprintln!("Could not write an error entry to the audit log: {err}");
        }
    }
}
