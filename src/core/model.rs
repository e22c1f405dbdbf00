use std::fmt;
use std::path::PathBuf;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Textual timestamp form shared by the store schema, the validation layer
/// and the audit log: `yyyy-MM-dd HH:mm:ss`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the delivery window, counted from the caller-supplied start.
pub const WINDOW_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub district: String,
    pub window_start: NaiveDateTime,
}

impl FilterCriteria {
    pub fn new(district: impl Into<String>, window_start: NaiveDateTime) -> Self {
        Self {
            district: district.into(),
            window_start,
        }
    }

    /// Upper window bound, inclusive. Always exactly `window_start` plus
    /// [`WINDOW_MINUTES`].
    pub fn window_end(&self) -> NaiveDateTime {
        self.window_start + Duration::minutes(WINDOW_MINUTES)
    }
}

/// One matched order row, every column rendered to text in the store's
/// native column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub values: Vec<String>,
}

impl OrderRow {
    /// The row as it appears in the export file.
    pub fn to_line(&self) -> String {
        self.values.join(", ")
    }
}

/// Outcome of one filter run. A failed export keeps the rows usable and
/// carries a user-facing notice instead of failing the run.
#[derive(Debug, Clone)]
pub struct FilterReport {
    pub rows: Vec<OrderRow>,
    pub exported_to: Option<PathBuf>,
    pub export_notice: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditLevel {
    Action,
    Error,
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Action => write!(f, "ACTION"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}
