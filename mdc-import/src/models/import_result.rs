//! Import run results and per-file failures

use super::EntityKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// A source file that could not be converted or stored
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// Source file name
    pub file: String,

    /// Error code (e.g., "PARSE_ERROR", "STORE_ERROR")
    pub error_code: String,

    /// Human-readable error message
    pub error_message: String,

    /// When the failure occurred
    pub occurred_at: DateTime<Utc>,
}

impl FileFailure {
    pub fn new(file: String, error_code: String, error_message: String) -> Self {
        Self {
            file,
            error_code,
            error_message,
            occurred_at: Utc::now(),
        }
    }
}

/// Batch completion summary
#[derive(Debug, Clone, Serialize)]
pub struct ImportSummary {
    /// Entity kind of the batch
    pub kind: EntityKind,

    /// Files discovered by the scan
    pub total_files: usize,

    /// Files converted (and stored, in direct mode)
    pub succeeded: Vec<String>,

    /// Files that failed, with their errors
    pub failed: Vec<FileFailure>,

    /// NDJSON file written (bulk mode only)
    pub output_path: Option<PathBuf>,

    /// Wall-clock duration of the run
    pub duration_ms: u64,
}

impl ImportSummary {
    pub fn success_count(&self) -> usize {
        self.succeeded.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failed.len()
    }

    /// Console report printed at the end of a run
    pub fn render(&self) -> String {
        let mut out = String::new();
        let rule = "=".repeat(60);

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "IMPORT SUMMARY ({})", self.kind.plural());
        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(out, "Total files: {}", self.total_files);
        let _ = writeln!(out, "✓ Successfully converted: {}", self.success_count());
        let _ = writeln!(out, "✗ Failed: {}", self.failure_count());

        if !self.failed.is_empty() {
            let _ = writeln!(out, "\nFailed files:");
            for failure in &self.failed {
                let _ = writeln!(out, "  - {}: {}", failure.file, failure.error_message);
            }
        }

        if let Some(path) = &self.output_path {
            let _ = writeln!(out, "\n✓ Created NDJSON file: {}", path.display());
        }

        out
    }
}
