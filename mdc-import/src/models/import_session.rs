//! Batch run state
//!
//! A run moves `Scanning → (Parsing → Transforming → Emitting | Failed)* →
//! Finalizing → Done`. `Failed` only marks the current file; the run always
//! reaches `Done`.

use super::{EntityKind, FileFailure, ImportSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use uuid::Uuid;

/// Batch run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchState {
    /// Enumerating input files
    Scanning,
    /// Reading and parsing one file
    Parsing,
    /// Building the target document
    Transforming,
    /// Appending the document to the output or sending it to the store
    Emitting,
    /// Current file failed; the batch continues with the next one
    Failed,
    /// Writing output / building the summary
    Finalizing,
    /// Run finished
    Done,
}

/// State transition record
#[derive(Debug, Clone, Serialize)]
pub struct StateTransition {
    pub session_id: Uuid,
    pub old_state: BatchState,
    pub new_state: BatchState,
    pub transitioned_at: DateTime<Utc>,
}

/// In-memory state of one batch run
#[derive(Debug, Clone, Serialize)]
pub struct ImportSession {
    /// Unique session identifier
    pub session_id: Uuid,

    /// Entity kind being imported
    pub kind: EntityKind,

    /// Directory being scanned
    pub input_dir: PathBuf,

    /// Current state
    pub state: BatchState,

    /// Files discovered by the scan
    pub total_files: usize,

    /// Files processed so far
    pub processed: usize,

    /// Converted file names, input order
    pub succeeded: Vec<String>,

    /// Failed files, input order
    pub failures: Vec<FileFailure>,

    /// Session start time
    pub started_at: DateTime<Utc>,

    /// Session end time (once `Done`)
    pub ended_at: Option<DateTime<Utc>>,

    /// Every state change, oldest first
    pub transitions: Vec<StateTransition>,
}

impl ImportSession {
    pub fn new(kind: EntityKind, input_dir: PathBuf) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            kind,
            input_dir,
            state: BatchState::Scanning,
            total_files: 0,
            processed: 0,
            succeeded: Vec::new(),
            failures: Vec::new(),
            started_at: Utc::now(),
            ended_at: None,
            transitions: Vec::new(),
        }
    }

    /// Transition to new state, recording the change
    pub fn transition_to(&mut self, new_state: BatchState) {
        let transition = StateTransition {
            session_id: self.session_id,
            old_state: self.state,
            new_state,
            transitioned_at: Utc::now(),
        };
        tracing::debug!(
            session_id = %self.session_id,
            from = ?self.state,
            to = ?new_state,
            "Batch state transition"
        );
        self.state = new_state;

        if new_state == BatchState::Done {
            self.ended_at = Some(Utc::now());
        }

        self.transitions.push(transition);
    }

    pub fn record_success(&mut self, file: String) {
        self.processed += 1;
        self.succeeded.push(file);
    }

    pub fn record_failure(&mut self, failure: FileFailure) {
        self.processed += 1;
        self.failures.push(failure);
    }

    /// Completion summary
    pub fn summary(&self, output_path: Option<PathBuf>) -> ImportSummary {
        let end = self.ended_at.unwrap_or_else(Utc::now);
        ImportSummary {
            kind: self.kind,
            total_files: self.total_files,
            succeeded: self.succeeded.clone(),
            failed: self.failures.clone(),
            output_path,
            duration_ms: (end - self.started_at).num_milliseconds().max(0) as u64,
        }
    }
}
