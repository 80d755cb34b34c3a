//! Batch runner
//!
//! Drives one import run for one entity kind:
//! SCANNING → (PARSING → TRANSFORMING → EMITTING | FAILED)* → FINALIZING → DONE
//!
//! Files are processed one at a time. A file that cannot be read, parsed or
//! transformed (or, in direct mode, written to the store) is logged, recorded
//! in the summary and skipped. Only scan and output-write failures end a run.

use crate::error::{ImportError, ImportResult};
use crate::models::{BatchState, Document, EntityKind, FileFailure, ImportSession, ImportSummary};
use crate::services::file_scanner::{file_name, FileScanner};
use crate::services::ndjson_writer;
use crate::services::sanity_client::DocumentStore;
use crate::source::SourceDocument;
use crate::transformers;
use std::path::{Path, PathBuf};

/// Runs conversions for one entity kind
#[derive(Debug, Clone)]
pub struct BatchRunner {
    kind: EntityKind,
    scanner: FileScanner,
}

impl BatchRunner {
    /// Runner using the kind's default scan depth
    pub fn new(kind: EntityKind) -> Self {
        let scanner = if kind.scans_recursively() {
            FileScanner::recursive()
        } else {
            FileScanner::flat()
        };
        Self { kind, scanner }
    }

    /// Replace the scanner (e.g. force recursion)
    pub fn with_scanner(mut self, scanner: FileScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Bulk mode: convert every file under `input_dir` into one NDJSON file
    pub fn convert_to_ndjson(&self, input_dir: &Path, output_path: &Path) -> ImportResult<ImportSummary> {
        let (mut session, files) = self.begin(input_dir)?;

        let mut lines = Vec::with_capacity(files.len());
        for path in &files {
            let Some(document) = self.convert_file(&mut session, path) else {
                continue;
            };

            session.transition_to(BatchState::Emitting);
            match ndjson_writer::to_line(&document) {
                Ok(line) => {
                    lines.push(line);
                    tracing::info!("✓ Converted: {}", document.label());
                    session.record_success(file_name(path));
                }
                Err(e) => self.fail(&mut session, path, &e),
            }
        }

        session.transition_to(BatchState::Finalizing);
        ndjson_writer::write_lines(output_path, &lines)?;
        session.transition_to(BatchState::Done);

        Ok(self.finish(&session, Some(output_path.to_path_buf())))
    }

    /// Direct mode: create-or-replace every converted document in `store`
    pub async fn upsert_all<S>(&self, store: &S, input_dir: &Path) -> ImportResult<ImportSummary>
    where
        S: DocumentStore + ?Sized,
    {
        let (mut session, files) = self.begin(input_dir)?;

        for path in &files {
            let Some(document) = self.convert_file(&mut session, path) else {
                continue;
            };

            session.transition_to(BatchState::Emitting);
            match store.create_or_replace(&document).await {
                Ok(()) => {
                    tracing::info!("✓ Imported: {}", document.label());
                    session.record_success(file_name(path));
                }
                Err(e) => self.fail(&mut session, path, &ImportError::from(e)),
            }
        }

        session.transition_to(BatchState::Finalizing);
        session.transition_to(BatchState::Done);

        Ok(self.finish(&session, None))
    }

    fn begin(&self, input_dir: &Path) -> ImportResult<(ImportSession, Vec<PathBuf>)> {
        let mut session = ImportSession::new(self.kind, input_dir.to_path_buf());

        tracing::info!(
            session_id = %session.session_id,
            kind = %self.kind,
            input = %input_dir.display(),
            recursive = self.scanner.is_recursive(),
            "Starting import"
        );

        let files = self.scanner.scan(input_dir)?;
        session.total_files = files.len();

        tracing::info!(
            "Converting {} {} files...",
            files.len(),
            self.kind.root_element()
        );

        Ok((session, files))
    }

    /// Parse and transform one file; failures are recorded on the session
    fn convert_file(&self, session: &mut ImportSession, path: &Path) -> Option<Document> {
        session.transition_to(BatchState::Parsing);
        let source: SourceDocument = match transformers::load_source(path) {
            Ok(source) => source,
            Err(e) => {
                self.fail(session, path, &e);
                return None;
            }
        };

        session.transition_to(BatchState::Transforming);
        match transformers::transform_document(self.kind, &source, &file_name(path)) {
            Ok(document) => Some(document),
            Err(e) => {
                self.fail(session, path, &e);
                None
            }
        }
    }

    fn fail(&self, session: &mut ImportSession, path: &Path, error: &ImportError) {
        let file = file_name(path);
        tracing::error!("✗ Failed: {} - {}", file, error);
        session.transition_to(BatchState::Failed);
        session.record_failure(FileFailure::new(
            file,
            error.code().to_string(),
            error.to_string(),
        ));
    }

    fn finish(&self, session: &ImportSession, output_path: Option<PathBuf>) -> ImportSummary {
        let summary = session.summary(output_path);
        tracing::info!(
            session_id = %session.session_id,
            kind = %self.kind,
            succeeded = summary.success_count(),
            failed = summary.failure_count(),
            duration_ms = summary.duration_ms,
            transitions = session.transitions.len(),
            "Import complete"
        );
        summary
    }
}
