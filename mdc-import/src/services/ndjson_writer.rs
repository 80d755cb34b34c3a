//! NDJSON output
//!
//! One JSON document per line, lines joined by `\n` with no trailing
//! newline. The file is written even when there are no documents.

use crate::error::{ImportError, ImportResult};
use crate::models::Document;
use std::path::Path;

/// One document as a single JSON line
pub fn to_line(document: &Document) -> ImportResult<String> {
    Ok(serde_json::to_string(document)?)
}

/// Write `lines` to `path`, creating parent directories as needed
pub fn write_lines(path: &Path, lines: &[String]) -> ImportResult<()> {
    let output_error = |source| ImportError::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(output_error)?;
    }
    std::fs::write(path, lines.join("\n")).map_err(output_error)?;

    tracing::debug!(path = %path.display(), lines = lines.len(), "NDJSON file written");
    Ok(())
}
