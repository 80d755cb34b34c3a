//! Error types for mdc-import
//!
//! Only scan and output errors end a run. Every other variant is recorded
//! against the file that caused it and the batch moves on.

use crate::services::file_scanner::ScanError;
use crate::services::sanity_client::StoreError;
use crate::source::TreeError;
use std::path::PathBuf;
use thiserror::Error;

/// Import error type
#[derive(Debug, Error)]
pub enum ImportError {
    /// Source file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source markup is malformed
    #[error("{0}")]
    Parse(#[from] TreeError),

    /// Required root element missing
    #[error("Missing root element <{expected}> (found <{found}>)")]
    MissingRoot { expected: String, found: String },

    /// Required root element present but empty
    #[error("Root element <{0}> is empty")]
    EmptyRoot(String),

    /// Input directory could not be enumerated
    #[error("Scan failed: {0}")]
    Scan(#[from] ScanError),

    /// Document could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Remote store rejected or did not receive the document
    #[error("Remote write failed: {0}")]
    Store(#[from] StoreError),

    /// Output file could not be written
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImportError {
    /// Stable short code for failure reports
    pub fn code(&self) -> &'static str {
        match self {
            ImportError::Read { .. } => "READ_ERROR",
            ImportError::Parse(_) => "PARSE_ERROR",
            ImportError::MissingRoot { .. } | ImportError::EmptyRoot(_) => "STRUCTURE_ERROR",
            ImportError::Scan(_) => "SCAN_ERROR",
            ImportError::Serialize(_) => "SERIALIZE_ERROR",
            ImportError::Store(_) => "STORE_ERROR",
            ImportError::Output { .. } => "OUTPUT_ERROR",
        }
    }

    /// Whether the error ends the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(self, ImportError::Scan(_) | ImportError::Output { .. })
    }
}

/// Result type for import operations
pub type ImportResult<T> = Result<T, ImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_and_fatality() {
        let structural = ImportError::EmptyRoot("service".to_string());
        assert_eq!(structural.code(), "STRUCTURE_ERROR");
        assert!(!structural.is_fatal());
        assert_eq!(structural.to_string(), "Root element <service> is empty");

        let scan = ImportError::Scan(ScanError::PathNotFound(PathBuf::from("/missing")));
        assert_eq!(scan.code(), "SCAN_ERROR");
        assert!(scan.is_fatal());

        let parse = ImportError::Parse(TreeError::NoRoot);
        assert_eq!(parse.code(), "PARSE_ERROR");
        assert!(!parse.is_fatal());
    }
}
