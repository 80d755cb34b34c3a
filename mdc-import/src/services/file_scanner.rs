//! Source file scanner
//!
//! Flat scans list the files directly inside the input directory. Recursive
//! scans descend into subdirectories. Both skip dot-files (`.DS_Store`,
//! editor swap files) and dot-directories.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

/// Scanner errors
#[derive(Debug, Error)]
pub enum ScanError {
    /// Specified path does not exist
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// General I/O error
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Source file scanner
#[derive(Debug, Clone)]
pub struct FileScanner {
    recursive: bool,
}

impl FileScanner {
    /// One level only
    pub fn flat() -> Self {
        Self { recursive: false }
    }

    /// Descend into subdirectories
    pub fn recursive() -> Self {
        Self { recursive: true }
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Enumerate candidate files under `root_path`
    ///
    /// Entries are returned sorted by file name within each directory.
    /// Unreadable entries are logged and skipped; only a missing or
    /// non-directory root is an error.
    pub fn scan(&self, root_path: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root_path.exists() {
            return Err(ScanError::PathNotFound(root_path.to_path_buf()));
        }

        if !root_path.is_dir() {
            return Err(ScanError::NotADirectory(root_path.to_path_buf()));
        }

        let max_depth = if self.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(root_path)
            .follow_links(true)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
                Err(e) => {
                    if e.depth() == 0 {
                        return Err(ScanError::IoError(e.to_string()));
                    }
                    // Continue scanning, don't abort
                    tracing::warn!("Error accessing entry: {}", e);
                }
            }
        }

        tracing::debug!(
            root = %root_path.display(),
            recursive = self.recursive,
            "Scan complete: {} files discovered",
            files.len()
        );

        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::flat()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Final path component, used as document slug and in failure reports
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files.iter().map(|p| file_name(p)).collect()
    }

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("police"), "<organization/>").unwrap();
        fs::write(root.join("library"), "<organization/>").unwrap();
        fs::write(root.join(".DS_Store"), "junk").unwrap();
        fs::create_dir_all(root.join("colors/nested")).unwrap();
        fs::write(root.join("colors/primary"), "<taxonomy/>").unwrap();
        fs::write(root.join("colors/nested/secondary"), "<taxonomy/>").unwrap();
        fs::write(root.join("colors/.hidden"), "<taxonomy/>").unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/HEAD"), "ref").unwrap();
        dir
    }

    #[test]
    fn test_flat_scan_skips_directories_and_dot_files() {
        let dir = fixture();
        let files = FileScanner::flat().scan(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["library", "police"]);
    }

    #[test]
    fn test_recursive_scan_descends() {
        let dir = fixture();
        let files = FileScanner::recursive().scan(dir.path()).unwrap();
        let mut found = names(&files);
        found.sort();
        assert_eq!(found, vec!["library", "police", "primary", "secondary"]);
    }

    #[test]
    fn test_scan_nonexistent_path() {
        let result = FileScanner::flat().scan(Path::new("/nonexistent/path"));
        match result.unwrap_err() {
            ScanError::PathNotFound(_) => {}
            other => panic!("Expected PathNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_scan_file_as_directory() {
        let dir = fixture();
        let result = FileScanner::flat().scan(&dir.path().join("police"));
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        assert!(FileScanner::recursive().scan(dir.path()).unwrap().is_empty());
    }
}
