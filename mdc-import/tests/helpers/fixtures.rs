//! Source fixture builders

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary input root with an output directory beside it
pub struct SourceTree {
    dir: TempDir,
}

impl SourceTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Per-kind input folder, created on demand
    pub fn input(&self, folder: &str) -> PathBuf {
        let path = self.dir.path().join("schemaTypes").join(folder);
        fs::create_dir_all(&path).expect("create input dir");
        path
    }

    pub fn output(&self, file: &str) -> PathBuf {
        self.dir.path().join("out").join(file)
    }
}

/// Write one source file (`relative` may include subdirectories)
pub fn write_source(dir: &Path, relative: &str, xml: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture parent");
    }
    fs::write(&path, xml).expect("write fixture");
    path
}

/// Parse an NDJSON output file; an empty file yields no documents
pub fn read_ndjson(path: &Path) -> Vec<Value> {
    let text = fs::read_to_string(path).expect("read output");
    assert!(!text.ends_with('\n'), "output must not end with a newline");
    text.split('\n')
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str(line).expect("valid JSON line"))
        .collect()
}

pub fn organization(name: &str) -> String {
    format!(
        "<organization><name>{}</name><agencyType>department</agencyType></organization>",
        name
    )
}

pub fn location(name: &str) -> String {
    format!(
        "<location><name>{}</name><physicalAddress><city>Miami</city></physicalAddress></location>",
        name
    )
}

pub fn taxonomy(list_name: &str) -> String {
    format!(
        "<taxonomy><listName>{}</listName><option><label>A</label><value>a</value></option></taxonomy>",
        list_name
    )
}
