//! In-memory document store

use async_trait::async_trait;
use mdc_import::services::{DocumentStore, StoreError};
use mdc_import::Document;
use std::collections::HashSet;
use std::sync::Mutex;

/// Records written documents; rejects configured ids with an API error
#[derive(Default)]
pub struct FakeStore {
    written: Mutex<Vec<serde_json::Value>>,
    rejected_ids: HashSet<String>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting(ids: &[&str]) -> Self {
        Self {
            written: Mutex::new(Vec::new()),
            rejected_ids: ids.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn written(&self) -> Vec<serde_json::Value> {
        self.written.lock().unwrap().clone()
    }

    pub fn written_ids(&self) -> Vec<String> {
        self.written()
            .iter()
            .map(|doc| doc["_id"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn create_or_replace(&self, document: &Document) -> Result<(), StoreError> {
        if self.rejected_ids.contains(document.id()) {
            return Err(StoreError::Api(
                409,
                format!("Document {} is locked", document.id()),
            ));
        }

        let value = serde_json::to_value(document)?;
        let mut written = self.written.lock().unwrap();
        written.retain(|doc| doc["_id"] != value["_id"]);
        written.push(value);
        Ok(())
    }
}
