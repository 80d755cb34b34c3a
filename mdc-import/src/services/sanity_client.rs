//! Sanity content store client
//!
//! Direct mode writes each document with a single `createOrReplace`
//! mutation against the HTTP mutate endpoint. There is no batching and no
//! retry: a failed write is reported against its source file.

use crate::models::Document;
use async_trait::async_trait;
use mdc_common::config::{resolve_optional, resolve_setting, SanityConfig};
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("mdc-import/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const PROJECT_ID_ENV: &str = "SANITY_PROJECT_ID";
pub const DATASET_ENV: &str = "SANITY_DATASET";
pub const API_VERSION_ENV: &str = "SANITY_API_VERSION";
pub const TOKEN_ENV: &str = "SANITY_API_TOKEN";

pub const DEFAULT_DATASET: &str = "production";
pub const DEFAULT_API_VERSION: &str = "2024-01-01";

/// Remote store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Store configuration error: {0}")]
    Config(String),

    #[error("Unserializable document: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Create-or-replace sink for converted documents
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write `document`, replacing any existing document with the same `_id`
    async fn create_or_replace(&self, document: &Document) -> Result<(), StoreError>;
}

/// Resolved connection settings
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSettings {
    pub project_id: String,
    pub dataset: String,
    pub api_version: String,
    pub token: String,
}

impl StoreSettings {
    /// Resolve from environment and TOML (ENV > TOML > default)
    ///
    /// Project id and token have no default; either missing is an error.
    pub fn resolve(toml: &SanityConfig) -> Result<Self, StoreError> {
        let project_id = resolve_optional(None, PROJECT_ID_ENV, toml.project_id.as_deref())
            .ok_or_else(|| StoreError::Config(format!("{} is not set", PROJECT_ID_ENV)))?;
        let token = resolve_optional(None, TOKEN_ENV, toml.token.as_deref())
            .ok_or_else(|| StoreError::Config(format!("{} is not set", TOKEN_ENV)))?;

        Ok(Self {
            project_id,
            dataset: resolve_dataset(toml),
            api_version: resolve_setting(
                None,
                API_VERSION_ENV,
                toml.api_version.as_deref(),
                DEFAULT_API_VERSION,
            ),
            token,
        })
    }

    /// Mutate endpoint for the configured project and dataset
    pub fn mutate_url(&self) -> String {
        let version = self.api_version.trim_start_matches('v');
        format!(
            "https://{}.api.sanity.io/v{}/data/mutate/{}",
            self.project_id, version, self.dataset
        )
    }
}

/// Target dataset (ENV > TOML > default)
pub fn resolve_dataset(toml: &SanityConfig) -> String {
    resolve_setting(None, DATASET_ENV, toml.dataset.as_deref(), DEFAULT_DATASET)
}

/// Request body for a single create-or-replace
pub fn mutation_body(document: &Value) -> Value {
    json!({ "mutations": [{ "createOrReplace": document }] })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MutateResponse {
    transaction_id: Option<String>,
    #[serde(default)]
    results: Vec<MutateResult>,
}

#[derive(Debug, Deserialize)]
struct MutateResult {
    id: Option<String>,
    operation: Option<String>,
}

/// HTTP client for the Sanity mutate API
pub struct SanityClient {
    http_client: reqwest::Client,
    settings: StoreSettings,
}

impl SanityClient {
    pub fn new(settings: StoreSettings) -> Result<Self, StoreError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            settings,
        })
    }
}

#[async_trait]
impl DocumentStore for SanityClient {
    async fn create_or_replace(&self, document: &Document) -> Result<(), StoreError> {
        let url = self.settings.mutate_url();
        let payload = serde_json::to_value(document)?;

        tracing::debug!(id = %document.id(), url = %url, "Sending createOrReplace mutation");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.settings.token)
            .json(&mutation_body(&payload))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(StoreError::Api(status.as_u16(), error_text));
        }

        match response.json::<MutateResponse>().await {
            Ok(body) => {
                let result = body.results.first();
                tracing::debug!(
                    transaction = %body.transaction_id.as_deref().unwrap_or("-"),
                    id = %result.and_then(|r| r.id.as_deref()).unwrap_or(document.id()),
                    operation = %result.and_then(|r| r.operation.as_deref()).unwrap_or("-"),
                    "Mutation committed"
                );
            }
            Err(e) => tracing::warn!("Unreadable mutate response for {}: {}", document.id(), e),
        }

        Ok(())
    }
}
