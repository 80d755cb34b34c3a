//! Configuration loading and setting resolution
//!
//! Every setting follows the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "MDC_IMPORT_CONFIG";

/// Bootstrap configuration loaded from TOML file
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct TomlConfig {
    /// Directory holding the per-kind source folders
    #[serde(default)]
    pub input_root: Option<PathBuf>,

    /// Directory receiving the NDJSON output files
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Remote content store credentials
    #[serde(default)]
    pub sanity: SanityConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Content store section (`[sanity]`)
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SanityConfig {
    pub project_id: Option<String>,
    pub dataset: Option<String>,
    pub api_version: Option<String>,
    pub token: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load the TOML config
///
/// An explicit path (CLI or `MDC_IMPORT_CONFIG`) must exist. Without one the
/// platform config file is used when present, otherwise built-in defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<TomlConfig> {
    let env_path = std::env::var(CONFIG_ENV_VAR)
        .ok()
        .filter(|v| is_set(v))
        .map(PathBuf::from);

    if let Some(path) = explicit.map(Path::to_path_buf).or(env_path) {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return read_toml_config(&path);
    }

    match default_config_path() {
        Some(path) if path.exists() => read_toml_config(&path),
        _ => {
            debug!("No config file found, using built-in defaults");
            Ok(TomlConfig::default())
        }
    }
}

/// Read and parse a TOML config file
pub fn read_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = toml::from_str(&content)
        .map_err(|e| Error::Config(format!("Parse TOML failed ({}): {}", path.display(), e)))?;
    info!("Loaded configuration from {}", path.display());
    Ok(config)
}

/// Platform config file location (`<config_dir>/mdc/import.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mdc").join("import.toml"))
}

/// Resolve an optional setting: CLI > ENV > TOML
///
/// Blank values at any tier are skipped.
pub fn resolve_optional(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_value: Option<&str>,
) -> Option<String> {
    if let Some(value) = cli_arg.filter(|v| is_set(v)) {
        return Some(value.to_string());
    }

    if let Ok(value) = std::env::var(env_var_name) {
        if is_set(&value) {
            return Some(value);
        }
    }

    toml_value.filter(|v| is_set(v)).map(str::to_string)
}

/// Resolve a setting with a compiled default: CLI > ENV > TOML > default
pub fn resolve_setting(
    cli_arg: Option<&str>,
    env_var_name: &str,
    toml_value: Option<&str>,
    default: &str,
) -> String {
    resolve_optional(cli_arg, env_var_name, toml_value).unwrap_or_else(|| default.to_string())
}

/// Resolve a path setting: CLI > ENV > TOML > default
pub fn resolve_path(
    cli_arg: Option<&Path>,
    env_var_name: &str,
    toml_value: Option<&Path>,
    default: &str,
) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(value) = std::env::var(env_var_name) {
        if is_set(&value) {
            return PathBuf::from(value);
        }
    }

    toml_value
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Non-empty, non-whitespace
pub fn is_set(value: &str) -> bool {
    !value.trim().is_empty()
}
