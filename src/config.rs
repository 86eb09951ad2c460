//! Configuration for claimcheck.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (CLAIMCHECK_JUDGE_MODEL, CLAIMCHECK_API_BASE)
//! 2. Config file (.claimcheck/config.yaml)
//! 3. Built-in defaults
//!
//! Config file discovery searches the current directory and its parents for
//! `.claimcheck/config.yaml`. The file can override the default validation
//! options, the remote fetch timeout, and the judge settings.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::judge::JudgeSettings;
use crate::matcher::ValidationOptions;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    /// Default validation options, overridable per call from the CLI
    #[serde(default)]
    pub defaults: Option<ValidationOptions>,
    #[serde(default)]
    pub fetch: Option<FetchConfig>,
    #[serde(default)]
    pub judge: Option<JudgeConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FetchConfig {
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JudgeConfig {
    pub model: Option<String>,
    pub api_base: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Validation options used when the caller supplies none
    pub defaults: ValidationOptions,
    /// Timeout for remote document fetches
    pub fetch_timeout: Duration,
    /// Judge settings (model, API base)
    pub judge: JudgeSettings,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".claimcheck").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();

    let (defaults, fetch_timeout, mut judge) = if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        let defaults = config.defaults.unwrap_or_default();

        let fetch_timeout = Duration::from_secs(
            config
                .fetch
                .as_ref()
                .and_then(|f| f.timeout_seconds)
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
        );

        let mut judge = JudgeSettings::default();
        if let Some(judge_cfg) = config.judge {
            if let Some(model) = judge_cfg.model {
                judge.model = model;
            }
            if let Some(api_base) = judge_cfg.api_base {
                judge.api_base = api_base;
            }
        }

        (defaults, fetch_timeout, judge)
    } else {
        (
            ValidationOptions::default(),
            Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            JudgeSettings::default(),
        )
    };

    // Env vars win over the config file
    if let Ok(model) = std::env::var("CLAIMCHECK_JUDGE_MODEL") {
        judge.model = model;
    }
    if let Ok(api_base) = std::env::var("CLAIMCHECK_API_BASE") {
        judge.api_base = api_base;
    }

    Ok(ResolvedConfig {
        defaults,
        fetch_timeout,
        judge,
        config_file,
    })
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}
