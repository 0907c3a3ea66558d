//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the environment if one exists
//! 2. Attempts to load from environment variables
//! 3. If the base URL is missing, falls back to loading from file
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `CALIBER_API_BASE_URL`: Backend base URL (required)
//! - `CALIBER_API_TIMEOUT_SECS`: Per-attempt request timeout in seconds
//! - `CALIBER_API_MAX_ATTEMPTS`: Attempts per request, including the first
//! - `CALIBER_API_BACKOFF_MS`: Base retry backoff in milliseconds
//! - `CALIBER_SESSION_PATH`: Session file path
//! - `CALIBER_LOG_LEVEL`: Default log filter
//! - `CALIBER_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json`, `./config.toml`, `./caliber.json`, `./caliber.toml`
//! 2. The same names in the parent and grandparent directories
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use caliber_domain::constants::{
    DEFAULT_API_BACKOFF_MS, DEFAULT_API_MAX_ATTEMPTS, DEFAULT_API_TIMEOUT_SECS,
};
use caliber_domain::{ApiConfig, CaliberError, Config, LoggingConfig, Result, SessionConfig};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "caliber.json", "caliber.toml"];

/// Load configuration with automatic fallback strategy
///
/// Reads `.env` (if present), then tries environment variables. If the
/// required variables are missing, falls back to a config file.
///
/// # Errors
/// Returns `CaliberError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - Required fields are missing
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// Only `CALIBER_API_BASE_URL` is required; every other variable falls
/// back to its default.
///
/// # Errors
/// Returns `CaliberError::Config` if the base URL is missing or a value
/// cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    let base_url = env_var("CALIBER_API_BASE_URL")?;
    let timeout_seconds = env_parse("CALIBER_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS)?;
    let max_attempts = env_parse("CALIBER_API_MAX_ATTEMPTS", DEFAULT_API_MAX_ATTEMPTS)?;
    let backoff_ms = env_parse("CALIBER_API_BACKOFF_MS", DEFAULT_API_BACKOFF_MS)?;

    let session = match std::env::var("CALIBER_SESSION_PATH") {
        Ok(path) => SessionConfig { path },
        Err(_) => SessionConfig::default(),
    };

    let defaults = LoggingConfig::default();
    let logging = LoggingConfig {
        level: std::env::var("CALIBER_LOG_LEVEL").unwrap_or(defaults.level),
        json: env_bool("CALIBER_LOG_JSON", defaults.json),
    };

    Ok(Config {
        api: ApiConfig { base_url, timeout_seconds, max_attempts, backoff_ms },
        session,
        logging,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `CaliberError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(CaliberError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            CaliberError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| CaliberError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration, picking the format from the file extension.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| CaliberError::from(InfraError::from(e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| CaliberError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(CaliberError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Returns the first existing candidate, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend(cwd.ancestors().take(3).map(Path::to_path_buf));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        CaliberError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| CaliberError::Config(format!("Invalid value for {}: {}", key, e))),
        Err(_) => Ok(default),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
