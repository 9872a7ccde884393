//! Configuration management for amp.
//!
//! Credentials come from a JSON config file (default `~/.amp.json`). Any field the
//! file leaves empty is taken from the environment instead:
//!
//! 1. `~/.amp.json` (or the file passed with `--config`)
//! 2. Environment variables, including those loaded from `<data_local_dir>/amp/.env`
//! 3. Application defaults (only the API base URL has one)

use std::{
    env,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::AmpError;

pub const DEFAULT_API_URL: &str = "https://api.music.apple.com/v1";
pub const DEFAULT_CONFIG_FILE: &str = ".amp.json";

pub const ENV_DEVELOPER_TOKEN: &str = "DEVELOPER_TOKEN";
pub const ENV_USER_TOKEN: &str = "USER_TOKEN";
pub const ENV_API_URL: &str = "AMP_API_URL";

const MISSING_TOKENS: &str = "Developer token and user token must be provided either in the config file or as environment variables.";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file lives at `<data_local_dir>/amp/.env`:
/// - Linux: `~/.local/share/amp/.env`
/// - macOS: `~/Library/Application Support/amp/.env`
/// - Windows: `%LOCALAPPDATA%/amp/.env`
///
/// A missing file is not an error. Variables already present in the process
/// environment win over the file.
///
/// # Errors
///
/// Returns an error string if the file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("amp/.env");
    load_env_from(&path)
}

/// Loads `path` into the process environment if it is a file. Nothing is
/// created on disk.
pub fn load_env_from(path: &Path) -> Result<(), String> {
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Returns `~/.amp.json`, or `.amp.json` in the working directory when no home
/// directory can be determined.
pub fn default_config_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(DEFAULT_CONFIG_FILE),
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    }
}

/// The on-disk shape of the config file. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub developer_token: String,
    #[serde(default)]
    pub user_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

/// Resolved credentials and endpoint. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub developer_token: String,
    pub user_token: String,
    pub api_url: String,
}

impl Config {
    /// Loads the config file and fills empty fields from the process environment.
    ///
    /// An explicitly given `path` must exist. The default path may be absent, in
    /// which case credentials come from the environment only.
    ///
    /// # Errors
    ///
    /// Returns [`AmpError::Config`] when the file cannot be read or parsed, or
    /// when either token is still empty after the environment fallback.
    pub async fn load(path: Option<&Path>) -> Result<Self, AmpError> {
        let file = match path {
            Some(path) => read_file_config(path, true).await?,
            None => read_file_config(&default_config_path(), false).await?,
        };

        Self::resolve(file, |key| env::var(key).ok())
    }

    /// Merges a parsed config file with an environment lookup.
    ///
    /// `env` is called only for fields the file leaves empty.
    pub fn resolve<F>(file: FileConfig, env: F) -> Result<Self, AmpError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| env(key).filter(|v| !v.is_empty());

        let developer_token = non_empty(file.developer_token)
            .or_else(|| lookup(ENV_DEVELOPER_TOKEN))
            .unwrap_or_default();
        let user_token = non_empty(file.user_token)
            .or_else(|| lookup(ENV_USER_TOKEN))
            .unwrap_or_default();

        if developer_token.is_empty() || user_token.is_empty() {
            return Err(AmpError::Config(MISSING_TOKENS.to_string()));
        }

        let api_url = file
            .api_url
            .and_then(non_empty)
            .or_else(|| lookup(ENV_API_URL))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config {
            developer_token,
            user_token,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Reads and parses a config file.
///
/// A missing file yields an empty [`FileConfig`] unless `required` is set.
pub async fn read_file_config(path: &Path, required: bool) -> Result<FileConfig, AmpError> {
    let content = match async_fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound && !required => {
            return Ok(FileConfig::default());
        }
        Err(e) => {
            return Err(AmpError::Config(format!(
                "Failed to read file {}: {}",
                path.display(),
                e
            )));
        }
    };

    serde_json::from_str(&content).map_err(|e| {
        AmpError::Config(format!("Failed to read config {}: {}", path.display(), e))
    })
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
