//! Configuration management for netsearch
//!
//! Settings resolve once at startup with the precedence
//! CLI flag / environment variable > config file > built-in default.
//! The result is an immutable [`Config`] handed to every pipeline stage.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::debug;
use reqwest::Url;
use serde::Deserialize;

use crate::error::{ConfigError, Result};
use crate::search::SearchCriteria;

/// Dashboard API v1 base URL
pub const DEFAULT_BASE_URL: &str = "https://api.meraki.com/api/v1/";

/// Search term used when none is configured
pub const DEFAULT_SEARCH_TERM: &str = "abc";

/// Result file used when none is configured
pub const DEFAULT_OUTPUT: &str = "networks.csv";

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// On-disk configuration file (YAML). Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub search_term: Option<String>,
    pub output: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    /// Get the default config file path, if a home directory is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".meraki-netsearch").join("config.yaml"))
    }

    /// Load from an explicit path, or from the default path when it exists.
    ///
    /// A missing explicit file is an error.
    pub fn load_at(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_optional(Self::default_path()),
        }
    }

    /// Load the file at `path` if there is one; otherwise use an empty config.
    fn load_optional(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                debug!("No config file at {}", path.display());
                Ok(Self::default())
            }
            None => {
                debug!("No home directory, skipping config file");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()).into());
        }

        debug!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: FileConfig = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }
}

/// Values supplied on the command line or through the environment.
///
/// Built from the parsed CLI; `None` means "fall through to the next layer".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub search_term: Option<String>,
    pub output: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

/// Fully resolved run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Dashboard API key
    pub api_key: String,

    /// API base URL, always ending in `/`
    pub base_url: Url,

    /// Network name filter
    pub search: SearchCriteria,

    /// Result file path
    pub output: PathBuf,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Merge the override layer over the file layer over the defaults.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Self> {
        let api_key = overrides
            .api_key
            .or(file.api_key)
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = parse_base_url(
            overrides
                .base_url
                .or(file.base_url)
                .as_deref()
                .unwrap_or(DEFAULT_BASE_URL),
        )?;

        let search_term = overrides
            .search_term
            .or(file.search_term)
            .unwrap_or_else(|| DEFAULT_SEARCH_TERM.to_string());

        let output = overrides
            .output
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let timeout_secs = overrides
            .timeout_secs
            .or(file.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("timeout must be at least 1 second".to_string()).into(),
            );
        }

        debug!(
            "Resolved config: base_url={} search_term={:?} output={} timeout={}s",
            base_url,
            search_term,
            output.display(),
            timeout_secs
        );

        Ok(Self {
            api_key,
            base_url,
            search: SearchCriteria::new(search_term),
            output,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse an http(s) base URL and make sure it ends in `/`.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| ConfigError::Invalid(format!("base URL '{}': {}", raw, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(format!(
            "base URL '{}' must use http or https",
            raw
        ))
        .into());
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
