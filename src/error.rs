//! Error types for netsearch

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for netsearch operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Output(#[from] OutputError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
///
/// Status-carrying variants display the status as `<code> <reason>` followed
/// by the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{status} {body} (check MERAKI_DASHBOARD_API_KEY)")]
    Unauthorized { status: StatusCode, body: String },

    #[error("{status} {body} (the API key has no access to this resource)")]
    Forbidden { status: StatusCode, body: String },

    #[error("{status} {body}")]
    NotFound { status: StatusCode, body: String },

    #[error("{status} {body} (rate limit exceeded)")]
    RateLimited { status: StatusCode, body: String },

    #[error("{status} {body} (server error)")]
    ServerError { status: StatusCode, body: String },

    #[error("{status} {body}")]
    UnexpectedStatus { status: StatusCode, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Invalid {resource} record at index {index}: {reason}")]
    InvalidRecord {
        resource: &'static str,
        index: usize,
        reason: String,
    },
}

impl ApiError {
    /// Classify a non-success response by status code.
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized { status, body },
            StatusCode::FORBIDDEN => ApiError::Forbidden { status, body },
            StatusCode::NOT_FOUND => ApiError::NotFound { status, body },
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited { status, body },
            s if s.is_server_error() => ApiError::ServerError { status, body },
            _ => ApiError::UnexpectedStatus { status, body },
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API key not configured. Set MERAKI_DASHBOARD_API_KEY or pass --api-key.")]
    MissingApiKey,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Organization selection errors
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("No organizations are visible to this API key")]
    NoOrganizations,

    #[error("No organization selected (empty input)")]
    EmptyInput,

    #[error("Invalid selection '{0}': enter the number shown next to the organization")]
    NotANumber(String),

    #[error("Selection {index} is out of range: choose between 0 and {}", .count.saturating_sub(1))]
    OutOfRange { index: usize, count: usize },
}

/// Result file errors
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write {}: {reason}", .path.display())]
    Write { path: PathBuf, reason: String },
}
