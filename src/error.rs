use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetcherError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GitHub API returned status {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No GitHub token found. Set GITHUB_TOKEN env var or add github_token to the config file"
    )]
    MissingToken,

    #[error("Invalid date '{input}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Week count {0} reaches outside the supported date range")]
    InvalidWeeks(u32),

    #[error("No repositories given. Pass --repos or add repositories to the config file")]
    NoRepositories,

    #[error("Invalid API URL '{input}': {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, FetcherError>;

impl FetcherError {
    /// HTTP status carried by an API error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetcherError::ApiError { status, .. } => Some(*status),
            FetcherError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
