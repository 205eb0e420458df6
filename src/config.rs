use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{FetcherError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_BRANCH: &str = "main";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub github_token: Option<String>,
    pub default_branch: Option<String>,
    #[serde(default)]
    pub repositories: Vec<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load from an explicit path, or from the default location if none is given.
    ///
    /// A missing file at the default location yields an empty config; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let config_path = Self::config_path()?;
                if !config_path.exists() {
                    return Ok(Config::default());
                }
                Self::read(&config_path)
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FetcherError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&contents, path)
    }

    fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| FetcherError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "pr-fetcher")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(FetcherError::NoConfigDir)
    }

    /// Get token with env var taking precedence over config file
    pub fn github_token(&self) -> Result<String> {
        self.resolve_token(std::env::var("GITHUB_TOKEN").ok())
    }

    fn resolve_token(&self, from_env: Option<String>) -> Result<String> {
        from_env
            .or_else(|| self.github_token.clone())
            .filter(|token| !token.trim().is_empty())
            .ok_or(FetcherError::MissingToken)
    }

    /// Get branch, preferring explicit argument over default
    pub fn resolve_branch(&self, explicit: Option<&str>) -> String {
        explicit
            .map(String::from)
            .or_else(|| self.default_branch.clone())
            .unwrap_or_else(|| DEFAULT_BRANCH.to_string())
    }

    /// Repositories from the command line win over the configured list.
    pub fn resolve_repositories(&self, explicit: &[String]) -> Result<Vec<String>> {
        let repos: Vec<String> = if explicit.is_empty() {
            self.repositories.clone()
        } else {
            explicit.to_vec()
        };

        let repos: Vec<String> = repos
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect();

        if repos.is_empty() {
            return Err(FetcherError::NoRepositories);
        }
        Ok(repos)
    }

    /// API base URL, always ending in `/` so relative joins keep any path prefix
    /// (e.g. `/api/v3` on GitHub Enterprise).
    pub fn api_url(&self) -> Result<Url> {
        parse_api_url(self.api_url.as_deref().unwrap_or(DEFAULT_API_URL))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

pub fn parse_api_url(input: &str) -> Result<Url> {
    let normalized = if input.ends_with('/') {
        input.to_string()
    } else {
        format!("{input}/")
    };

    Url::parse(&normalized).map_err(|e| FetcherError::InvalidUrl {
        input: input.to_string(),
        source: e,
    })
}
