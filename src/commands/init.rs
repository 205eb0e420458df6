use std::io::{self, BufRead, Write};

use serde::Serialize;

use crate::config::{Config, DEFAULT_BRANCH};
use crate::error::{FetcherError, Result};

#[derive(Serialize)]
struct NewConfig {
    github_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    default_branch: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    repositories: Vec<String>,
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;
    let stdin = io::stdin();
    let mut input = stdin.lock();

    if config_path.exists() {
        let answer = prompt(
            &mut input,
            &format!(
                "Config file already exists at {}. Overwrite? [y/N] ",
                config_path.display()
            ),
        )?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("pr-fetcher Configuration");
    println!("========================\n");

    let github_token = prompt(
        &mut input,
        "Enter your GitHub token (create one at https://github.com/settings/tokens): ",
    )?;
    if github_token.is_empty() {
        return Err(FetcherError::MissingToken);
    }

    let default_branch = prompt(
        &mut input,
        &format!("Enter default base branch [{DEFAULT_BRANCH}]: "),
    )?;
    let repositories = prompt(
        &mut input,
        "Enter repositories to watch, comma-separated (e.g., owner/repo) [optional]: ",
    )?;

    let new_config = NewConfig {
        github_token,
        default_branch: Some(default_branch).filter(|b| !b.is_empty()),
        repositories: split_repositories(&repositories),
    };
    let contents = toml::to_string(&new_config).map_err(io::Error::other)?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| FetcherError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    std::fs::write(&config_path, contents).map_err(|e| FetcherError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now run 'pr-fetcher'!");

    Ok(())
}

fn prompt(input: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn split_repositories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_repositories() {
        assert_eq!(
            split_repositories(" org/a, org/b ,,"),
            vec!["org/a".to_string(), "org/b".to_string()]
        );
        assert!(split_repositories("").is_empty());
    }

    #[test]
    fn test_written_config_loads_back() {
        let contents = toml::to_string(&NewConfig {
            github_token: "ghp_\"quoted\"".to_string(),
            default_branch: None,
            repositories: vec!["org/a".to_string()],
        })
        .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, contents).unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.github_token.as_deref(), Some("ghp_\"quoted\""));
        assert_eq!(config.resolve_branch(None), "main");
        assert_eq!(config.repositories, vec!["org/a"]);
    }
}
