use std::io;

use chrono::Utc;
use tracing::info;

use crate::cli::{FetchArgs, OutputFormat};
use crate::client::GitHubClient;
use crate::config::Config;
use crate::error::Result;
use crate::{cutoff, fetcher, output};

/// Resolve the run's inputs, fetch every repository and print the report.
///
/// Configuration problems abort before any request is sent. Per-repository
/// failures are part of the report and do not fail the run.
pub async fn run(args: &FetchArgs, format: OutputFormat) -> Result<()> {
    let since = cutoff::resolve(args.weeks, args.since.as_deref(), Utc::now())?;

    let config = Config::load(args.config.as_deref())?;
    let token = config.github_token()?;
    let repositories = config.resolve_repositories(&args.repos)?;
    let branch = config.resolve_branch(args.branch.as_deref());

    let client = GitHubClient::new(token, config.api_url()?, config.timeout())?;

    info!(
        %since,
        %branch,
        repositories = repositories.len(),
        "fetching merged pull requests"
    );

    let results = fetcher::fetch_all(&client, &repositories, &branch, since).await;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_report(&mut out, format, since, &results)?;

    Ok(())
}
