use std::io::{self, Write};

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputFormat;
use crate::types::{total_pull_requests, PullRequest, RepositoryFetchResult};

const TITLE_WIDTH: usize = 60;

/// Write the report for all repositories in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    format: OutputFormat,
    since: DateTime<Utc>,
    results: &[RepositoryFetchResult],
) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, since, results),
        OutputFormat::Table => write_table(out, results),
        OutputFormat::Json => write_json(out, since, results),
    }
}

fn write_text<W: Write>(
    out: &mut W,
    since: DateTime<Utc>,
    results: &[RepositoryFetchResult],
) -> io::Result<()> {
    writeln!(
        out,
        "Pull requests merged since {}\n",
        format_datetime(since)
    )?;

    for result in results {
        if let Some(err) = result.error() {
            writeln!(
                out,
                "{} {}: {err}\n",
                "Error fetching PRs for".red().bold(),
                result.repository
            )?;
            continue;
        }

        let prs = result.pull_requests();
        writeln!(out, "{} {}", "Repository:".bold(), result.repository)?;
        writeln!(
            out,
            "Found {} merged PRs since {}\n",
            prs.len(),
            since.format("%Y-%m-%d")
        )?;

        for (i, pr) in prs.iter().enumerate() {
            writeln!(out, "{}. PR #{}: {}", i + 1, pr.number, pr.title)?;
            writeln!(out, "   URL: {}", pr.url)?;
            writeln!(out, "   Author: {}", author(pr))?;
            writeln!(out, "   Merged at: {}", merged_at(pr))?;
            writeln!(out)?;
        }

        writeln!(out, "{}", "-".repeat(50))?;
    }

    writeln!(
        out,
        "\nTotal PRs across all repositories: {}",
        total_pull_requests(results)
    )
}

#[derive(Tabled)]
struct PullRequestRow {
    #[tabled(rename = "Repository")]
    repository: String,
    #[tabled(rename = "PR")]
    number: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Merged")]
    merged_at: String,
}

impl PullRequestRow {
    fn new(repository: &str, pr: &PullRequest) -> Self {
        Self {
            repository: repository.to_string(),
            number: format!("#{}", pr.number),
            title: truncate(&pr.title, TITLE_WIDTH),
            author: author(pr).to_string(),
            merged_at: merged_at(pr),
        }
    }
}

fn write_table<W: Write>(out: &mut W, results: &[RepositoryFetchResult]) -> io::Result<()> {
    let rows: Vec<PullRequestRow> = results
        .iter()
        .flat_map(|result| {
            result
                .pull_requests()
                .iter()
                .map(|pr| PullRequestRow::new(&result.repository, pr))
        })
        .collect();

    if rows.is_empty() {
        writeln!(out, "No merged pull requests found.")?;
    } else {
        let table = Table::new(rows).with(Style::rounded()).to_string();
        writeln!(out, "{table}")?;
    }

    for result in results {
        if let Some(err) = result.error() {
            writeln!(out, "{} {}: {err}", "error:".red().bold(), result.repository)?;
        }
    }

    writeln!(out, "Total: {}", total_pull_requests(results))
}

#[derive(Serialize)]
struct JsonReport<'a> {
    since: DateTime<Utc>,
    repositories: Vec<JsonRepository<'a>>,
    total: usize,
}

#[derive(Serialize)]
struct JsonRepository<'a> {
    repository: &'a str,
    count: usize,
    pull_requests: &'a [PullRequest],
    error: Option<String>,
}

fn write_json<W: Write>(
    out: &mut W,
    since: DateTime<Utc>,
    results: &[RepositoryFetchResult],
) -> io::Result<()> {
    let report = JsonReport {
        since,
        repositories: results
            .iter()
            .map(|result| JsonRepository {
                repository: &result.repository,
                count: result.pull_requests().len(),
                pull_requests: result.pull_requests(),
                error: result.error().map(ToString::to_string),
            })
            .collect(),
        total: total_pull_requests(results),
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)
}

fn merged_at(pr: &PullRequest) -> String {
    pr.merged_at
        .map(format_datetime)
        .unwrap_or_else(|| "-".to_string())
}

fn author(pr: &PullRequest) -> &str {
    if pr.user.login.is_empty() {
        "-"
    } else {
        &pr.user.login
    }
}

fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Truncate a string with ellipsis
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
