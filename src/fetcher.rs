//! Merged pull request retrieval.
//!
//! Pages are requested newest-update-first and walked until either the server
//! runs out of pages or a page contains a pull request merged before the
//! cutoff. Because the listing is ordered by update time rather than merge
//! time, that stop rule is an approximation: a PR merged just before the
//! cutoff can sit on a page that is never fetched, and one merged in range can
//! be missed if it sits behind an older merge.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::client::GitHubClient;
use crate::error::Result;
use crate::types::{PullRequest, RepositoryFetchResult};

/// Pull requests kept from one page, and whether the page reached past the cutoff.
#[derive(Debug, Default, PartialEq)]
struct PageScan {
    merged: Vec<PullRequest>,
    found_older: bool,
}

impl PageScan {
    /// Every item on the page is evaluated, even after an older merge is seen.
    fn evaluate(items: Vec<PullRequest>, since: DateTime<Utc>) -> Self {
        items.into_iter().fold(Self::default(), |mut scan, pr| {
            if pr.merged_since(since) {
                scan.merged.push(pr);
            } else if pr.merged_before(since) {
                scan.found_older = true;
            }
            scan
        })
    }

    /// The cursor to follow after this page. An older merge ends pagination
    /// regardless of what the server offered.
    fn next_cursor(&self, offered: Option<String>) -> Option<String> {
        if self.found_older {
            None
        } else {
            offered
        }
    }
}

/// Fetch pull requests merged into `branch` at or after `since`, in the order
/// the server returned them.
///
/// The first failing request aborts the fetch; no partial list is returned.
pub async fn fetch_merged_since(
    client: &GitHubClient,
    repository: &str,
    branch: &str,
    since: DateTime<Utc>,
) -> Result<Vec<PullRequest>> {
    let mut merged = Vec::new();
    let mut cursor = Some(client.closed_pulls_url(repository, branch)?);
    let mut pages = 0usize;

    while let Some(url) = cursor.take() {
        let page = client.get_page::<PullRequest>(&url).await?;
        pages += 1;

        let fetched = page.items.len();
        let scan = PageScan::evaluate(page.items, since);
        cursor = scan.next_cursor(page.next);

        debug!(
            repository,
            page = pages,
            fetched,
            kept = scan.merged.len(),
            found_older = scan.found_older,
            "processed page"
        );

        merged.extend(scan.merged);
    }

    Ok(merged)
}

/// Fetch every repository in order, one at a time. A failing repository is
/// recorded in its own result and never stops the others.
pub async fn fetch_all(
    client: &GitHubClient,
    repositories: &[String],
    branch: &str,
    since: DateTime<Utc>,
) -> Vec<RepositoryFetchResult> {
    let mut results = Vec::with_capacity(repositories.len());

    for repository in repositories {
        let outcome = fetch_merged_since(client, repository, branch, since).await;
        match &outcome {
            Ok(prs) => info!(%repository, count = prs.len(), "fetched merged pull requests"),
            Err(e) => warn!(
                %repository,
                status = e.status(),
                error = %e,
                "failed to fetch pull requests"
            ),
        }
        results.push(RepositoryFetchResult::new(repository.as_str(), outcome));
    }

    results
}
