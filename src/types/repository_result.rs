use crate::error::{FetcherError, Result};

use super::PullRequest;

/// Outcome of fetching one repository. A failed fetch carries no pull requests.
#[derive(Debug)]
pub struct RepositoryFetchResult {
    pub repository: String,
    pub outcome: Result<Vec<PullRequest>>,
}

impl RepositoryFetchResult {
    pub fn new(repository: impl Into<String>, outcome: Result<Vec<PullRequest>>) -> Self {
        Self {
            repository: repository.into(),
            outcome,
        }
    }

    /// Matched pull requests in source order; empty when the fetch failed.
    pub fn pull_requests(&self) -> &[PullRequest] {
        match &self.outcome {
            Ok(prs) => prs,
            Err(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&FetcherError> {
        self.outcome.as_ref().err()
    }
}

/// Total number of pull requests across successful repositories.
pub fn total_pull_requests(results: &[RepositoryFetchResult]) -> usize {
    results.iter().map(|r| r.pull_requests().len()).sum()
}
