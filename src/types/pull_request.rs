use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::User;

/// One element of the GitHub "list pull requests" response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub id: u64,
    pub number: u64,
    pub title: String,
    #[serde(rename = "html_url")]
    pub url: String,
    pub state: String,
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "super::user::null_as_default")]
    pub user: User,
}

impl PullRequest {
    /// Merged at or after `since`. Unmerged PRs never match.
    pub fn merged_since(&self, since: DateTime<Utc>) -> bool {
        self.merged_at.is_some_and(|merged| merged >= since)
    }

    /// Merged strictly before `since`. Unmerged PRs never match.
    pub fn merged_before(&self, since: DateTime<Utc>) -> bool {
        self.merged_at.is_some_and(|merged| merged < since)
    }
}
