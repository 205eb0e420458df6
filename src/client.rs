use std::time::Duration;

use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::{FetcherError, Result};
use crate::pagination::{self, Page};

const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github.v3+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const PAGE_SIZE: u32 = 100;

pub struct GitHubClient {
    http: Client,
    token: String,
    api_url: Url,
}

impl GitHubClient {
    pub fn new(token: String, api_url: Url, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            token,
            api_url,
        })
    }

    /// First-page URL for closed pull requests against `branch`, most recently
    /// updated first.
    pub fn closed_pulls_url(&self, repository: &str, branch: &str) -> Result<String> {
        let mut url = self
            .api_url
            .join(&format!("repos/{repository}/pulls"))
            .map_err(|e| FetcherError::InvalidUrl {
                input: repository.to_string(),
                source: e,
            })?;

        url.query_pairs_mut()
            .append_pair("state", "closed")
            .append_pair("base", branch)
            .append_pair("per_page", &PAGE_SIZE.to_string())
            .append_pair("sort", "updated")
            .append_pair("direction", "desc");

        Ok(url.into())
    }

    /// GET one page of a JSON array listing and read its `next` cursor.
    ///
    /// Any status other than 200 is returned as an error; nothing from that
    /// page is kept.
    pub async fn get_page<T: DeserializeOwned>(&self, url: &str) -> Result<Page<T>> {
        debug!(%url, "fetching page");

        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetcherError::ApiError {
                status: status.as_u16(),
                message: response
                    .text()
                    .await
                    .ok()
                    .and_then(|body| api_message(&body))
                    .or_else(|| status.canonical_reason().map(String::from))
                    .unwrap_or_else(|| "<no message>".to_string()),
            });
        }

        let next = pagination::next_link(response.headers());
        let body = response.text().await?;
        let items = serde_json::from_str(&body).map_err(|e| FetcherError::Decode {
            url: url.to_string(),
            source: e,
        })?;

        Ok(Page { items, next })
    }
}

/// The `message` field of a GitHub error body.
fn api_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .map(String::from)
}
