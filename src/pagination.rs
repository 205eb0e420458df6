//! Cursor handling for GitHub's `Link` response header.

use reqwest::header::{HeaderMap, LINK};

/// One page of decoded results and the URL of the page after it, if any.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// Extract the `rel="next"` URL from all `Link` headers on a response.
pub fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .find_map(parse_next_entry)
}

/// Parse one `<url>; rel="next"` entry. Other relations yield `None`.
fn parse_next_entry(entry: &str) -> Option<String> {
    let mut parts = entry.trim().split(';');
    let target = parts.next()?.trim();
    let is_next = parts.any(|param| {
        let param = param.trim();
        param == r#"rel="next""# || param == "rel=next"
    });
    if !is_next {
        return None;
    }

    let url = target.strip_prefix('<')?.strip_suffix('>')?;
    if url.is_empty() {
        None
    } else {
        Some(url.to_string())
    }
}
