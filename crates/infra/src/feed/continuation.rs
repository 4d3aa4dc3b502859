//! Continuation link parsing
//!
//! The feed hands back whole follow-up URLs. Only the token parameter is
//! carried into the next request, never the link itself, so a stored cursor
//! stays valid even if the feed host or path changes between runs.

use url::Url;

const PAGE_TOKEN_PARAM: &str = "$skiptoken";
const DELTA_TOKEN_PARAM: &str = "$deltatoken";

/// Isolate the page-continuation token from a next link.
pub fn page_token(link: &str) -> Option<String> {
    token_param(link, PAGE_TOKEN_PARAM)
}

/// Isolate the change-cursor token from a delta link.
pub fn delta_token(link: &str) -> Option<String> {
    token_param(link, DELTA_TOKEN_PARAM)
}

fn token_param(link: &str, param: &str) -> Option<String> {
    let url = Url::parse(link.trim()).ok()?;
    let value = url
        .query_pairs()
        .find(|(key, _)| key == param)
        .map(|(_, value)| value.into_owned())?;

    if value.is_empty() {
        return None;
    }

    Some(value)
}
