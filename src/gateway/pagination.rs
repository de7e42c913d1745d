//! Cursor-based pagination over Stash's paged envelope.
//!
//! A walk either returns every value the server holds or fails as a whole.
//! Callers reconcile comment state against these lists, and a silently
//! truncated list would read as "those comments were deleted".

use serde::de::DeserializeOwned;
use url::Url;

use crate::error::StashError;
use crate::models::Page;

use super::client::HttpGateway;

/// Pages fetched per listing call before the walk is abandoned.
pub(super) const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Appends a `start` cursor to `url`, preserving any existing query.
pub(super) fn with_start_cursor(url: &str, start: u64) -> Result<String, StashError> {
    let mut parsed = Url::parse(url).map_err(|error| {
        StashError::InvalidUri(format!("page URL {url} is not absolute: {error}"))
    })?;
    parsed
        .query_pairs_mut()
        .append_pair("start", &start.to_string());
    Ok(String::from(parsed))
}

/// Walks every page at `url` and concatenates the values in server order.
///
/// The first page is requested with `start=0`; each follow-up promotes the
/// previous page's `nextPageStart` verbatim. The walk stops at the page that
/// reports `isLastPage`, or fails with `PageLimitExceeded` once the gateway's
/// page ceiling is reached.
pub(super) async fn fetch_all_pages<T: DeserializeOwned>(
    gateway: &HttpGateway,
    url: &str,
) -> Result<Vec<T>, StashError> {
    let mut values = Vec::new();
    let mut start = 0;

    for _ in 0..gateway.page_limit() {
        let page_url = with_start_cursor(url, start)?;
        let body = gateway.send(http::Method::GET, &page_url, None).await?;
        let page: Page<T> = serde_json::from_str(&body).map_err(|error| StashError::Decode {
            message: format!("paged response from {page_url} did not match the envelope: {error}"),
        })?;

        tracing::debug!(
            size = page.size,
            limit = page.limit,
            start = page.start,
            is_last_page = page.is_last_page,
            "fetched page"
        );
        values.extend(page.values);

        if page.is_last_page {
            return Ok(values);
        }
        start = page.next_page_start.ok_or_else(|| StashError::Decode {
            message: format!("page at start={start} reports more data but carries no nextPageStart"),
        })?;
    }

    Err(StashError::PageLimitExceeded {
        path: url.to_owned(),
        limit: gateway.page_limit(),
    })
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
