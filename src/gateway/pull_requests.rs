//! Listing open pull requests for the repository.

use crate::error::StashError;
use crate::models::{ApiPullRequest, PullRequest};

use super::client::HttpGateway;
use super::pagination::fetch_all_pages;

/// Stash filters the listing server-side; only open pull requests come back.
const OPEN_STATE_QUERY: &str = "?state=OPEN";

pub(super) async fn fetch_open_pull_requests(
    gateway: &HttpGateway,
) -> Result<Vec<PullRequest>, StashError> {
    let url = format!("{}{OPEN_STATE_QUERY}", gateway.locator().pull_requests_path());
    let pages: Vec<ApiPullRequest> = fetch_all_pages(gateway, &url).await?;
    Ok(pages.into_iter().map(PullRequest::from).collect())
}
