//! Comment operations on a pull request.
//!
//! Stash has no comment listing endpoint; comments ride the activity stream,
//! interleaved with approvals and rescopes. Entries without a comment are
//! skipped and the server's ordering is kept.

use crate::error::StashError;
use crate::locator::{CommentId, PullRequestId};
use crate::models::{ApiActivity, ApiComment, Comment};

use super::client::HttpGateway;
use super::pagination::fetch_all_pages;

/// Version sent with every delete. Stash refuses the delete with a 409 when
/// the stored version differs, so a comment edited since creation stays put
/// instead of being removed blind.
const DELETE_VERSION: u64 = 0;

pub(super) async fn fetch_pull_request_comments(
    gateway: &HttpGateway,
    pull_request: PullRequestId,
) -> Result<Vec<Comment>, StashError> {
    let url = format!("{}/activities", gateway.locator().pull_request_path(pull_request));
    let activities: Vec<ApiActivity> = fetch_all_pages(gateway, &url).await?;
    Ok(activities
        .into_iter()
        .filter_map(|activity| activity.comment)
        .map(Comment::from)
        .collect())
}

pub(super) async fn post_comment(
    gateway: &HttpGateway,
    pull_request: PullRequestId,
    text: &str,
) -> Result<Comment, StashError> {
    let url = format!("{}/comments", gateway.locator().pull_request_path(pull_request));
    let payload = serde_json::json!({ "text": text }).to_string();
    let body = gateway.send(http::Method::POST, &url, Some(payload)).await?;
    let comment: ApiComment = serde_json::from_str(&body).map_err(|error| StashError::Decode {
        message: format!("comment response did not match the expected schema: {error}"),
    })?;
    Ok(comment.into())
}

pub(super) async fn delete_comment(
    gateway: &HttpGateway,
    pull_request: PullRequestId,
    comment: CommentId,
) -> Result<(), StashError> {
    let url = format!(
        "{}/comments/{}?version={DELETE_VERSION}",
        gateway.locator().pull_request_path(pull_request),
        comment.get()
    );
    gateway
        .send(http::Method::DELETE, &url, None)
        .await
        .map(|_body| ())
}
