//! Gateways for talking to the Stash pull request REST API.
//!
//! This module provides a trait-based gateway so hosts can mock pull request
//! access in tests, plus the reqwest-backed implementation that performs
//! real HTTP requests and unrolls the server's pagination.

mod client;
mod comments;
mod merge;
mod pagination;
mod pull_requests;

#[cfg(test)]
mod test_support;

pub use client::HttpGateway;

use async_trait::async_trait;

use crate::error::StashError;
use crate::locator::{CommentId, PullRequestId};
use crate::models::{Comment, MergeStatus, PullRequest};

/// Gateway exposing one repository's pull requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestGateway: Send + Sync {
    /// Fetch every open pull request in the repository.
    async fn open_pull_requests(&self) -> Result<Vec<PullRequest>, StashError>;

    /// Fetch all comments on the pull request, oldest first.
    async fn pull_request_comments(
        &self,
        pull_request: PullRequestId,
    ) -> Result<Vec<Comment>, StashError>;

    /// Post a new comment and return the stored record.
    async fn post_comment(
        &self,
        pull_request: PullRequestId,
        text: &str,
    ) -> Result<Comment, StashError>;

    /// Delete a comment from the pull request.
    async fn delete_comment(
        &self,
        pull_request: PullRequestId,
        comment: CommentId,
    ) -> Result<(), StashError>;

    /// Fetch the server's merge assessment for the pull request.
    async fn merge_status(&self, pull_request: PullRequestId) -> Result<MergeStatus, StashError>;
}
