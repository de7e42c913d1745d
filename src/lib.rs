//! Stashie library crate providing Stash pull request access.
//!
//! The library wraps the Stash (Bitbucket Server) REST API to derive
//! repository coordinates from a clone URI, list open pull requests, read
//! and write pull request comments, and query merge status. Paged responses
//! are unrolled into ordered lists and failures surface as typed errors
//! rather than silently empty results.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod trace;

pub use error::StashError;
pub use gateway::{HttpGateway, PullRequestGateway};
pub use locator::{
    CommentId, Credentials, ProjectKey, PullRequestId, RepositoryLocator, RepositorySlug,
};
pub use models::{Author, Comment, MergeStatus, MergeVeto, PullRequest, PullRequestRef};
pub use trace::{NoopTraceSink, RequestTrace, TraceSink, TracingTraceSink};
