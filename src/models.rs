//! Data models for pull requests, comments, and merge status.
//!
//! Stash payloads are deserialised into `Api*` wire types and converted into
//! the plain records exposed to callers. Fields the client does not act on
//! stay optional so partially populated responses still decode; the
//! identifiers that drive follow-up calls remain mandatory.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::locator::{CommentId, PullRequestId};

/// One pull request as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    /// Server-assigned identifier used for follow-up calls.
    pub id: PullRequestId,
    /// Entity version incremented by the server on every edit.
    pub version: Option<u64>,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Free-form description, if any.
    pub description: Option<String>,
    /// State label (e.g. `OPEN`).
    pub state: Option<String>,
    /// Whether the server reports the pull request as open.
    pub open: Option<bool>,
    /// Whether the server reports the pull request as closed.
    pub closed: Option<bool>,
    /// Creation time.
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    pub updated: Option<DateTime<Utc>>,
    /// Source ref the pull request merges from.
    pub from_ref: Option<PullRequestRef>,
    /// Destination ref the pull request merges into.
    pub to_ref: Option<PullRequestRef>,
    /// Author details, if present.
    pub author: Option<Author>,
}

/// Branch endpoint of a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestRef {
    /// Fully qualified ref name (e.g. `refs/heads/feature`).
    pub id: Option<String>,
    /// Short display name of the ref.
    pub display_id: Option<String>,
    /// Commit the ref pointed at when the response was served.
    pub latest_commit: Option<String>,
    /// Slug of the repository containing the ref.
    pub repository_slug: Option<String>,
    /// Key of the project containing that repository.
    pub project_key: Option<String>,
}

/// User details attached to pull requests and comments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Login name.
    pub name: Option<String>,
    /// Human-readable display name.
    pub display_name: Option<String>,
    /// Email address, when the server exposes it.
    pub email_address: Option<String>,
}

/// One comment on a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Server-assigned identifier used for deletion.
    pub id: CommentId,
    /// Comment text.
    pub text: String,
    /// Entity version incremented by the server on every edit.
    pub version: u64,
    /// Comment author, if present.
    pub author: Option<Author>,
}

/// Server-side merge assessment for a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeStatus {
    /// Whether the server would accept a merge right now.
    pub can_merge: bool,
    /// Whether the branches conflict.
    pub conflicted: bool,
    /// Outstanding vetoes blocking the merge.
    pub vetoes: Vec<MergeVeto>,
}

/// One veto blocking a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeVeto {
    /// Short veto summary.
    pub summary: Option<String>,
    /// Detailed veto explanation.
    pub detail: Option<String>,
}

/// Envelope wrapping every Stash collection response.
///
/// `next_page_start` is the cursor for the following request and is absent
/// on the final page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Page<T> {
    #[serde(default)]
    pub(crate) size: u64,
    #[serde(default)]
    pub(crate) limit: u64,
    pub(crate) is_last_page: bool,
    pub(crate) values: Vec<T>,
    #[serde(default)]
    pub(crate) start: u64,
    #[serde(default)]
    pub(crate) next_page_start: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiPullRequest {
    pub(crate) id: u64,
    #[serde(default)]
    pub(crate) version: Option<u64>,
    #[serde(default)]
    pub(crate) title: Option<String>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) state: Option<String>,
    #[serde(default)]
    pub(crate) open: Option<bool>,
    #[serde(default)]
    pub(crate) closed: Option<bool>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub(crate) created_date: Option<DateTime<Utc>>,
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub(crate) updated_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub(crate) from_ref: Option<ApiRef>,
    #[serde(default)]
    pub(crate) to_ref: Option<ApiRef>,
    #[serde(default)]
    pub(crate) author: Option<ApiParticipant>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiRef {
    #[serde(default)]
    pub(crate) id: Option<String>,
    #[serde(default)]
    pub(crate) display_id: Option<String>,
    #[serde(default)]
    pub(crate) latest_commit: Option<String>,
    #[serde(default)]
    pub(crate) repository: Option<ApiRepository>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    #[serde(default)]
    pub(crate) slug: Option<String>,
    #[serde(default)]
    pub(crate) project: Option<ApiProject>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiProject {
    #[serde(default)]
    pub(crate) key: Option<String>,
}

/// Stash wraps pull request authorship in a participant envelope.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiParticipant {
    #[serde(default)]
    pub(crate) user: Option<ApiUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiUser {
    #[serde(default)]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) display_name: Option<String>,
    #[serde(default)]
    pub(crate) email_address: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiComment {
    pub(crate) id: u64,
    pub(crate) text: String,
    pub(crate) version: u64,
    #[serde(default)]
    pub(crate) author: Option<ApiUser>,
}

/// One activity stream entry; only comment-bearing entries matter here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiActivity {
    #[serde(default)]
    pub(crate) comment: Option<ApiComment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMergeStatus {
    #[serde(default)]
    pub(crate) can_merge: bool,
    #[serde(default)]
    pub(crate) conflicted: bool,
    #[serde(default)]
    pub(crate) vetoes: Vec<ApiMergeVeto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApiMergeVeto {
    #[serde(default)]
    pub(crate) summary_message: Option<String>,
    #[serde(default)]
    pub(crate) detailed_message: Option<String>,
}

impl From<ApiPullRequest> for PullRequest {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            id: PullRequestId::new(value.id),
            version: value.version,
            title: value.title,
            description: value.description,
            state: value.state,
            open: value.open,
            closed: value.closed,
            created: value.created_date,
            updated: value.updated_date,
            from_ref: value.from_ref.map(PullRequestRef::from),
            to_ref: value.to_ref.map(PullRequestRef::from),
            author: value
                .author
                .and_then(|participant| participant.user)
                .map(Author::from),
        }
    }
}

impl From<ApiRef> for PullRequestRef {
    fn from(value: ApiRef) -> Self {
        let (repository_slug, project_key) =
            value.repository.map_or((None, None), |repository| {
                let key = repository.project.and_then(|project| project.key);
                (repository.slug, key)
            });

        Self {
            id: value.id,
            display_id: value.display_id,
            latest_commit: value.latest_commit,
            repository_slug,
            project_key,
        }
    }
}

impl From<ApiUser> for Author {
    fn from(value: ApiUser) -> Self {
        Self {
            name: value.name,
            display_name: value.display_name,
            email_address: value.email_address,
        }
    }
}

impl From<ApiComment> for Comment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: CommentId::new(value.id),
            text: value.text,
            version: value.version,
            author: value.author.map(Author::from),
        }
    }
}

impl From<ApiMergeStatus> for MergeStatus {
    fn from(value: ApiMergeStatus) -> Self {
        Self {
            can_merge: value.can_merge,
            conflicted: value.conflicted,
            vetoes: value.vetoes.into_iter().map(MergeVeto::from).collect(),
        }
    }
}

impl From<ApiMergeVeto> for MergeVeto {
    fn from(value: ApiMergeVeto) -> Self {
        Self {
            summary: value.summary_message,
            detail: value.detailed_message,
        }
    }
}
