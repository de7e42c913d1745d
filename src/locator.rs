//! Clone URI parsing and identity wrappers for repository access.
//!
//! Stash exposes repositories for cloning under `/scm/<project>/<repository>`
//! while its REST API lives under `/rest/api/1.0/projects/`. The locator
//! derives the latter from the former, so callers only ever supply the clone
//! URI their automation already records.

use std::fmt;

use url::Url;

use crate::error::StashError;

/// Leading path component shared by every Stash clone URI.
const SCM_PREFIX: &str = "/scm/";

/// Project key wrapper to avoid stringly typed parameters.
///
/// Stash treats project keys case-insensitively; the key is kept exactly as
/// it appeared in the clone URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectKey(String);

impl ProjectKey {
    pub(crate) fn new(value: &str) -> Result<Self, StashError> {
        if value.is_empty() {
            return Err(StashError::UnsupportedRepositoryPath);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the project key.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository slug wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositorySlug(String);

impl RepositorySlug {
    pub(crate) fn new(value: &str) -> Result<Self, StashError> {
        if value.is_empty() {
            return Err(StashError::UnsupportedRepositoryPath);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository slug.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Pull request identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PullRequestId(u64);

impl PullRequestId {
    /// Wraps a server-assigned pull request identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Comment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(u64);

impl CommentId {
    /// Wraps a server-assigned comment identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Username and secret pair for preemptive basic authentication.
///
/// The secret is excluded from `Debug` output so request traces and error
/// context never leak it into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    secret: String,
}

impl Credentials {
    /// Validates that the username is non-blank and trims whitespace from it.
    ///
    /// # Errors
    ///
    /// Returns `StashError::Configuration` when the username is blank.
    pub fn new(username: impl AsRef<str>, secret: impl Into<String>) -> Result<Self, StashError> {
        let trimmed = username.as_ref().trim();
        if trimmed.is_empty() {
            return Err(StashError::Configuration {
                message: "username must not be blank".to_owned(),
            });
        }
        Ok(Self {
            username: trimmed.to_owned(),
            secret: secret.into(),
        })
    }

    /// Borrow the username.
    #[must_use]
    pub const fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Borrow the secret.
    #[must_use]
    pub const fn secret(&self) -> &str {
        self.secret.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Rebuilds the authority of a parsed clone URI as an HTTP base URL.
///
/// Clone schemes other than `http` and `https` resolve to `https`: the REST
/// API is served over HTTP even when cloning happens over SSH.
fn derive_host(parsed: &Url) -> Result<Url, StashError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| StashError::InvalidUri("URI must include a host".to_owned()))?;

    let scheme = if parsed.scheme() == "http" {
        "http"
    } else {
        "https"
    };

    let mut base = Url::parse(&format!("{scheme}://{host}"))
        .map_err(|error| StashError::InvalidUri(error.to_string()))?;
    base.set_port(parsed.port())
        .map_err(|()| StashError::InvalidUri("invalid port".to_owned()))?;
    Ok(base)
}

/// Repository coordinates resolved from a clone URI.
///
/// # Example
///
/// ```
/// use stashie::locator::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_scm_uri(
///     "ssh://git@stash.example.com/scm/PROJ/repo.git",
///     None,
/// )
/// .expect("should resolve clone URI");
/// assert_eq!(locator.project().as_str(), "PROJ");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    host: Url,
    project: ProjectKey,
    repository: RepositorySlug,
}

impl RepositoryLocator {
    /// Resolves repository coordinates from a clone URI in the form
    /// `<scheme>://<host>/scm/<project>/<repository>.git`.
    ///
    /// When `host_override` is given it replaces the derived scheme, host,
    /// and port wholesale; the project and repository still come from the
    /// clone URI path.
    ///
    /// # Errors
    ///
    /// Returns `StashError::InvalidUri` when either URI fails to parse and
    /// `UnsupportedRepositoryPath` when the path does not start with `/scm/`
    /// or lacks the project or repository segment.
    pub fn from_scm_uri(uri: &str, host_override: Option<&str>) -> Result<Self, StashError> {
        let parsed = Url::parse(uri).map_err(|error| StashError::InvalidUri(error.to_string()))?;

        if !parsed.path().starts_with(SCM_PREFIX) {
            return Err(StashError::UnsupportedRepositoryPath);
        }

        let mut segments = parsed
            .path_segments()
            .ok_or(StashError::UnsupportedRepositoryPath)?
            .skip(1)
            .filter(|segment| !segment.is_empty());

        let project_segment = segments.next().ok_or(StashError::UnsupportedRepositoryPath)?;
        let repository_segment = segments.last().ok_or(StashError::UnsupportedRepositoryPath)?;
        let repository_name = repository_segment
            .strip_suffix(".git")
            .unwrap_or(repository_segment);

        let host = host_override.map_or_else(
            || derive_host(&parsed),
            |value| Url::parse(value).map_err(|error| StashError::InvalidUri(error.to_string())),
        )?;

        let project = ProjectKey::new(project_segment)?;
        let repository = RepositorySlug::new(repository_name)?;

        Ok(Self {
            host,
            project,
            repository,
        })
    }

    /// Base URL of the Stash host serving the REST API.
    #[must_use]
    pub const fn host(&self) -> &Url {
        &self.host
    }

    /// Project key extracted from the clone URI.
    #[must_use]
    pub const fn project(&self) -> &ProjectKey {
        &self.project
    }

    /// Repository slug extracted from the clone URI.
    #[must_use]
    pub const fn repository(&self) -> &RepositorySlug {
        &self.repository
    }

    /// Root of the project-scoped REST API on this host.
    #[must_use]
    pub fn api_base(&self) -> String {
        format!(
            "{}/rest/api/1.0/projects/",
            self.host.as_str().trim_end_matches('/')
        )
    }

    /// Collection URL for this repository's pull requests.
    ///
    /// Keeps the trailing slash so an identifier can be appended directly.
    pub(crate) fn pull_requests_path(&self) -> String {
        format!(
            "{}{}/repos/{}/pull-requests/",
            self.api_base(),
            self.project.as_str(),
            self.repository.as_str()
        )
    }

    /// URL addressing one pull request.
    pub(crate) fn pull_request_path(&self, pull_request: PullRequestId) -> String {
        format!("{}{}", self.pull_requests_path(), pull_request.get())
    }
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
