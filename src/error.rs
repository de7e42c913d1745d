//! Error types exposed by the Stash client.

use thiserror::Error;

/// Errors surfaced while resolving repository coordinates or talking to Stash.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StashError {
    /// The repository URI could not be parsed.
    #[error("repository URI is invalid: {0}")]
    InvalidUri(String),

    /// The repository URI does not address a Stash clone path.
    #[error("repository URI path must match /scm/<project>/<repository>")]
    UnsupportedRepositoryPath,

    /// The client could not be assembled from the supplied settings.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Networking failed before Stash produced a response.
    #[error("network error talking to Stash: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Stash answered with a non-success status code.
    #[error("Stash API error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by Stash.
        status: u16,
        /// Response body excerpt describing the failure.
        message: String,
    },

    /// A response body did not match the expected schema.
    #[error("Stash response decoding failed: {message}")]
    Decode {
        /// Description of the malformed payload.
        message: String,
    },

    /// A pagination walk gave up before the server reported a final page.
    #[error("pagination for {path} exceeded {limit} pages without a final page")]
    PageLimitExceeded {
        /// Request URL whose listing never terminated.
        path: String,
        /// Number of pages fetched before giving up.
        limit: u32,
    },
}

impl StashError {
    /// Returns true when retrying the same call later could succeed.
    ///
    /// Transport failures, server-side errors, and runaway pagination are
    /// transient; URI and schema problems need operator attention before a
    /// retry can change the outcome.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Api { .. } | Self::PageLimitExceeded { .. }
        )
    }
}
