use crate::github::response::PullRequest;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("authentication failed (HTTP {status}): the token is invalid or lacks the required scope")]
    Authentication { status: u16 },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unexpected API response (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Partial success of the composed create-and-review operation: the
    /// pull request exists but reviewers were not attached.
    #[error(
        "pull request #{} was created but assigning reviewers failed: {source}",
        pull_request.number
    )]
    ReviewersNotAssigned {
        pull_request: Box<PullRequest>,
        #[source]
        source: Box<Error>,
    },
}
