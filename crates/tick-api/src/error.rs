use thiserror::Error;
use tick_core::CoreError;

/// API client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The roles lookup returned something other than a non-empty role list.
    #[error("authorization failed, server responded: {body}")]
    Auth { body: String },
    /// A response body was not JSON, or not the JSON shape a resource expects.
    #[error("invalid response: {body}")]
    Response { body: String },
    /// Failed to build HTTP client.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
    /// HTTP request failed before a response was received.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Failed to encode a request body.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error(transparent)]
    Entry(#[from] CoreError),
}
