//! Error types for GitLab client operations.
//!
//! This module defines the error types that can occur when talking to the
//! GitLab runners API. No error is recovered from inside the client; every
//! variant propagates to the caller, which aborts the run.

use url::Url;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitLab client operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The runners collection path could not be resolved against the
    /// configured endpoint root.
    ///
    /// This only happens for roots that parse as URLs but cannot serve as
    /// a base for relative references (for example `mailto:` URLs).
    #[error("Failed to resolve the runners endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    /// A network-level request failure.
    ///
    /// This error occurs when the request never produced an HTTP response:
    /// connection refused, DNS failure, TLS problems, or a broken
    /// connection mid-transfer. There is no retry; the run aborts.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success HTTP status.
    ///
    /// Any status above 299 is a failure; everything at or below is
    /// treated as success.
    #[error("got HTTP status {status} from {url}")]
    Status {
        /// The status code the server returned.
        status: u16,
        /// The URL the failing request was sent to.
        url: Url,
    },

    /// Error deserializing the response from GitLab.
    ///
    /// This error occurs when the response body is not valid JSON of the
    /// expected shape.
    #[error("Failed to deserialize GitLab response: {0}")]
    Deserialization(#[from] serde_json::Error),
}
