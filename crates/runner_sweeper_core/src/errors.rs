//! Error types for the sweep pipeline.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while collecting or sweeping runners.
///
/// Configuration problems are a separate concern and are reported through
/// [`crate::ConfigError`] before any request is made.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GitLab API request failed.
    ///
    /// Wraps the transport, status, or decode failure from the client.
    /// Whatever was collected or deleted before the failure is not rolled
    /// back.
    #[error("GitLab API request failed: {0}")]
    Api(#[from] gitlab_client::Error),

    /// The collector reached its configured page ceiling without ever
    /// seeing an empty page.
    #[error("no empty page within the first {limit} pages, giving up")]
    PageLimitExceeded {
        /// The ceiling that was exceeded.
        limit: u64,
    },
}
