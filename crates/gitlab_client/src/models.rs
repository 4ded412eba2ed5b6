//! Data models for the slice of the GitLab REST API this crate consumes.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;

/// A CI/CD runner registered on the GitLab instance.
///
/// Only the fields this tool acts on are decoded; the GitLab payload
/// carries many more, which are ignored. A runner is identified by its
/// `id`; the `description` is the free-text attribute that gets matched
/// against the sweep pattern.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Runner {
    /// The unique id of the runner
    pub id: u64,
    /// The free-text description the runner was registered with
    #[serde(default)]
    pub description: String,
}
