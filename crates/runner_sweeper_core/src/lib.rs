//! Match-and-sweep pipeline for GitLab CI runners.
//!
//! This crate implements the stages of a sweep run over any
//! [`RunnerApi`] implementation: paginated collection of the runners
//! whose description matches a pattern, followed by the sweep itself,
//! which either reports every match (dry run, the default) or deletes
//! them (force mode). Input validation lives in [`config`].

use std::collections::HashMap;

use gitlab_client::RunnerApi;
use regex::Regex;
use tracing::{debug, info};

pub mod config;
pub use config::{ConfigError, SweepConfig};

pub mod errors;
pub use errors::Error;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Collects all registered runners whose description matches `pattern`.
///
/// Pages are fetched sequentially starting at page 1. The first page that
/// decodes to zero records terminates the walk; no further page is
/// requested after it. Matches are folded into a map keyed by
/// *description*, so two runners sharing a description collapse to the id
/// from the later-fetched page (last-write-wins). The map is deliberately
/// not keyed by id; keep the overwrite direction in mind when reading it.
///
/// `page_limit` caps the number of pages fetched, for callers that cannot
/// afford an unbounded walk against a server that never yields an empty
/// page. `None` leaves the walk unbounded.
///
/// # Errors
///
/// The first transport, status, or decode failure aborts the walk with
/// [`Error::Api`]; there is no partial result and no resume. Exceeding
/// `page_limit` yields [`Error::PageLimitExceeded`].
pub async fn collect_matching_runners(
    api: &impl RunnerApi,
    pattern: &Regex,
    page_limit: Option<u64>,
) -> Result<HashMap<String, u64>, Error> {
    let mut matches = HashMap::new();
    let mut page: u64 = 1;

    loop {
        if let Some(limit) = page_limit {
            if page > limit {
                return Err(Error::PageLimitExceeded { limit });
            }
        }

        debug!(page = page, "fetching runners page");

        let runners = api.list_runners(page).await?;

        if runners.is_empty() {
            info!(
                total_pages = page - 1,
                matched = matches.len(),
                "no more runners to process"
            );
            break;
        }

        for runner in runners {
            if pattern.is_match(&runner.description) {
                matches.insert(runner.description, runner.id);
            }
        }

        page += 1;
    }

    Ok(matches)
}

/// Deletes every collected runner, or reports each one — never a mix.
///
/// With `force` set, one delete request is issued per matched id, one at
/// a time in no particular order. The first failing deletion aborts the
/// sweep; runners deleted before the failure stay deleted. Without
/// `force`, each match produces a single info-level record and no request
/// is made.
pub async fn sweep_runners(
    api: &impl RunnerApi,
    matches: &HashMap<String, u64>,
    force: bool,
) -> Result<(), Error> {
    if force {
        for (description, id) in matches {
            info!(id = id, description = %description, "removing runner");
            api.delete_runner(*id).await?;
        }
    } else {
        for (description, id) in matches {
            info!(
                id = id,
                description = %description,
                "runner matched but not removed; pass --force to delete"
            );
        }
    }

    Ok(())
}
