//! RunnerSweeper CLI: report or delete GitLab CI runners whose description
//! matches a regular expression.
//!
//! By default the tool only reports what it would remove; deletion
//! requires the explicit `--force` flag. The access token is read from
//! the `TOKEN` environment variable and sent as the `Private-Token`
//! header on every request.

use clap::{CommandFactory, Parser};
use gitlab_client::GitLabClient;
use runner_sweeper_core::{collect_matching_runners, sweep_runners, SweepConfig};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;

/// Environment variable controlling the log filter.
const LOG_ENV_VAR: &str = "RUNNER_SWEEPER_LOG";

/// Exit code for invalid configuration or usage; clap exits with the same
/// code when the argument list itself does not parse.
const EXIT_INVALID_CONFIG: i32 = 2;

/// Exit code for a runtime failure during collection or deletion.
const EXIT_RUNTIME_FAILURE: i32 = 1;

/// RunnerSweeper: sweep GitLab CI runners by description pattern
#[derive(Parser, Debug)]
#[command(name = "runner-sweeper")]
#[command(about = "Report or delete GitLab CI runners whose description matches a pattern", long_about = None)]
#[command(
    override_usage = "TOKEN=<token> runner-sweeper --baseurl <URL> --pattern <REGEX> [--force]"
)]
struct Cli {
    /// Root URL of the GitLab instance, e.g. https://gitlab.example.com/
    #[arg(long)]
    baseurl: String,

    /// Regular expression matched against runner descriptions
    #[arg(long)]
    pattern: String,

    /// Delete matched runners instead of reporting them
    #[arg(long)]
    force: bool,
}

/// Prints the validation failure plus usage to stderr and terminates.
///
/// This is the only place usage text is shown; runtime failures after
/// validation report the error alone.
fn exit_invalid_config(error: &dyn std::fmt::Display) -> ! {
    eprintln!("{error}");
    eprintln!("{}", Cli::command().render_usage());
    std::process::exit(EXIT_INVALID_CONFIG);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging. Everything goes to stderr; the info default
    // keeps dry-run reports visible without RUNNER_SWEEPER_LOG set.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    let config = match SweepConfig::from_inputs(&cli.baseurl, &cli.pattern, cli.force) {
        Ok(config) => config,
        Err(error) => exit_invalid_config(&error),
    };

    let SweepConfig {
        endpoint_root,
        pattern,
        token,
        force,
    } = config;

    let client = match GitLabClient::new(&endpoint_root, token) {
        Ok(client) => client,
        // A root that parses but cannot host the API paths is still a
        // configuration problem.
        Err(error) => exit_invalid_config(&error),
    };

    let matches = match collect_matching_runners(&client, &pattern, None).await {
        Ok(matches) => matches,
        Err(error) => {
            error!("Error: {error}");
            std::process::exit(EXIT_RUNTIME_FAILURE);
        }
    };

    if let Err(error) = sweep_runners(&client, &matches, force).await {
        error!("Error: {error}");
        std::process::exit(EXIT_RUNTIME_FAILURE);
    }
}
