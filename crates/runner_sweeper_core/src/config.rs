//! Validated configuration for a sweep run.
//!
//! This module turns the raw command-line text and the `TOKEN` environment
//! variable into a [`SweepConfig`], failing fast with a [`ConfigError`]
//! naming the first invalid input. Nothing here performs I/O beyond the
//! environment lookup; no network request happens until validation has
//! succeeded.

use regex::Regex;
use secrecy::SecretString;
use url::Url;

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Name of the environment variable carrying the GitLab access token.
pub const TOKEN_ENV_VAR: &str = "TOKEN";

/// Errors raised while validating sweep configuration.
///
/// Each variant corresponds to one invalid or missing input; validation
/// stops at the first failure.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL argument is missing or empty.
    #[error("base URL missing")]
    MissingBaseUrl,

    /// The pattern argument is missing or empty.
    #[error("pattern missing")]
    MissingPattern,

    /// The `TOKEN` environment variable is unset or empty.
    #[error("token missing")]
    MissingToken,

    /// The base URL did not parse as an absolute URL.
    #[error("bad base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL parses but cannot serve as a base for the API paths.
    #[error("bad base URL: cannot be used as a base")]
    BaseUrlNotABase,

    /// The pattern did not compile as a regular expression.
    #[error("bad pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Validated inputs for one sweep run.
///
/// Constructed once at startup and passed explicitly to the collector and
/// dispatcher; there is no process-global state.
#[derive(Debug)]
pub struct SweepConfig {
    /// Root URL of the GitLab instance; the path is guaranteed to end in
    /// exactly one `/` so relative-reference resolution is safe.
    pub endpoint_root: Url,
    /// Compiled pattern matched against runner descriptions.
    pub pattern: Regex,
    /// Access token sent as the `Private-Token` header on every request.
    pub token: SecretString,
    /// When set, matched runners are deleted instead of reported.
    pub force: bool,
}

impl SweepConfig {
    /// Validates raw command-line inputs, reading the credential from the
    /// `TOKEN` environment variable.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first invalid input: an empty
    /// base URL or pattern, a missing or empty token, a base URL that does
    /// not parse, or a pattern that does not compile.
    pub fn from_inputs(base_url: &str, pattern: &str, force: bool) -> Result<Self, ConfigError> {
        let token = std::env::var(TOKEN_ENV_VAR).unwrap_or_default();
        Self::new(base_url, pattern, &token, force)
    }

    /// Like [`SweepConfig::from_inputs`], with the credential passed
    /// explicitly.
    pub fn new(
        base_url: &str,
        pattern: &str,
        token: &str,
        force: bool,
    ) -> Result<Self, ConfigError> {
        if base_url.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }

        if pattern.is_empty() {
            return Err(ConfigError::MissingPattern);
        }

        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let mut endpoint_root = Url::parse(base_url)?;
        if endpoint_root.cannot_be_a_base() {
            return Err(ConfigError::BaseUrlNotABase);
        }

        if !endpoint_root.path().ends_with('/') {
            let path = format!("{}/", endpoint_root.path());
            endpoint_root.set_path(&path);
        }

        let pattern = Regex::new(pattern)?;

        Ok(Self {
            endpoint_root,
            pattern,
            token: SecretString::from(token.to_owned()),
            force,
        })
    }
}
