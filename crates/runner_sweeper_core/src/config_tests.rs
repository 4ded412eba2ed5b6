//! Tests for sweep configuration validation.

use super::*;

use secrecy::ExposeSecret;
use serial_test::serial;

const TEST_TOKEN: &str = "glpat-config-test";

#[test]
fn test_valid_inputs_produce_a_config() {
    let config = SweepConfig::new("https://git.example/", "^ci-", TEST_TOKEN, false)
        .expect("validation should succeed");

    assert_eq!(config.endpoint_root.as_str(), "https://git.example/");
    assert!(config.pattern.is_match("ci-runner-1"));
    assert!(!config.pattern.is_match("other"));
    assert_eq!(config.token.expose_secret(), TEST_TOKEN);
    assert!(!config.force);
}

#[test]
fn test_empty_base_url_is_rejected() {
    let result = SweepConfig::new("", "^ci-", TEST_TOKEN, false);
    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_empty_pattern_is_rejected() {
    let result = SweepConfig::new("https://git.example/", "", TEST_TOKEN, false);
    assert!(matches!(result, Err(ConfigError::MissingPattern)));
}

#[test]
fn test_empty_token_is_rejected() {
    let result = SweepConfig::new("https://git.example/", "^ci-", "", false);
    assert!(matches!(result, Err(ConfigError::MissingToken)));
}

#[test]
fn test_unparsable_base_url_is_rejected() {
    let result = SweepConfig::new("://missing-scheme", "^ci-", TEST_TOKEN, false);
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
}

#[test]
fn test_relative_base_url_is_rejected() {
    let result = SweepConfig::new("git.example/path", "^ci-", TEST_TOKEN, false);
    assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
}

#[test]
fn test_base_url_that_cannot_be_a_base_is_rejected() {
    let result = SweepConfig::new("mailto:admin@git.example", "^ci-", TEST_TOKEN, false);
    assert!(matches!(result, Err(ConfigError::BaseUrlNotABase)));
}

#[test]
fn test_uncompilable_pattern_is_rejected() {
    let result = SweepConfig::new("https://git.example/", "(", TEST_TOKEN, false);
    assert!(matches!(result, Err(ConfigError::InvalidPattern(_))));
}

#[test]
fn test_missing_trailing_slash_is_appended() {
    let config = SweepConfig::new("https://git.example/gitlab", "^ci-", TEST_TOKEN, false)
        .expect("validation should succeed");

    assert_eq!(config.endpoint_root.path(), "/gitlab/");
}

#[test]
fn test_existing_trailing_slash_is_kept_single() {
    let config = SweepConfig::new("https://git.example/gitlab/", "^ci-", TEST_TOKEN, false)
        .expect("validation should succeed");

    assert_eq!(config.endpoint_root.path(), "/gitlab/");
}

#[test]
fn test_host_only_base_url_normalizes_to_root_path() {
    let config = SweepConfig::new("https://git.example", "^ci-", TEST_TOKEN, false)
        .expect("validation should succeed");

    assert_eq!(config.endpoint_root.path(), "/");
}

#[test]
fn test_debug_output_does_not_leak_the_token() {
    let config = SweepConfig::new("https://git.example/", "^ci-", TEST_TOKEN, true)
        .expect("validation should succeed");

    let debug_output = format!("{:?}", config);
    assert!(!debug_output.contains(TEST_TOKEN));
}

#[test]
#[serial]
fn test_from_inputs_reads_the_token_from_the_environment() {
    std::env::set_var(TOKEN_ENV_VAR, TEST_TOKEN);

    let config = SweepConfig::from_inputs("https://git.example/", "^ci-", true)
        .expect("validation should succeed");

    assert_eq!(config.token.expose_secret(), TEST_TOKEN);
    assert!(config.force);

    std::env::remove_var(TOKEN_ENV_VAR);
}

#[test]
#[serial]
fn test_from_inputs_rejects_a_missing_token() {
    std::env::remove_var(TOKEN_ENV_VAR);

    let result = SweepConfig::from_inputs("https://git.example/", "^ci-", false);

    assert!(matches!(result, Err(ConfigError::MissingToken)));
}

#[test]
#[serial]
fn test_from_inputs_rejects_an_empty_token() {
    std::env::set_var(TOKEN_ENV_VAR, "");

    let result = SweepConfig::from_inputs("https://git.example/", "^ci-", false);

    assert!(matches!(result, Err(ConfigError::MissingToken)));

    std::env::remove_var(TOKEN_ENV_VAR);
}
