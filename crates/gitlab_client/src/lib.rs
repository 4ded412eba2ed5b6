//! Crate for interacting with the GitLab REST API.
//!
//! This crate provides a client for the runners section of the GitLab REST
//! API, authenticating every request with a personal access token sent as
//! the `Private-Token` header.

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument};
use url::Url;

pub mod errors;
pub use errors::Error;

pub mod models;

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Relative path of the runners collection under a GitLab instance root.
const RUNNERS_COLLECTION_PATH: &str = "api/v4/runners/";

/// Name of the header carrying the access token.
const PRIVATE_TOKEN_HEADER: &str = "Private-Token";

/// Placeholder written to request logs instead of the credential.
const REDACTED_TOKEN: &str = "***";

/// The operations this tool needs from the GitLab runners API.
///
/// [`GitLabClient`] is the production implementation; tests substitute an
/// in-memory fake so the pipeline can be exercised without a server.
#[async_trait]
pub trait RunnerApi {
    /// Fetches one page of the registered runners collection.
    ///
    /// Pages are numbered from 1. An empty page signals that the
    /// collection is exhausted; GitLab offers no other end-of-pagination
    /// marker on this endpoint.
    async fn list_runners(&self, page: u64) -> Result<Vec<models::Runner>, Error>;

    /// Deletes a single runner by its id.
    async fn delete_runner(&self, id: u64) -> Result<(), Error>;
}

/// A client for the GitLab runners API, authenticated with a personal
/// access token.
///
/// One `reqwest::Client` is built at construction time and reused for
/// every request the run makes.
#[derive(Debug)]
pub struct GitLabClient {
    http: reqwest::Client,
    runners_url: Url,
    token: SecretString,
}

impl GitLabClient {
    /// Creates a new client for the GitLab instance at `endpoint_root`.
    ///
    /// The runners collection URL is resolved against the root once, here,
    /// and reused for every request. The root's path must end in `/` so
    /// that relative-reference resolution keeps any instance subpath (for
    /// example `https://host/gitlab/`); `runner_sweeper_core` guarantees
    /// this during validation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if the collection path cannot be
    /// resolved against `endpoint_root`, which only happens for roots that
    /// cannot serve as a base URL, or [`Error::Transport`] if the HTTP
    /// client cannot be built.
    pub fn new(endpoint_root: &Url, token: SecretString) -> Result<Self, Error> {
        let runners_url = endpoint_root.join(RUNNERS_COLLECTION_PATH)?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self {
            http,
            runners_url,
            token,
        })
    }

    /// Issues one authenticated request and returns the response body.
    ///
    /// Every outbound request is logged with the credential redacted.
    /// Any HTTP status above 299 is treated as a request failure; the
    /// body is logged at debug level and handed back undecoded.
    async fn request(&self, method: Method, url: Url) -> Result<String, Error> {
        info!(
            method = %method,
            url = %url,
            private_token = REDACTED_TOKEN,
            "performing HTTP request"
        );

        let response = self
            .http
            .request(method.clone(), url.clone())
            .header(PRIVATE_TOKEN_HEADER, self.token.expose_secret())
            .send()
            .await?;

        let status = response.status();
        if status.as_u16() > 299 {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;

        debug!(
            method = %method,
            url = %url,
            body = %body,
            "got HTTP response"
        );

        Ok(body)
    }
}

#[async_trait]
impl RunnerApi for GitLabClient {
    #[instrument(skip(self))]
    async fn list_runners(&self, page: u64) -> Result<Vec<models::Runner>, Error> {
        let mut url = self.runners_url.clone();
        url.set_query(Some(&format!("page={page}")));

        let body = self.request(Method::GET, url).await?;
        let runners = serde_json::from_str(&body)?;

        Ok(runners)
    }

    #[instrument(skip(self))]
    async fn delete_runner(&self, id: u64) -> Result<(), Error> {
        let url = self.runners_url.join(&id.to_string())?;

        self.request(Method::DELETE, url).await?;

        Ok(())
    }
}
