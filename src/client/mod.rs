//! Comic service client split into focused submodules.
//!
//! The `XkcdClient` struct and its methods are organized by step:
//! - [`fetch`] - Metadata request, decode and projection
//! - [`save`] - Image download to local disk

mod fetch;
mod save;


use crate::config::Config;
use crate::error::Result;
use crate::types::ComicId;

/// Client for the comic metadata service
///
/// Holds one HTTP client built from [`Config`]. The metadata request and the
/// image download both go through it, so they share timeout and user agent.
#[derive(Clone, Debug)]
pub struct XkcdClient {
    /// HTTP client shared by every request
    http: reqwest::Client,
    /// Configuration the client was built from
    config: Config,
}

impl XkcdClient {
    /// Create a client from a configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) if the configuration is
    /// invalid, or [`Error::Network`](crate::Error::Network) if the HTTP client
    /// cannot be built.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { http, config })
    }

    /// Build the metadata URL for a comic
    ///
    /// `Latest` maps to `{base}/info.0.json`, a number `n` to
    /// `{base}/{n}/info.0.json`. Numbers are not range-checked; an unknown
    /// comic is the server's concern.
    pub fn build_request_url(&self, id: ComicId) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        match id.number() {
            None => format!("{}/info.0.json", base),
            Some(n) => format!("{}/{}/info.0.json", base, n),
        }
    }
}
