//! Configuration types for xkcd-dl

use crate::error::{Error, Result};
use std::{path::PathBuf, time::Duration};

/// Origin of the comic service
pub const BASE_URL: &str = "https://xkcd.com";

/// Request timeout applied to every HTTP call unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Comic number that selects the most recent comic
pub const LATEST_COMIC: u32 = 0;

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("xkcd-dl/", env!("CARGO_PKG_VERSION"));

/// Configuration for [`XkcdClient`](crate::XkcdClient)
///
/// One value is threaded through both the metadata request and the image
/// download, so both calls share the same timeout, origin and user agent.
#[derive(Clone, Debug)]
pub struct Config {
    /// Service origin (default: "https://xkcd.com")
    pub base_url: String,

    /// Per-request timeout (default: 30 seconds)
    pub timeout: Duration,

    /// Directory that saved images are written to (default: ".")
    pub output_dir: PathBuf,

    /// User agent header value
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            output_dir: default_output_dir(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Replace the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the service origin (mock servers, mirrors)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the directory saved images land in
    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Check that the configuration can be used to build a client
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the timeout is zero or the base URL is
    /// not an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        if self.timeout.is_zero() {
            return Err(Error::config("timeout", "timeout must be greater than zero"));
        }

        let parsed = url::Url::parse(&self.base_url).map_err(|e| {
            Error::config(
                "base_url",
                format!("invalid base URL '{}': {}", self.base_url, e),
            )
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(
                "base_url",
                format!("unsupported scheme '{}' in base URL", parsed.scheme()),
            ));
        }

        Ok(())
    }
}

// Default value functions
fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_user_agent() -> String {
    USER_AGENT.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert_eq!(config.base_url, BASE_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert!(config.user_agent.starts_with("xkcd-dl/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builders_override_fields() {
        let config = Config::default()
            .with_timeout(Duration::from_secs(2))
            .with_base_url("http://localhost:9999")
            .with_output_dir("/tmp/comics");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/comics"));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = Config::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, Error::Config { key: Some(ref k), .. } if k == "timeout"));
    }

    #[test]
    fn bad_base_urls_are_rejected() {
        for base in ["not a url", "ftp://xkcd.com", "/relative/path"] {
            let err = Config::default().with_base_url(base).validate().unwrap_err();
            assert!(
                matches!(err, Error::Config { key: Some(ref k), .. } if k == "base_url"),
                "expected base_url error for {base}"
            );
        }
    }
}
