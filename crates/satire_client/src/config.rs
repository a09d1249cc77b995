use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Deployed service the client talks to when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://teamprojectmccewenseager.ue.r.appspot.com";

/// Environment variable overriding the service base URL.
pub const BASE_URL_ENV: &str = "SATIRE_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base url {url:?}: {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
}

/// Explicit client configuration, passed into the transport at startup.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(15),
        }
    }

    /// Reads the base URL from `SATIRE_API_URL`, falling back to the
    /// deployed service.
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw,
            source,
        })?;
        Ok(Self::new(base_url))
    }
}
