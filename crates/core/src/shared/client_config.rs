use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::shared::constants::{DEFAULT_SERVICE_URL, SERVICE_URL_ENV};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid service URL {url}: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("service URL must use http or https, got {0}")]
    UnsupportedScheme(String),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Process-wide connection settings for the face service.
///
/// Built once per process and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub service_url: String,
    /// Trust self-signed certificates of test deployments.
    pub accept_invalid_certs: bool,
    /// `None` waits for the service indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            accept_invalid_certs: true,
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(service_url: impl Into<String>) -> Self {
        Self {
            service_url: service_url.into(),
            ..Self::default()
        }
    }

    /// Reads the service URL from `ServiceLink`, falling back to the local default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(SERVICE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(url.trim()),
            None => Self::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_strict_tls(mut self) -> Self {
        self.accept_invalid_certs = false;
        self
    }

    /// Parsed base URL, normalized to end in `/` so relative API paths
    /// resolve beneath it instead of replacing its last segment.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        let mut raw = self.service_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.service_url.clone(),
            source: e,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }
}
