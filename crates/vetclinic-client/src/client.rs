use std::time::Duration;

use reqwest::Url;

use crate::error::{ClientError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of [`crate::VetApi`].
#[derive(Clone, Debug)]
pub struct HttpApiClient {
    pub(crate) base_url: String,
    pub(crate) health_url: String,
    pub(crate) client: reqwest::Client,
}

impl HttpApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        let parsed = Url::parse(&base_url).map_err(|e| ClientError::InvalidUrl {
            url: config.base_url.clone(),
            details: e.to_string(),
        })?;
        // The probe lives at the server root, outside the API prefix.
        let health_url = parsed
            .join("/health")
            .map_err(|e| ClientError::InvalidUrl {
                url: config.base_url.clone(),
                details: e.to_string(),
            })?
            .to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url,
            health_url,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
