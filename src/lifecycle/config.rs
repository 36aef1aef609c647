//! Client configuration.

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub const BASE_URL_ENV: &str = "INSURANCE_API_BASE_URL";
pub const TOKEN_ENV: &str = "INSURANCE_API_TOKEN";

/// Errors raised while building a client.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingBaseUrl(&'static str),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Where the service lives and how to authenticate against it.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    pub base_url: Url,
    #[serde(default)]
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: Url::parse(base_url)?,
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Reads `INSURANCE_API_BASE_URL` (required) and `INSURANCE_API_TOKEN`
    /// (optional; empty counts as unset).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_ENV)
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingBaseUrl(BASE_URL_ENV))?;
        let mut config = Self::new(&base_url)?;
        config.token = lookup(TOKEN_ENV).filter(|v| !v.is_empty());
        Ok(config)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
