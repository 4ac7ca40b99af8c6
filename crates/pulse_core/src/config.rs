use url::Url;

use crate::{Error, Result};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_BASE_ENV: &str = "PULSE_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Reads `PULSE_API_BASE`, falling back to the local backend.
    pub fn from_env() -> Self {
        match std::env::var(API_BASE_ENV) {
            Ok(base) if !base.trim().is_empty() => {
                tracing::debug!("Using API base from {}: {}", API_BASE_ENV, base.trim());
                Self::default().with_api_base(base.trim())
            }
            _ => Self::default(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn summarize_url(&self) -> Result<Url> {
        self.endpoint("api/summarize")
    }

    pub fn health_url(&self) -> Result<Url> {
        self.endpoint("health")
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.api_base.trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| Error::InvalidUrl(format!("{}: {}", raw, e)))
    }
}
