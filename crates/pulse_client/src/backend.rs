use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use pulse_core::{ClientConfig, Error, Result, SummarizeRequest, SummarizeResponse};
use reqwest::Client;
use serde::Deserialize;

/// The summarization service the controller talks to.
#[async_trait]
pub trait SummaryBackend: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// One `POST /api/summarize` round trip.
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse>;

    /// Status reported by the backend's health endpoint.
    async fn health(&self) -> Result<String>;
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

pub struct HttpBackend {
    client: Arc<Client>,
    config: ClientConfig,
}

impl HttpBackend {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Arc::new(Client::new()),
            config,
        }
    }
}

impl fmt::Debug for HttpBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpBackend")
            .field("client", &"<reqwest::Client>")
            .field("api_base", &self.config.api_base)
            .finish()
    }
}

#[async_trait]
impl SummaryBackend for HttpBackend {
    fn name(&self) -> &str {
        "HTTP"
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse> {
        let url = self.config.summarize_url()?;
        tracing::debug!(
            "POST {} query={:?} num_results={}",
            url,
            request.query,
            request.num_results
        );

        let response = self.client.post(url).json(request).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), &body));
        }

        Ok(serde_json::from_str::<SummarizeResponse>(&body)?)
    }

    async fn health(&self) -> Result<String> {
        let url = self.config.health_url()?;
        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::http(status.as_u16(), &body));
        }

        let health: HealthResponse = serde_json::from_str(&body)?;
        Ok(health.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_client() {
        let backend = HttpBackend::new(ClientConfig::default());
        let debug = format!("{:?}", backend);
        assert!(debug.contains("<reqwest::Client>"));
        assert!(debug.contains("http://localhost:8000"));
        assert_eq!(backend.name(), "HTTP");
    }

    #[tokio::test]
    async fn test_invalid_base_fails_before_sending() {
        let backend = HttpBackend::new(ClientConfig::default().with_api_base("::nope::"));
        let request = SummarizeRequest {
            query: "q".to_string(),
            num_results: 3,
        };
        let err = backend.summarize(&request).await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(err.is_transport());
    }
}
