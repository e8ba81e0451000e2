use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::types::{ReportResponse, RequestPayload, ResponseOutcome};

/// The remote report service. One call per submission, no retries.
#[async_trait]
pub trait ReportBackend: Send + Sync {
    async fn calculate(&self, payload: &RequestPayload) -> ResponseOutcome;
}

pub struct HttpBackend {
    client: Client,
    url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: config.backend_url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn post(&self, payload: &RequestPayload) -> Result<ResponseOutcome, TransportError> {
        let response = self.client.post(&self.url).json(payload).send().await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "report backend answered");

        if status.is_success() {
            let parsed: ReportResponse = serde_json::from_str(&body)?;
            Ok(ResponseOutcome::Success {
                report: parsed.report,
            })
        } else {
            Ok(ResponseOutcome::ServerError { message: body })
        }
    }
}

#[async_trait]
impl ReportBackend for HttpBackend {
    async fn calculate(&self, payload: &RequestPayload) -> ResponseOutcome {
        match self.post(payload).await {
            Ok(outcome) => outcome,
            Err(cause) => ResponseOutcome::TransportFailure { cause },
        }
    }
}
