// crates/core/src/fetch/http.rs
//! `JobsFetcher` over HTTP.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use super::provider::JobsFetcher;
use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::types::JobsPayload;

/// GETs jobs listings from the configured backend.
pub struct HttpJobsFetcher {
    client: reqwest::Client,
    base_url: Url,
    timeout: Option<Duration>,
}

impl HttpJobsFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing client (connection pool, proxies, default headers).
    pub fn with_client(client: reqwest::Client, config: &FetchConfig) -> Result<Self, FetchError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        Ok(Self {
            client,
            base_url,
            timeout: config.timeout_secs.map(Duration::from_secs),
        })
    }

    /// Absolute URLs pass through; anything else is joined to the base.
    fn resolve(&self, url: &str) -> Result<Url, FetchError> {
        let resolved = if url.starts_with("http://") || url.starts_with("https://") {
            Url::parse(url)
        } else {
            self.base_url.join(url)
        };
        resolved.map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))
    }
}

#[async_trait]
impl JobsFetcher for HttpJobsFetcher {
    async fn fetch(&self, url: &str) -> Result<JobsPayload, FetchError> {
        let target = self.resolve(url)?;
        tracing::debug!(url = %target, "GET jobs listing");

        let mut request = self
            .client
            .get(target)
            .header("Accept", "application/json");
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(%status, "jobs listing request rejected");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<JobsPayload>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}
