//! POAP API client.
//!
//! Looks up every POAP a wallet holds via the `/actions/scan` endpoint.
//! Mirrors the `GithubApi` seam so tests can stub holdings.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::clients::{UpstreamError, USER_AGENT};
use crate::models::PoapToken;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Wallet-to-POAPs lookup used by reputation scoring.
#[async_trait]
pub trait PoapApi: Send + Sync {
    /// All POAPs currently held by the wallet.
    async fn scan(&self, wallet_address: &str) -> Result<Vec<PoapToken>, UpstreamError>;
}

/// reqwest-backed `PoapApi` implementation.
pub struct PoapClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl PoapClient {
    /// Create a client against `base_url` with a hard per-request
    /// timeout. `api_key` adds the X-API-Key header when present.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Unavailable(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client,
        })
    }
}

#[async_trait]
impl PoapApi for PoapClient {
    async fn scan(&self, wallet_address: &str) -> Result<Vec<PoapToken>, UpstreamError> {
        debug!(wallet_address, "scanning POAP holdings");
        let mut request = self
            .client
            .get(format!("{}/actions/scan/{wallet_address}", self.base_url))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.header("X-API-Key", key);
        }

        let response = request.send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(UpstreamError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("Retry-After")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
                Err(UpstreamError::RateLimited { retry_after })
            }
            status if !status.is_success() => Err(UpstreamError::Unavailable(format!(
                "POAP API returned {status}"
            ))),
            _ => Ok(response.json().await?),
        }
    }
}
