//! GitHub REST API client.
//!
//! Fetches the public profile and repository list that feed reputation
//! scoring. Sits behind the `GithubApi` trait so handlers and tests can
//! swap in stub implementations.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tracing::debug;

use crate::clients::{UpstreamError, USER_AGENT};
use crate::models::{GithubProfile, GithubRepo};

/// Fallback when GitHub throttles without a Retry-After header.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Read-only view of the GitHub API used by reputation scoring.
#[async_trait]
pub trait GithubApi: Send + Sync {
    /// Fetch a user's public profile.
    async fn get_user(&self, username: &str) -> Result<GithubProfile, UpstreamError>;

    /// List up to 100 of the user's most recently updated public repos.
    async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, UpstreamError>;
}

/// reqwest-backed `GithubApi` implementation.
pub struct GithubClient {
    base_url: String,
    token: Option<String>,
    client: Client,
}

impl GithubClient {
    /// Create a client against `base_url` with a hard per-request
    /// timeout. `token` adds an Authorization header when present.
    pub fn new(
        base_url: &str,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UpstreamError::Unavailable(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            client,
        })
    }

    fn get(&self, path: &str) -> RequestBuilder {
        let mut request = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github.v3+json");
        if let Some(token) = &self.token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        request
    }
}

/// Map a GitHub response status to a typed error, or pass it through.
///
/// GitHub signals rate limiting with 403 as well as 429.
fn check_status(response: Response) -> Result<Response, UpstreamError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(UpstreamError::NotFound),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_RETRY_AFTER_SECS);
            Err(UpstreamError::RateLimited { retry_after })
        }
        status if !status.is_success() => Err(UpstreamError::Unavailable(format!(
            "GitHub returned {status}"
        ))),
        _ => Ok(response),
    }
}

#[async_trait]
impl GithubApi for GithubClient {
    async fn get_user(&self, username: &str) -> Result<GithubProfile, UpstreamError> {
        debug!(username, "fetching GitHub profile");
        let response = self.get(&format!("/users/{username}")).send().await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }

    async fn list_repos(&self, username: &str) -> Result<Vec<GithubRepo>, UpstreamError> {
        debug!(username, "fetching GitHub repositories");
        let response = self
            .get(&format!("/users/{username}/repos?per_page=100&sort=updated"))
            .send()
            .await?;
        let response = check_status(response)?;
        Ok(response.json().await?)
    }
}
