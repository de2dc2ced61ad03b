//! Reputation orchestration.
//!
//! Pulls the GitHub profile and repository list plus the wallet's
//! POAPs, then runs the pure scoring engine. GitHub failures surface to
//! the caller; POAP failures degrade to an empty event list.

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{info, warn};

use crate::clients::{GithubApi, PoapApi, UpstreamError};
use crate::models::{Grade, ReputationReport};
use crate::services::scoring;

#[derive(Debug, Error)]
pub enum ReputationError {
    #[error("GitHub user not found: {0}")]
    ProfileNotFound(String),

    #[error("GitHub API rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("GitHub API unavailable: {0}")]
    GithubUnavailable(String),
}

impl ReputationError {
    fn from_github(err: UpstreamError, username: &str) -> Self {
        match err {
            UpstreamError::NotFound => Self::ProfileNotFound(username.to_string()),
            UpstreamError::RateLimited { retry_after } => Self::RateLimited { retry_after },
            UpstreamError::Unavailable(msg) | UpstreamError::Decode(msg) => {
                Self::GithubUnavailable(msg)
            }
        }
    }
}

/// Computes reputation reports from live upstream data.
#[derive(Clone)]
pub struct ReputationService {
    github: Arc<dyn GithubApi>,
    poap: Arc<dyn PoapApi>,
}

impl ReputationService {
    pub fn new(github: Arc<dyn GithubApi>, poap: Arc<dyn PoapApi>) -> Self {
        Self { github, poap }
    }

    /// Score one operator from live data.
    ///
    /// GitHub is authoritative: a missing user, throttling, or a
    /// transport failure is surfaced. The POAP lookup is best effort
    /// and scores as an empty list when it fails.
    pub async fn calculate(
        &self,
        github_username: &str,
        wallet_address: &str,
    ) -> Result<ReputationReport, ReputationError> {
        let profile = self
            .github
            .get_user(github_username)
            .await
            .map_err(|e| ReputationError::from_github(e, github_username))?;

        let repos = self
            .github
            .list_repos(github_username)
            .await
            .map_err(|e| ReputationError::from_github(e, github_username))?;

        let poaps = match self.poap.scan(wallet_address).await {
            Ok(poaps) => poaps,
            Err(e) => {
                warn!(
                    wallet_address,
                    error = %e,
                    "POAP lookup failed, scoring without POAP data"
                );
                Vec::new()
            }
        };

        let score = scoring::score(&profile, &repos, &poaps, Utc::now());
        let grade = Grade::for_total(score.total);

        info!(
            github_username,
            wallet_address,
            total = score.total,
            grade = %grade,
            "reputation calculated"
        );

        Ok(ReputationReport {
            github_username: github_username.to_string(),
            wallet_address: wallet_address.to_string(),
            score,
            grade,
            grade_description: grade.description(),
        })
    }
}
