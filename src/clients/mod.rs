pub mod github;
pub mod poap;

pub use github::{GithubApi, GithubClient};
pub use poap::{PoapApi, PoapClient};

use thiserror::Error;

/// User-Agent sent on every upstream request.
pub(crate) const USER_AGENT: &str = concat!("validator-jobs/", env!("CARGO_PKG_VERSION"));

/// Failure talking to an upstream HTTP API.
///
/// There is no retry machinery here: callers surface these immediately,
/// or in the POAP case tolerate them.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("resource not found")]
    NotFound,

    #[error("rate limited, retry after {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("upstream unavailable: {0}")]
    Unavailable(String),

    #[error("failed to decode upstream response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Unavailable(err.to_string())
        }
    }
}
