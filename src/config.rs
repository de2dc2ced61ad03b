use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// GitHub API base URL
    pub github_api_url: String,
    /// Optional GitHub token, raises the unauthenticated rate limit
    pub github_token: Option<String>,
    /// POAP API base URL
    pub poap_api_url: String,
    /// Optional POAP API key
    pub poap_api_key: Option<String>,
    /// Upstream request timeout in seconds (default: 10)
    pub upstream_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT"))?;

        let github_api_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| "https://api.github.com".to_string());

        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let poap_api_url =
            env::var("POAP_API_URL").unwrap_or_else(|_| "https://api.poap.tech".to_string());

        let poap_api_key = env::var("POAP_API_KEY").ok().filter(|k| !k.is_empty());

        let upstream_timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("UPSTREAM_TIMEOUT_SECS"))?;

        Ok(Self {
            host,
            port,
            github_api_url,
            github_token,
            poap_api_url,
            poap_api_key,
            upstream_timeout_secs,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
