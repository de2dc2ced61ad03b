use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public profile fields from `GET /users/{username}`.
///
/// Only the fields that feed scoring are kept; everything else the
/// GitHub API returns is ignored during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubProfile {
    pub login: String,
    pub public_repos: u32,
    pub followers: u32,
    pub created_at: DateTime<Utc>,
}

/// Repository summary from `GET /users/{username}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub description: Option<String>,
    pub stargazers_count: u32,
    /// Absent on older API versions.
    #[serde(default)]
    pub topics: Vec<String>,
}
