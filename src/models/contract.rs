use serde::{Deserialize, Serialize};

use super::operator::OperatorRole;
use super::team::Team;

/// Payload shaped for the team registry contract's `createTeamValidator`
/// entrypoint: one entry per member across four index-aligned arrays.
///
/// Submitting the transaction is the caller's job; this type only
/// guarantees the arrays line up.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRegistration {
    pub team_name: String,
    /// Member wallet addresses.
    pub members: Vec<String>,
    pub github_usernames: Vec<String>,
    pub reputation_scores: Vec<u32>,
    /// Lowercase role labels.
    pub roles: Vec<String>,
}

impl TeamRegistration {
    /// Flatten a matched team into the parallel-array call shape.
    pub fn from_team(team_name: &str, team: &Team) -> Self {
        Self {
            team_name: team_name.to_string(),
            members: team
                .members
                .iter()
                .map(|m| m.wallet_address.clone())
                .collect(),
            github_usernames: team
                .members
                .iter()
                .map(|m| m.github_username.clone())
                .collect(),
            reputation_scores: team.members.iter().map(|m| m.reputation_score).collect(),
            roles: team
                .members
                .iter()
                .map(|m| m.preferred_role.as_str().to_string())
                .collect(),
        }
    }

    /// Build the call shape from caller-assembled member rows.
    pub fn from_members(team_name: &str, members: &[RegistrationMember]) -> Self {
        Self {
            team_name: team_name.to_string(),
            members: members.iter().map(|m| m.wallet_address.clone()).collect(),
            github_usernames: members
                .iter()
                .map(|m| m.github_username.clone())
                .collect(),
            reputation_scores: members.iter().map(|m| m.reputation_score).collect(),
            roles: members
                .iter()
                .map(|m| m.role.as_str().to_string())
                .collect(),
        }
    }
}

/// One member row submitted to `POST /v1/teams/registration`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationMember {
    pub wallet_address: String,
    pub github_username: String,
    pub reputation_score: u32,
    pub role: OperatorRole,
}

/// Request body for `POST /v1/teams/registration`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRegistrationRequest {
    pub team_name: String,
    pub members: Vec<RegistrationMember>,
}

/// Hex-encoded EVM address check: `0x` followed by exactly 40 hex
/// digits. Checksum casing is not verified.
pub fn is_valid_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}
