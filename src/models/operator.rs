use serde::{Deserialize, Serialize};
use std::fmt;

/// Team-matching candidate: an operator with an already-computed
/// reputation score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub github_username: String,
    pub wallet_address: String,
    pub reputation_score: u32,
    #[serde(default)]
    pub skills: Vec<String>,
    pub preferred_role: OperatorRole,
}

/// Role an operator wants on a team.
///
/// Closed set; unknown strings are rejected at deserialization rather
/// than defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperatorRole {
    Leader,
    Member,
    Technical,
    Financial,
}

impl OperatorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::Member => "member",
            Self::Technical => "technical",
            Self::Financial => "financial",
        }
    }
}

impl fmt::Display for OperatorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
