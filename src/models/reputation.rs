use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-signal terms that sum to the GitHub and POAP sub-scores.
///
/// Values are stored post-clamp, so the sub-score identities
/// (`github == repos + followers + experience + dvt_bonus` and
/// `poap == ethereum_events + hackathons`) hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub repos: u32,
    pub followers: u32,
    pub experience: u32,
    pub dvt_bonus: u32,
    pub ethereum_events: u32,
    pub hackathons: u32,
}

/// Composite reputation score on the 0..=1000 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationScore {
    /// `github + poap`, at most 1000.
    pub total: u32,
    /// GitHub-derived sub-score, at most 700.
    pub github: u32,
    /// POAP-derived sub-score, at most 300.
    pub poap: u32,
    pub breakdown: ScoreBreakdown,
}

/// Letter grade bands over the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// Band for a total: 800+ is S, 650+ A, 500+ B, 350+ C, else D.
    pub fn for_total(total: u32) -> Self {
        match total {
            800.. => Self::S,
            650..=799 => Self::A,
            500..=649 => Self::B,
            350..=499 => Self::C,
            _ => Self::D,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::S => "Elite Operator",
            Self::A => "Senior Operator",
            Self::B => "Experienced Operator",
            Self::C => "Junior Operator",
            Self::D => "Novice Operator",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request body for `POST /v1/reputation/calculate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateReputationRequest {
    pub github_username: String,
    pub wallet_address: String,
}

/// Response body: the score plus the identity it was computed for.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReputationReport {
    pub github_username: String,
    pub wallet_address: String,
    #[serde(flatten)]
    pub score: ReputationScore,
    pub grade: Grade,
    pub grade_description: &'static str,
}
