use serde::{Deserialize, Serialize};

use super::operator::Operator;

/// A matched team. Members are snapshots taken at matching time; the
/// matcher never hands out references into its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// `team_` plus the 1-based position among accepted teams.
    pub team_id: String,
    /// Members in selection order, leader first.
    pub members: Vec<Operator>,
    /// Mean member reputation, rounded to the nearest integer.
    pub average_reputation: u32,
    /// Cohesion heuristic on a 0..=100 scale.
    pub team_strength: u32,
    pub roles: TeamRoles,
}

/// Role summary for a team.
///
/// Describes capability rather than assignment: the leader may also
/// appear under `technical` or `financial`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRoles {
    pub leader: Operator,
    pub technical: Vec<Operator>,
    pub financial: Operator,
}

/// Request body for `POST /v1/teams/match`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchTeamsRequest {
    pub operators: Vec<Operator>,
    #[serde(default = "default_min_team_size")]
    pub min_team_size: usize,
    #[serde(default = "default_max_team_size")]
    pub max_team_size: usize,
}

fn default_min_team_size() -> usize {
    3
}

fn default_max_team_size() -> usize {
    5
}
