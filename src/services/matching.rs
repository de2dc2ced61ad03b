//! Greedy team matcher.
//!
//! Groups scored operators into teams by walking a reputation-sorted
//! candidate list: each eligible leader seeds a team, role slots are
//! filled by the best remaining candidates, and the team is kept only
//! if it clears the average-reputation bar. Pure over its input; every
//! call gets its own used-operator set.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Operator, OperatorRole, Team, TeamRoles};

/// Reputation floors for leading a team, the role fills, and the
/// generic fill.
const LEADER_MIN_REPUTATION: u32 = 600;
const TECHNICAL_MIN_REPUTATION: u32 = 500;
const FINANCIAL_MIN_REPUTATION: u32 = 450;
const FILL_MIN_REPUTATION: u32 = 400;

/// A candidate team is only accepted when its unrounded mean reputation
/// clears this bar.
const MIN_AVERAGE_REPUTATION: f64 = 600.0;

/// Number of distinct preferred roles, for coverage scoring.
const ROLE_KINDS: f64 = 4.0;

#[derive(Debug, Error)]
pub enum MatchError {
    #[error("at least {required} operators are required, got {actual}")]
    NotEnoughOperators { required: usize, actual: usize },

    #[error("invalid team size bounds: min {min}, max {max}")]
    InvalidSizeBounds { min: usize, max: usize },
}

/// Greedy team matcher over a single batch of operators.
#[derive(Debug, Clone)]
pub struct TeamMatcher {
    min_team_size: usize,
    max_team_size: usize,
}

impl Default for TeamMatcher {
    fn default() -> Self {
        Self::new(3, 5)
    }
}

impl TeamMatcher {
    pub fn new(min_team_size: usize, max_team_size: usize) -> Self {
        Self {
            min_team_size,
            max_team_size,
        }
    }

    /// Form teams from a batch of operators.
    ///
    /// Returns the accepted teams in formation order; an empty list
    /// means no group cleared the bar and is not an error. A candidate
    /// team that fails acceptance keeps its members consumed.
    pub fn match_teams(&self, operators: Vec<Operator>) -> Result<Vec<Team>, MatchError> {
        if self.min_team_size == 0 || self.min_team_size > self.max_team_size {
            return Err(MatchError::InvalidSizeBounds {
                min: self.min_team_size,
                max: self.max_team_size,
            });
        }
        if operators.len() < self.min_team_size {
            return Err(MatchError::NotEnoughOperators {
                required: self.min_team_size,
                actual: operators.len(),
            });
        }

        let mut sorted = operators;
        // Stable sort: ties keep their arrival order.
        sorted.sort_by(|a, b| b.reputation_score.cmp(&a.reputation_score));

        let mut teams: Vec<Team> = Vec::new();
        let mut used: HashSet<String> = HashSet::new();

        for leader in &sorted {
            if used.contains(&leader.wallet_address)
                || leader.reputation_score < LEADER_MIN_REPUTATION
            {
                continue;
            }

            let mut members: Vec<Operator> = vec![leader.clone()];
            used.insert(leader.wallet_address.clone());

            // At most one technical fill, best remaining candidate first.
            if let Some(op) = sorted.iter().find(|op| {
                !used.contains(&op.wallet_address)
                    && op.reputation_score >= TECHNICAL_MIN_REPUTATION
                    && is_technical(op)
            }) {
                used.insert(op.wallet_address.clone());
                members.push(op.clone());
            }

            // At most one financial fill.
            if let Some(op) = sorted.iter().find(|op| {
                !used.contains(&op.wallet_address)
                    && op.reputation_score >= FINANCIAL_MIN_REPUTATION
                    && is_financial(op)
            }) {
                used.insert(op.wallet_address.clone());
                members.push(op.clone());
            }

            // Generic fill up to the max size.
            while members.len() < self.max_team_size {
                match sorted.iter().find(|op| {
                    !used.contains(&op.wallet_address)
                        && op.reputation_score >= FILL_MIN_REPUTATION
                }) {
                    Some(op) => {
                        used.insert(op.wallet_address.clone());
                        members.push(op.clone());
                    }
                    None => break,
                }
            }

            // Members of a rejected candidate team stay consumed.
            if members.len() < self.min_team_size {
                continue;
            }
            let average = mean_reputation(&members);
            if average < MIN_AVERAGE_REPUTATION {
                continue;
            }

            let roles = TeamRoles {
                leader: members[0].clone(),
                technical: members
                    .iter()
                    .filter(|m| is_technical(m))
                    .cloned()
                    .collect(),
                financial: members
                    .iter()
                    .find(|m| is_financial(m))
                    .unwrap_or_else(|| &members[members.len() - 1])
                    .clone(),
            };

            teams.push(Team {
                team_id: format!("team_{}", teams.len() + 1),
                average_reputation: average.round() as u32,
                team_strength: team_strength(&members),
                roles,
                members,
            });
        }

        Ok(teams)
    }
}

/// Technical capability: declared role or a matching skill. Skills are
/// compared as exact lowercase strings.
fn is_technical(operator: &Operator) -> bool {
    operator.preferred_role == OperatorRole::Technical
        || operator
            .skills
            .iter()
            .any(|skill| skill == "solidity" || skill == "ethereum")
}

/// Financial capability: declared role or a matching skill.
fn is_financial(operator: &Operator) -> bool {
    operator.preferred_role == OperatorRole::Financial
        || operator
            .skills
            .iter()
            .any(|skill| skill == "defi" || skill == "treasury")
}

fn mean_reputation(members: &[Operator]) -> f64 {
    let sum: u64 = members.iter().map(|m| u64::from(m.reputation_score)).sum();
    sum as f64 / members.len() as f64
}

/// Cohesion heuristic on a 0..=100 scale: reputation level, reputation
/// spread, preferred-role coverage, and skill variety, weighted.
fn team_strength(members: &[Operator]) -> u32 {
    let average = mean_reputation(members);

    let variance = members
        .iter()
        .map(|m| {
            let diff = f64::from(m.reputation_score) - average;
            diff * diff
        })
        .sum::<f64>()
        / members.len() as f64;
    let diversity = (100.0 - variance.sqrt() / 10.0).max(0.0);

    let distinct_roles: HashSet<OperatorRole> =
        members.iter().map(|m| m.preferred_role).collect();
    let role_coverage = distinct_roles.len() as f64 / ROLE_KINDS * 100.0;

    let distinct_skills: HashSet<&str> = members
        .iter()
        .flat_map(|m| m.skills.iter().map(String::as_str))
        .collect();
    let skill_diversity = (distinct_skills.len() as f64 * 10.0).min(100.0);

    let strength = average / 10.0 * 0.5
        + diversity * 0.2
        + role_coverage * 0.15
        + skill_diversity * 0.15;

    strength.min(100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator(
        username: &str,
        wallet: &str,
        reputation: u32,
        skills: &[&str],
        role: OperatorRole,
    ) -> Operator {
        Operator {
            github_username: username.to_string(),
            wallet_address: wallet.to_string(),
            reputation_score: reputation,
            skills: skills.iter().map(|s| s.to_string()).collect(),
            preferred_role: role,
        }
    }

    #[test]
    fn fills_roles_behind_the_strongest_leader() {
        let operators = vec![
            operator("alice", "0xa", 900, &[], OperatorRole::Leader),
            operator("bob", "0xb", 800, &["solidity"], OperatorRole::Technical),
            operator("carol", "0xc", 700, &["defi"], OperatorRole::Financial),
            operator("dave", "0xd", 650, &[], OperatorRole::Member),
        ];

        let teams = TeamMatcher::default().match_teams(operators).unwrap();

        assert_eq!(teams.len(), 1);
        let team = &teams[0];
        assert_eq!(team.team_id, "team_1");
        assert_eq!(team.members.len(), 4);
        assert_eq!(team.roles.leader.github_username, "alice");
        assert_eq!(team.members[1].github_username, "bob");
        assert_eq!(team.members[2].github_username, "carol");
        assert_eq!(team.members[3].github_username, "dave");
        // 3050 / 4 = 762.5, rounded half up.
        assert_eq!(team.average_reputation, 763);
        assert_eq!(team.roles.technical.len(), 1);
        assert_eq!(team.roles.technical[0].github_username, "bob");
        assert_eq!(team.roles.financial.github_username, "carol");
        assert_eq!(team.team_strength, 74);
    }

    #[test]
    fn too_few_operators_is_an_input_error() {
        let operators = vec![
            operator("alice", "0xa", 900, &[], OperatorRole::Leader),
            operator("bob", "0xb", 800, &[], OperatorRole::Member),
        ];

        let err = TeamMatcher::default().match_teams(operators).unwrap_err();
        match err {
            MatchError::NotEnoughOperators { required, actual } => {
                assert_eq!(required, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nonsensical_size_bounds_are_rejected() {
        let operators: Vec<Operator> = (0..5)
            .map(|i| operator(&format!("op{i}"), &format!("0x{i}"), 700, &[], OperatorRole::Member))
            .collect();

        assert!(matches!(
            TeamMatcher::new(0, 5).match_teams(operators.clone()),
            Err(MatchError::InvalidSizeBounds { min: 0, max: 5 })
        ));
        assert!(matches!(
            TeamMatcher::new(4, 2).match_teams(operators),
            Err(MatchError::InvalidSizeBounds { min: 4, max: 2 })
        ));
    }

    #[test]
    fn no_eligible_leader_yields_no_teams() {
        let operators: Vec<Operator> = (0..5)
            .map(|i| {
                operator(
                    &format!("op{i}"),
                    &format!("0x{i}"),
                    550,
                    &[],
                    OperatorRole::Member,
                )
            })
            .collect();

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn leader_threshold_is_inclusive() {
        let operators = vec![
            operator("alice", "0xa", 600, &[], OperatorRole::Leader),
            operator("bob", "0xb", 600, &[], OperatorRole::Member),
            operator("carol", "0xc", 600, &[], OperatorRole::Member),
        ];

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].average_reputation, 600);
    }

    #[test]
    fn teams_cap_at_max_size_and_number_sequentially() {
        let operators: Vec<Operator> = (0..8)
            .map(|i| {
                operator(
                    &format!("op{i}"),
                    &format!("0x{i}"),
                    700,
                    &[],
                    OperatorRole::Member,
                )
            })
            .collect();

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].team_id, "team_1");
        assert_eq!(teams[0].members.len(), 5);
        assert_eq!(teams[1].team_id, "team_2");
        assert_eq!(teams[1].members.len(), 3);
    }

    #[test]
    fn no_wallet_appears_in_two_teams() {
        let operators: Vec<Operator> = (0..12)
            .map(|i| {
                operator(
                    &format!("op{i}"),
                    &format!("0x{i}"),
                    900 - i as u32 * 10,
                    &[],
                    OperatorRole::Member,
                )
            })
            .collect();

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert!(teams.len() >= 2);

        let mut seen = HashSet::new();
        for team in &teams {
            for member in &team.members {
                assert!(
                    seen.insert(member.wallet_address.clone()),
                    "{} assigned twice",
                    member.wallet_address
                );
            }
        }
    }

    #[test]
    fn rejected_team_keeps_its_members_consumed() {
        // The top leader drags in the only role fills, fails the average
        // bar, and burns all three. The remaining trio then forms the
        // first accepted team.
        let operators = vec![
            operator("lead", "0xa", 620, &[], OperatorRole::Leader),
            operator("tech", "0xb", 510, &[], OperatorRole::Technical),
            operator("fin", "0xc", 455, &[], OperatorRole::Financial),
            operator("m1", "0xd", 615, &[], OperatorRole::Member),
            operator("m2", "0xe", 612, &[], OperatorRole::Member),
            operator("m3", "0xf", 610, &[], OperatorRole::Member),
        ];

        let teams = TeamMatcher::new(3, 3).match_teams(operators).unwrap();

        assert_eq!(teams.len(), 1);
        let team = &teams[0];
        // Accepted teams are numbered by acceptance, not by attempt.
        assert_eq!(team.team_id, "team_1");
        let usernames: Vec<&str> = team
            .members
            .iter()
            .map(|m| m.github_username.as_str())
            .collect();
        assert_eq!(usernames, vec!["m1", "m2", "m3"]);
    }

    #[test]
    fn technical_fill_takes_best_eligible_candidate() {
        let operators = vec![
            operator("lead", "0xa", 900, &[], OperatorRole::Leader),
            operator("tech_hi", "0xb", 800, &[], OperatorRole::Technical),
            operator("tech_skill", "0xc", 550, &["ethereum"], OperatorRole::Member),
            operator("tech_low", "0xd", 450, &[], OperatorRole::Technical),
        ];

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert_eq!(teams.len(), 1);
        let team = &teams[0];

        // tech_hi fills the slot; tech_low misses the 500 floor and only
        // joins through the generic fill, after tech_skill.
        assert_eq!(team.members[1].github_username, "tech_hi");
        assert_eq!(team.members[3].github_username, "tech_low");
        // The summary lists every capability match, slot or not.
        let technical: Vec<&str> = team
            .roles
            .technical
            .iter()
            .map(|m| m.github_username.as_str())
            .collect();
        assert_eq!(technical, vec!["tech_hi", "tech_skill", "tech_low"]);
        // Nobody matches the financial predicate, so the summary falls
        // back to the last member.
        assert_eq!(team.roles.financial.github_username, "tech_low");
    }

    #[test]
    fn financial_fill_matches_on_skills() {
        let operators = vec![
            operator("lead", "0xa", 900, &[], OperatorRole::Leader),
            operator("treasury", "0xb", 500, &["treasury"], OperatorRole::Member),
            operator("m1", "0xc", 700, &[], OperatorRole::Member),
        ];

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].members[1].github_username, "treasury");
        assert_eq!(teams[0].roles.financial.github_username, "treasury");
    }

    #[test]
    fn skill_matching_is_exact_and_case_sensitive() {
        let operators = vec![
            operator("lead", "0xa", 900, &[], OperatorRole::Leader),
            operator("caps", "0xb", 800, &["Solidity"], OperatorRole::Member),
            operator("m1", "0xc", 700, &[], OperatorRole::Member),
        ];

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert_eq!(teams.len(), 1);
        assert!(teams[0].roles.technical.is_empty());
    }

    #[test]
    fn acceptance_uses_the_unrounded_average() {
        // Mean 599.67 rounds to 600 but must still be rejected.
        let operators = vec![
            operator("lead", "0xa", 600, &[], OperatorRole::Leader),
            operator("m1", "0xb", 600, &[], OperatorRole::Member),
            operator("m2", "0xc", 599, &[], OperatorRole::Member),
        ];

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert!(teams.is_empty());
    }

    #[test]
    fn strength_is_bounded_and_deterministic() {
        let operators: Vec<Operator> = (0..10)
            .map(|i| {
                let skills: &[&str] = match i % 3 {
                    0 => &[],
                    1 => &["solidity"],
                    _ => &["solidity", "defi"],
                };
                operator(
                    &format!("op{i}"),
                    &format!("0x{i}"),
                    1000 - i as u32 * 37,
                    skills,
                    match i % 4 {
                        0 => OperatorRole::Leader,
                        1 => OperatorRole::Technical,
                        2 => OperatorRole::Financial,
                        _ => OperatorRole::Member,
                    },
                )
            })
            .collect();

        let matcher = TeamMatcher::default();
        let first = matcher.match_teams(operators.clone()).unwrap();
        let second = matcher.match_teams(operators).unwrap();

        assert!(!first.is_empty());
        for team in &first {
            assert!(team.team_strength <= 100);
        }
        assert_eq!(first, second);
    }

    #[test]
    fn uniform_team_strength_is_stable() {
        // Equal scores, one role, no skills: 50 + 20 + 3.75 + 0.
        let operators: Vec<Operator> = (0..5)
            .map(|i| {
                operator(
                    &format!("op{i}"),
                    &format!("0x{i}"),
                    1000,
                    &[],
                    OperatorRole::Member,
                )
            })
            .collect();

        let teams = TeamMatcher::default().match_teams(operators).unwrap();
        assert_eq!(teams.len(), 1);
        assert_eq!(teams[0].team_strength, 74);
    }
}
