//! Reputation scoring engine.
//!
//! Scores a validator operator on a 0..=1000 scale from two public
//! signals: GitHub activity (up to 700 points) and POAP event history
//! (up to 300 points). Pure functions over already-fetched data;
//! fetching lives in `clients` and orchestration in
//! `services::reputation`.

use chrono::{DateTime, Utc};

use crate::models::{GithubProfile, GithubRepo, PoapToken, ReputationScore, ScoreBreakdown};

/// Points per public repository, capped.
const REPO_POINTS: u32 = 8;
const REPO_CAP: u32 = 200;

/// Followers needed per point, capped.
const FOLLOWERS_PER_POINT: u32 = 5;
const FOLLOWER_CAP: u32 = 150;

/// Points per full account year (365-day years), capped.
const EXPERIENCE_POINTS_PER_YEAR: u32 = 25;
const EXPERIENCE_CAP: u32 = 200;

/// DVT bonus: points per keyword match, per-repo cap, overall cap.
const DVT_MATCH_POINTS: u32 = 15;
const DVT_REPO_CAP: u32 = 30;
const DVT_BONUS_CAP: u32 = 150;

/// GitHub sub-score cap.
const GITHUB_CAP: u32 = 700;

/// POAP event points and caps.
const ETHEREUM_EVENT_POINTS: u32 = 25;
const DVT_EVENT_POINTS: u32 = 15;
const HACKATHON_POINTS: u32 = 50;
const ETHGLOBAL_POINTS: u32 = 20;
const POAP_CATEGORY_CAP: u32 = 150;
const POAP_CAP: u32 = 300;

/// Repo-text keywords that mark DVT or Ethereum infrastructure work.
const DVT_REPO_KEYWORDS: [&str; 7] = [
    "dvt",
    "obol",
    "ethereum",
    "validator",
    "consensus",
    "beacon",
    "staking",
];

/// Event-text keyword sets for the POAP terms.
const ETHEREUM_EVENT_KEYWORDS: [&str; 6] = [
    "ethereum",
    "eth",
    "devconnect",
    "devcon",
    "consensus",
    "staking",
];
const DVT_EVENT_KEYWORDS: [&str; 4] = ["dvt", "obol", "validator", "distributed"];
const HACKATHON_KEYWORDS: [&str; 5] = ["ethglobal", "hackathon", "buidl", "hack", "builder"];

/// Score an operator from fetched GitHub and POAP data.
///
/// `now` is the caller's clock; account age is the only time-dependent
/// term, so a fixed `now` makes the result fully deterministic. Empty
/// repo or POAP lists are valid and simply yield zero bonus terms.
pub fn score(
    profile: &GithubProfile,
    repos: &[GithubRepo],
    poaps: &[PoapToken],
    now: DateTime<Utc>,
) -> ReputationScore {
    let repos_term = repo_term(profile.public_repos);
    let followers_term = follower_term(profile.followers);
    let experience_term = experience_term(profile.created_at, now);
    let dvt_term = dvt_bonus(repos);

    let github = (repos_term + followers_term + experience_term + dvt_term).min(GITHUB_CAP);

    let (ethereum_events, hackathons) = poap_terms(poaps);
    let poap = (ethereum_events + hackathons).min(POAP_CAP);

    ReputationScore {
        total: github + poap,
        github,
        poap,
        breakdown: ScoreBreakdown {
            repos: repos_term,
            followers: followers_term,
            experience: experience_term,
            dvt_bonus: dvt_term,
            ethereum_events,
            hackathons,
        },
    }
}

fn repo_term(public_repos: u32) -> u32 {
    public_repos.saturating_mul(REPO_POINTS).min(REPO_CAP)
}

fn follower_term(followers: u32) -> u32 {
    (followers / FOLLOWERS_PER_POINT).min(FOLLOWER_CAP)
}

/// Whole 365-day years between account creation and `now`. Creation
/// dates in the future count as zero years, never negative points.
fn experience_term(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u32 {
    let days = (now - created_at).num_days().max(0);
    let years = u32::try_from(days / 365).unwrap_or(u32::MAX);
    years
        .saturating_mul(EXPERIENCE_POINTS_PER_YEAR)
        .min(EXPERIENCE_CAP)
}

/// Keyword bonus across the repo list. A repo with at least one keyword
/// match contributes its match count times `DVT_MATCH_POINTS` plus its
/// star count, capped per repo; the running total is capped at the end.
fn dvt_bonus(repos: &[GithubRepo]) -> u32 {
    let mut bonus: u32 = 0;
    for repo in repos {
        let text = format!(
            "{} {} {}",
            repo.name,
            repo.description.as_deref().unwrap_or(""),
            repo.topics.join(" ")
        )
        .to_lowercase();

        let matches = DVT_REPO_KEYWORDS
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count() as u32;
        if matches > 0 {
            let repo_bonus = matches
                .saturating_mul(DVT_MATCH_POINTS)
                .saturating_add(repo.stargazers_count)
                .min(DVT_REPO_CAP);
            bonus = bonus.saturating_add(repo_bonus);
        }
    }
    bonus.min(DVT_BONUS_CAP)
}

/// Ethereum-event and hackathon terms across the POAP list, each capped
/// after accumulation. The DVT sub-bonus only applies to events that
/// already matched the Ethereum set.
fn poap_terms(poaps: &[PoapToken]) -> (u32, u32) {
    let mut ethereum_events: u32 = 0;
    let mut hackathons: u32 = 0;

    for poap in poaps {
        let text = format!("{} {}", poap.event.name, poap.event.description).to_lowercase();

        if contains_any(&text, &ETHEREUM_EVENT_KEYWORDS) {
            ethereum_events = ethereum_events.saturating_add(ETHEREUM_EVENT_POINTS);
            if contains_any(&text, &DVT_EVENT_KEYWORDS) {
                ethereum_events = ethereum_events.saturating_add(DVT_EVENT_POINTS);
            }
        }

        if contains_any(&text, &HACKATHON_KEYWORDS) {
            hackathons = hackathons.saturating_add(HACKATHON_POINTS);
            if text.contains("ethglobal") {
                hackathons = hackathons.saturating_add(ETHGLOBAL_POINTS);
            }
        }
    }

    (
        ethereum_events.min(POAP_CATEGORY_CAP),
        hackathons.min(POAP_CATEGORY_CAP),
    )
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
