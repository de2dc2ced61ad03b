//! Team handlers
//!
//! HTTP surface for team matching and for building the registry
//! contract's registration payload.

use std::collections::HashSet;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::models::{
    is_valid_address, MatchTeamsRequest, TeamRegistration, TeamRegistrationRequest,
};
use crate::services::matching::MatchError;
use crate::services::TeamMatcher;

/// Registration roster constraints, mirroring what the registry
/// contract accepts.
const MIN_TEAM_NAME_CHARS: usize = 3;
const MIN_REGISTRATION_MEMBERS: usize = 3;
const MAX_REGISTRATION_MEMBERS: usize = 6;
const MIN_REGISTRATION_AVERAGE: f64 = 600.0;

/// Standard API response wrapper
#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    data: T,
    meta: ResponseMeta,
}

#[derive(Serialize)]
struct ResponseMeta {
    request_id: String,
}

impl<T: Serialize> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            meta: ResponseMeta {
                request_id: uuid::Uuid::new_v4().to_string(),
            },
        }
    }
}

/// POST /v1/teams/match
///
/// Group scored operators into teams. An empty list is a valid result,
/// not an error.
pub async fn match_teams(body: web::Json<MatchTeamsRequest>) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let matcher = TeamMatcher::new(request.min_team_size, request.max_team_size);
    let teams = matcher
        .match_teams(request.operators)
        .map_err(map_match_error)?;

    info!(teams = teams.len(), "team matching complete");

    Ok(HttpResponse::Ok().json(ApiResponse::new(teams)))
}

/// POST /v1/teams/registration
///
/// Validate a roster and shape it into the registry contract's
/// `createTeamValidator` argument lists. Submitting the transaction is
/// the caller's wallet's job.
pub async fn build_registration(
    body: web::Json<TeamRegistrationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let team_name = request.team_name.trim();
    if team_name.chars().count() < MIN_TEAM_NAME_CHARS {
        return Err(AppError::Validation(format!(
            "team name must be at least {MIN_TEAM_NAME_CHARS} characters"
        )));
    }
    if request.members.len() < MIN_REGISTRATION_MEMBERS
        || request.members.len() > MAX_REGISTRATION_MEMBERS
    {
        return Err(AppError::Validation(format!(
            "teams register with {MIN_REGISTRATION_MEMBERS} to {MAX_REGISTRATION_MEMBERS} members, got {}",
            request.members.len()
        )));
    }

    let mut seen = HashSet::new();
    for (idx, member) in request.members.iter().enumerate() {
        if member.github_username.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "member {} is missing a GitHub username",
                idx + 1
            )));
        }
        if !is_valid_address(&member.wallet_address) {
            return Err(AppError::Validation(format!(
                "member {} has an invalid wallet address: {}",
                idx + 1,
                member.wallet_address
            )));
        }
        // Hex addresses are case-insensitive identifiers.
        if !seen.insert(member.wallet_address.to_lowercase()) {
            return Err(AppError::Validation(format!(
                "duplicate wallet address: {}",
                member.wallet_address
            )));
        }
    }

    let average = request
        .members
        .iter()
        .map(|m| f64::from(m.reputation_score))
        .sum::<f64>()
        / request.members.len() as f64;
    if average < MIN_REGISTRATION_AVERAGE {
        return Err(AppError::Validation(format!(
            "team average reputation {} is below the required {MIN_REGISTRATION_AVERAGE}",
            average.round()
        )));
    }

    let registration = TeamRegistration::from_members(team_name, &request.members);

    info!(
        team_name,
        members = registration.members.len(),
        "registration payload built"
    );

    Ok(HttpResponse::Ok().json(ApiResponse::new(registration)))
}

/// Map matching errors to application errors
fn map_match_error(e: MatchError) -> AppError {
    match e {
        MatchError::NotEnoughOperators { .. } | MatchError::InvalidSizeBounds { .. } => {
            AppError::Validation(e.to_string())
        }
    }
}

/// Configure team routes
pub fn configure_team_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/teams/match").route(web::post().to(match_teams)));
    cfg.service(web::resource("/teams/registration").route(web::post().to(build_registration)));
}
