//! Validator Jobs - reputation scoring and team matching for DVT operators
//!
//! This library provides the scoring engine, the team matcher, and the
//! upstream API clients behind the Validator Jobs service.

use std::sync::Arc;

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::AppError;

pub use models::{
    CalculateReputationRequest, Grade, GithubProfile, GithubRepo, MatchTeamsRequest, Operator,
    OperatorRole, PoapEvent, PoapToken, RegistrationMember, ReputationReport, ReputationScore,
    ScoreBreakdown, Team, TeamRegistration, TeamRegistrationRequest, TeamRoles,
};

pub use clients::{GithubApi, GithubClient, PoapApi, PoapClient, UpstreamError};

pub use services::{MatchError, ReputationError, ReputationService, TeamMatcher};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub github: Arc<dyn GithubApi>,
    pub poap: Arc<dyn PoapApi>,
}
