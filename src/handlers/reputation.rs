//! Reputation handlers
//!
//! HTTP surface for the reputation scoring engine.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::error::AppError;
use crate::models::{is_valid_address, CalculateReputationRequest};
use crate::services::ReputationService;
use crate::AppState;

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

/// POST /v1/reputation/calculate
///
/// Compute a reputation report for one operator from GitHub activity
/// and POAP event history.
pub async fn calculate_reputation(
    state: web::Data<AppState>,
    body: web::Json<CalculateReputationRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let username = request.github_username.trim();
    if username.is_empty() {
        return Err(AppError::Validation(
            "githubUsername must not be empty".to_string(),
        ));
    }
    if !is_valid_address(&request.wallet_address) {
        return Err(AppError::Validation(format!(
            "invalid wallet address: {}",
            request.wallet_address
        )));
    }

    let service = ReputationService::new(state.github.clone(), state.poap.clone());
    let report = service.calculate(username, &request.wallet_address).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(report)))
}

/// Configure reputation routes
pub fn configure_reputation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reputation/calculate").route(web::post().to(calculate_reputation)),
    );
}
