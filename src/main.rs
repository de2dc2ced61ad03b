use std::sync::Arc;
use std::time::Duration;

use actix_web::{middleware, web, App, HttpResponse, HttpServer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use validator_jobs::clients::{GithubClient, PoapClient};
use validator_jobs::{handlers, AppState, Config};

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "validator-jobs"
    }))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "validator_jobs=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");

    info!(
        "Starting Validator Jobs server on {}:{}",
        config.host, config.port
    );

    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    let github = GithubClient::new(&config.github_api_url, config.github_token.clone(), timeout)
        .expect("Failed to build GitHub client");
    if config.github_token.is_some() {
        info!("GitHub client initialized with an API token");
    } else {
        info!("GitHub client initialized without a token; expect low rate limits");
    }

    let poap = PoapClient::new(&config.poap_api_url, config.poap_api_key.clone(), timeout)
        .expect("Failed to build POAP client");

    let app_state = web::Data::new(AppState {
        config: config.clone(),
        github: Arc::new(github),
        poap: Arc::new(poap),
    });

    let server_addr = format!("{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/v1")
                    .configure(handlers::configure_reputation_routes)
                    .configure(handlers::configure_team_routes),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
