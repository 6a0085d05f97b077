//! Feedback Analytics service entry point.

use std::sync::Arc;

use http::HeaderValue;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedback_analytics::adapters::{analytics_routes, AnalyticsAppState, InMemorySurveyStore};
use feedback_analytics::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let store = match &config.data.seed_path {
        Some(path) => InMemorySurveyStore::from_json_file(path)?,
        None => InMemorySurveyStore::new(),
    };
    info!(
        surveys = store.survey_count().await,
        seed_path = ?config.data.seed_path,
        "Survey store ready"
    );

    let state = AnalyticsAppState::new(Arc::new(store));
    let app = Router::new()
        .merge(analytics_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.server))
                .layer(TimeoutLayer::new(config.server.request_timeout())),
        );

    let addr = config.server.socket_addr()?;
    info!(addr = %addr, environment = ?config.server.environment, "Starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
