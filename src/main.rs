//! Symptom Scout server binary.
//!
//! Loads configuration from the environment, wires the OpenAI completion
//! client and the in-memory session store into the triage routes, and serves
//! the API over HTTP.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use symptom_scout::adapters::ai::{OpenAIClient, OpenAIConfig};
use symptom_scout::adapters::http::{triage_routes, TriageAppState, SESSION_ID_HEADER};
use symptom_scout::adapters::storage::InMemorySessionStore;
use symptom_scout::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let ai_config = OpenAIConfig::new(config.ai.api_key.clone().unwrap_or_default())
        .with_model(config.ai.model.clone())
        .with_base_url(config.ai.base_url.clone())
        .with_timeout(config.ai.timeout());

    let state = TriageAppState {
        completion: Arc::new(OpenAIClient::new(ai_config)),
        sessions: Arc::new(InMemorySessionStore::new()),
    };

    let app = triage_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config))
                .layer(TimeoutLayer::new(Duration::from_secs(
                    config.server.request_timeout_secs,
                ))),
        )
        .with_state(state);

    let addr = config.server.socket_addr();
    info!(%addr, model = %config.ai.model, "starting symptom scout server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Initializes tracing from `RUST_LOG` or the configured log level.
///
/// Production gets JSON log lines for ingestion; development keeps the
/// human-readable format.
fn init_tracing(config: &AppConfig) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);

    if config.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Builds the CORS layer.
///
/// The session id header must be exposed or browsers will hide it from the
/// frontend and the session protocol falls apart. Without configured origins
/// any origin is allowed, which suits local development.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let session_header = HeaderName::from_static(SESSION_ID_HEADER);

    let origins = config.server.cors_origins_list();
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, session_header.clone()])
        .expose_headers([session_header])
}
