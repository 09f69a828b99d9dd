use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

use marquee_config::CorsConfig;
use marquee_config::rate_limit::IpGovernorConfig;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::movies::init_movies_router;
use crate::modules::shows::init_shows_router;
use crate::modules::users::init_users_router;
use crate::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

const LIMITER_CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Periodically drops idle per-IP buckets. Stops once the router, and with it
/// the limiter, is dropped.
fn spawn_limiter_cleanup(governor: &IpGovernorConfig) {
    let limiter = Arc::downgrade(governor.limiter());
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(LIMITER_CLEANUP_INTERVAL);
        interval.tick().await;
        loop {
            interval.tick().await;
            let Some(limiter) = limiter.upgrade() else {
                break;
            };
            limiter.retain_recent();
            tracing::debug!(tracked_clients = limiter.len(), "Rate limiter cleaned up");
        }
    });
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    // Credentials cannot be combined with a wildcard origin.
    if config.allows_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}

pub fn init_router(state: AppState) -> Router {
    let mut api = Router::new()
        .route("/health", get(health))
        .nest("/users", init_users_router())
        .nest("/movies", init_movies_router())
        .nest("/shows", init_shows_router());

    if let Some(governor) = state.rate_limit_config.governor_config() {
        spawn_limiter_cleanup(&governor);
        api = api.layer(GovernorLayer::new(Arc::new(governor)));
    } else {
        tracing::info!("Rate limiting disabled");
    }

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .merge(api)
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}

