use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::clients::AnilistClient;
use crate::config::Config;
use crate::services::{AnilistMediaService, MediaService};

mod error;
mod media;
mod observability;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    pub media_service: Arc<dyn MediaService>,

    pub start_time: std::time::Instant,

    pub started_at: chrono::DateTime<chrono::Utc>,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    #[must_use]
    pub fn new(
        config: Config,
        media_service: Arc<dyn MediaService>,
        prometheus_handle: Option<PrometheusHandle>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            media_service,
            start_time: std::time::Instant::now(),
            started_at: chrono::Utc::now(),
            prometheus_handle,
        }
    }

    #[must_use]
    pub fn media_service(&self) -> &Arc<dyn MediaService> {
        &self.media_service
    }
}

pub fn create_app_state_from_config(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let anilist = Arc::new(AnilistClient::new(&config.anilist)?);
    let media_service = Arc::new(AnilistMediaService::new(anilist));
    Ok(Arc::new(AppState::new(
        config,
        media_service,
        prometheus_handle,
    )))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_origins = state.config.server.cors_allowed_origins.clone();

    let api_router = Router::new()
        .route("/media", get(media::get_media_by_link))
        .route("/media/{id}", get(media::get_media))
        .route("/anime/{id}", get(media::get_media))
        .route("/manga/{id}", get(media::get_media))
        .route("/normalize", post(media::normalize_record))
        .route("/system/status", get(system::get_status));

    let cors_layer = if cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> =
            cors_origins.iter().filter_map(|s| s.parse().ok()).collect();
        CorsLayer::new().allow_origin(origins)
    };

    Router::new()
        .nest("/api", api_router)
        .route("/metrics", get(observability::get_metrics))
        .with_state(state)
        .layer(cors_layer.allow_methods(Any).allow_headers(Any))
        .layer(middleware::from_fn(observability::security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(observability::logging_middleware))
}
