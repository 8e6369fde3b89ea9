use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::api::AppState;
use crate::constants::metrics::{HTTP_REQUEST_DURATION, HTTP_REQUESTS_TOTAL};

pub async fn get_metrics(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    state.prometheus_handle.as_ref().map_or_else(
        || "Metrics not enabled or failed to initialize".to_string(),
        PrometheusHandle::render,
    )
}

/// Groups routes by what they do to media. Unmatched paths collapse into
/// `other` so arbitrary URLs never become label values.
fn endpoint_label(route: Option<&str>) -> &'static str {
    match route {
        Some("/api/media/{id}" | "/api/media") => "media",
        Some("/api/anime/{id}") => "anime",
        Some("/api/manga/{id}") => "manga",
        Some("/api/normalize") => "normalize",
        Some("/api/system/status") => "status",
        Some("/metrics") => "metrics",
        _ => "other",
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().to_string();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|mp| mp.as_str().to_string());
    let endpoint = endpoint_label(route.as_deref());

    let span = info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %req.uri().path(),
        endpoint,
    );

    async move {
        let response = next.run(req).await;
        let status = response.status();

        let labels = [
            ("method", method),
            ("endpoint", endpoint.to_string()),
            ("status", status.as_u16().to_string()),
        ];
        metrics::counter!(HTTP_REQUESTS_TOTAL, &labels).increment(1);
        metrics::histogram!(HTTP_REQUEST_DURATION, &labels).record(start.elapsed().as_secs_f64());

        info!(
            status_code = status.as_u16(),
            duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
            upstream_failed = status == axum::http::StatusCode::BAD_GATEWAY,
            "Request finished"
        );

        response
    }
    .instrument(span)
    .await
}

/// Responses are JSON or plain text only, so nothing may be framed or
/// loaded from them.
pub async fn security_headers_middleware(req: Request, next: Next) -> Response {
    let mut response = next.run(req).await;
    let headers = response.headers_mut();

    for (name, value) in [
        ("x-content-type-options", "nosniff"),
        ("x-frame-options", "DENY"),
        ("referrer-policy", "no-referrer"),
        ("content-security-policy", "default-src 'none'; frame-ancestors 'none'"),
    ] {
        headers.insert(name, HeaderValue::from_static(value));
    }

    response
}
