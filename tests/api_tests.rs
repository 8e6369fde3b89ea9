use std::sync::Arc;

use aniremap::api::AppState;
use aniremap::config::Config;
use aniremap::domain::MediaId;
use aniremap::models::{MediaRecord, NormalizedRecord};
use aniremap::normalize;
use aniremap::services::{MediaError, MediaService};
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Serves id 1 from a fixture, 404s id 404 and fails every other id.
struct StubMediaService;

#[async_trait::async_trait]
impl MediaService for StubMediaService {
    async fn fetch_normalized(&self, id: MediaId) -> Result<NormalizedRecord, MediaError> {
        match id.value() {
            1 => {
                let media: MediaRecord = serde_json::from_value(serde_json::json!({
                    "id": 1,
                    "title": { "english": "Cowboy Bebop", "native": "カウボイビバップ", "romaji": "Cowboy Bebop" },
                    "status": "FINISHED",
                    "source": "ORIGINAL",
                    "format": "TV",
                    "genres": ["Action"],
                    "studios": { "edges": [ { "node": { "name": "Sunrise" } } ] },
                    "startDate": { "year": 1998, "month": 4, "day": 3 }
                }))
                .unwrap();
                Ok(normalize(&media))
            }
            404 => Err(MediaError::NotFound(id)),
            _ => Err(MediaError::anilist_error("connection reset")),
        }
    }
}

fn spawn_app() -> Router {
    let state = Arc::new(AppState::new(
        Config::default(),
        Arc::new(StubMediaService),
        None,
    ));
    aniremap::api::router(state)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

async fn post_json(app: &Router, uri: &str, body: String) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_get_media_by_id() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/media/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Cowboy Bebop");
    assert_eq!(body["alternativeTitle"], "カウボイビバップ - Cowboy Bebop");
    assert_eq!(body["statusId"], 1);
    assert_eq!(body["originId"], 9);
    assert_eq!(body["typeId"], 1);
    assert_eq!(body["genres"], serde_json::json!([38]));
    assert_eq!(body["studioId"], serde_json::json!([1]));
    assert_eq!(body["startDate"], "1998-4-3");
}

#[tokio::test]
async fn test_anime_and_manga_aliases() {
    let app = spawn_app();

    for uri in ["/api/anime/1", "/api/manga/1"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(body["id"], 1);
    }
}

#[tokio::test]
async fn test_get_media_by_link() {
    let app = spawn_app();

    let (status, body) = get(
        &app,
        "/api/media?link=https%3A%2F%2Fanilist.co%2Fanime%2F1%2FCowboy-Bebop",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Cowboy Bebop");

    let (status, body) = get(&app, "/api/media?link=https%3A%2F%2Fexample.com%2Fanime%2F1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_invalid_ids_are_rejected() {
    let app = spawn_app();

    for uri in ["/api/media/0", "/api/media/abc", "/api/media/-3"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_upstream_errors() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/media/404").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Media 404 not found");

    let (status, body) = get(&app, "/api/media/2").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "AniList service is unavailable");
}

#[tokio::test]
async fn test_normalize_endpoint() {
    let app = spawn_app();

    let payload = serde_json::json!({
        "genres": ["Action"],
        "tags": [ { "name": "Isekai" } ],
        "studios": { "edges": [
            { "node": { "name": "MAPPA" } },
            { "node": { "name": "NoSuchStudio" } }
        ] },
        "relations": { "edges": [ { "relationType": "PREQUEL", "node": { "id": 7 } } ] }
    });

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/normalize")
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(body["genres"], serde_json::json!([38, 74]));
    assert_eq!(body["studioId"], serde_json::json!([182]));
    assert_eq!(
        body["animeRelations"],
        serde_json::json!([ { "id": 7, "relationType": 1 } ])
    );
}

#[tokio::test]
async fn test_missing_link_uses_error_envelope() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/media").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("link"));
}

#[tokio::test]
async fn test_malformed_normalize_body_uses_error_envelope() {
    let app = spawn_app();

    let (status, body) = post_json(&app, "/api/normalize", "{not json".to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_normalize_accepts_null_edges() {
    let app = spawn_app();

    let payload = serde_json::json!({
        "relations": { "edges": null },
        "studios": { "edges": null },
        "genres": null
    });
    let (status, body) = post_json(&app, "/api/normalize", payload.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["animeRelations"], serde_json::json!([]));
    assert_eq!(body["studioId"], serde_json::json!([]));
    assert_eq!(body["genres"], serde_json::json!([]));
}

#[tokio::test]
async fn test_system_status() {
    let app = spawn_app();

    let (status, body) = get(&app, "/api/system/status").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["data"]["upstream"], "https://graphql.anilist.co");
    assert_eq!(body["data"]["metrics_enabled"], false);
}

#[tokio::test]
async fn test_security_headers() {
    let app = spawn_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/system/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
}

#[tokio::test]
async fn test_metrics_disabled() {
    let app = spawn_app();

    let response = app
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("Metrics not enabled"));
}
