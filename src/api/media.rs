use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use std::sync::Arc;

use super::{ApiError, AppState, LinkQuery};
use crate::api::validation::{validate_link, validate_media_id};
use crate::models::{MediaRecord, NormalizedRecord};
use crate::normalizer::normalize;

pub async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<NormalizedRecord>, ApiError> {
    let id = validate_media_id(&id)?;
    let record = state.media_service().fetch_normalized(id).await?;
    Ok(Json(record))
}

pub async fn get_media_by_link(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LinkQuery>, QueryRejection>,
) -> Result<Json<NormalizedRecord>, ApiError> {
    let Query(query) = query?;
    let id = validate_link(&query.link)?;
    let record = state.media_service().fetch_normalized(id).await?;
    Ok(Json(record))
}

/// Remaps a caller-supplied raw record without contacting upstream.
pub async fn normalize_record(
    payload: Result<Json<MediaRecord>, JsonRejection>,
) -> Result<Json<NormalizedRecord>, ApiError> {
    let Json(media) = payload?;
    Ok(Json(normalize(&media)))
}
