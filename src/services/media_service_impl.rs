use std::sync::Arc;
use tracing::{debug, info, warn};

use super::media_service::{MediaError, MediaService};
use crate::clients::AnilistClient;
use crate::constants::metrics::MEDIA_FETCH_TOTAL;
use crate::domain::MediaId;
use crate::models::NormalizedRecord;
use crate::normalizer::normalize;

/// [`MediaService`] backed by the public `AniList` API.
pub struct AnilistMediaService {
    anilist: Arc<AnilistClient>,
}

impl AnilistMediaService {
    #[must_use]
    pub const fn new(anilist: Arc<AnilistClient>) -> Self {
        Self { anilist }
    }
}

fn record_outcome(outcome: &'static str) {
    metrics::counter!(MEDIA_FETCH_TOTAL, "outcome" => outcome).increment(1);
}

#[async_trait::async_trait]
impl MediaService for AnilistMediaService {
    async fn fetch_normalized(&self, id: MediaId) -> Result<NormalizedRecord, MediaError> {
        let media = match self.anilist.get_media(id).await {
            Ok(Some(media)) => media,
            Ok(None) => {
                record_outcome("not_found");
                info!(media_id = %id, "Media not found on AniList");
                return Err(MediaError::NotFound(id));
            }
            Err(e) => {
                record_outcome("error");
                warn!(media_id = %id, error = %e, "AniList fetch failed");
                return Err(e.into());
            }
        };

        let normalized = normalize(&media);
        record_outcome("success");

        debug!(
            media_id = %id,
            genres = normalized.genres.len(),
            studios = normalized.studio_id.len(),
            relations = normalized.anime_relations.len(),
            "Normalized media"
        );

        Ok(normalized)
    }
}
