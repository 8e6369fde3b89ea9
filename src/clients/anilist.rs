use crate::config::AnilistConfig;
use crate::domain::MediaId;
use crate::models::media::MediaRecord;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

const MEDIA_QUERY: &str = r"
    query ($id: Int) {
        Media(id: $id) {
            id
            title { romaji english native }
            type
            format
            status
            description
            source
            startDate { year month day }
            endDate { year month day }
            season
            seasonYear
            episodes
            duration
            chapters
            volumes
            genres
            synonyms
            averageScore
            meanScore
            popularity
            favourites
            isAdult
            bannerImage
            coverImage { extraLarge large medium color }
            trailer { id site thumbnail }
            externalLinks { url site }
            tags { id name description rank isMediaSpoiler category }
            relations {
                edges {
                    id
                    relationType
                    node {
                        id
                        type
                        format
                        status
                        title { romaji english native }
                    }
                }
            }
            studios {
                edges {
                    isMain
                    node { id name isAnimationStudio }
                }
            }
        }
    }
";

#[derive(Debug, Error)]
pub enum AnilistError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(StatusCode),

    #[error("GraphQL error: {0}")]
    GraphQl(String),
}

#[derive(Serialize)]
struct IdVar {
    id: i32,
}

#[derive(Serialize)]
struct IdRequest<'a> {
    query: &'a str,
    variables: IdVar,
}

/// Body of a `Media(id:)` GraphQL response.
#[derive(Debug, Default, Deserialize)]
pub struct MediaResponse {
    #[serde(default)]
    pub data: Option<MediaWrapper>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Default, Deserialize)]
pub struct MediaWrapper {
    #[serde(rename = "Media")]
    pub media: Option<MediaRecord>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub status: Option<u16>,
}

impl MediaResponse {
    /// Resolves the response into the media record, `None` when upstream
    /// reports the id as missing.
    pub fn into_media(self, status: StatusCode) -> Result<Option<MediaRecord>, AnilistError> {
        if status == StatusCode::NOT_FOUND || self.errors.iter().any(|e| e.status == Some(404)) {
            return Ok(None);
        }

        if let Some(err) = self.errors.into_iter().next() {
            return Err(AnilistError::GraphQl(err.message));
        }

        if !status.is_success() {
            return Err(AnilistError::Status(status));
        }

        Ok(self.data.and_then(|d| d.media))
    }
}

#[derive(Clone)]
pub struct AnilistClient {
    client: Client,
    api_url: String,
}

impl AnilistClient {
    pub fn new(config: &AnilistConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build AniList HTTP client: {e}"))?;

        Ok(Self::with_client(client, &config.api_url))
    }

    #[must_use]
    pub fn with_client(client: Client, api_url: &str) -> Self {
        Self {
            client,
            api_url: api_url.to_string(),
        }
    }

    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub async fn get_media(&self, id: MediaId) -> Result<Option<MediaRecord>, AnilistError> {
        let request_body = IdRequest {
            query: MEDIA_QUERY,
            variables: IdVar { id: id.value() },
        };

        let response = self
            .client
            .post(&self.api_url)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        debug!(media_id = %id, status = status.as_u16(), "AniList responded");

        let body: MediaResponse = if status.is_success() {
            response.json().await?
        } else {
            // Error bodies are not guaranteed to be JSON.
            response.json().await.unwrap_or_default()
        };

        body.into_media(status)
    }
}
