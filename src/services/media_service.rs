//! Domain service for fetching and normalizing media records.
//!
//! Handlers depend on the [`MediaService`] trait so the upstream client can be
//! swapped for a stub in tests.

use crate::domain::MediaId;
use crate::models::NormalizedRecord;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("Media not found: {0}")]
    NotFound(MediaId),

    #[error("Upstream error: {service} - {message}")]
    Upstream { service: String, message: String },
}

impl MediaError {
    /// Creates an upstream error for `AniList`.
    pub fn anilist_error(msg: impl Into<String>) -> Self {
        Self::Upstream {
            service: "AniList".to_string(),
            message: msg.into(),
        }
    }
}

impl From<crate::clients::AnilistError> for MediaError {
    fn from(err: crate::clients::AnilistError) -> Self {
        Self::anilist_error(err.to_string())
    }
}

/// # Examples
///
/// ```rust,ignore
/// use aniremap::services::{MediaService, MediaError};
/// use aniremap::domain::MediaId;
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn MediaService>, id: MediaId) -> Result<(), MediaError> {
///     let record = service.fetch_normalized(id).await?;
///     println!("{}", record.title);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait MediaService: Send + Sync {
    /// Fetches a media entry upstream and remaps it.
    ///
    /// # Errors
    ///
    /// - Returns [`MediaError::NotFound`] if upstream has no such id
    /// - Returns [`MediaError::Upstream`] on transport or GraphQL failures
    async fn fetch_normalized(&self, id: MediaId) -> Result<NormalizedRecord, MediaError>;
}
