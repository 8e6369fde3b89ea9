use std::sync::Arc;

use anyhow::Context;

use crate::clients::AnilistClient;
use crate::config::Config;
use crate::parser::parse_media_ref;
use crate::services::{AnilistMediaService, MediaService};

pub async fn cmd_fetch(config: &Config, target: &str) -> anyhow::Result<()> {
    let media_ref = parse_media_ref(target)?;
    tracing::debug!(id = %media_ref.id, kind = ?media_ref.kind, "Fetching media");

    let anilist = Arc::new(AnilistClient::new(&config.anilist)?);
    let service = AnilistMediaService::new(anilist);

    let record = service
        .fetch_normalized(media_ref.id)
        .await
        .with_context(|| format!("Failed to fetch media {}", media_ref.id))?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
