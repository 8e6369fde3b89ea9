use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::MediaRecord;
use crate::normalizer::normalize;

/// Accepts a bare `Media` object, `{ "Media": ... }`, or a full
/// `{ "data": { "Media": ... } }` GraphQL response.
pub fn media_from_json(value: Value) -> Result<MediaRecord> {
    let Value::Object(mut map) = value else {
        anyhow::bail!("Document is not a JSON object");
    };

    if let Some(errors) = map
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())
    {
        let messages: Vec<&str> = errors
            .iter()
            .filter_map(|e| e.get("message").and_then(Value::as_str))
            .collect();
        anyhow::bail!("Document is a GraphQL error response: {}", messages.join("; "));
    }

    let media = if let Some(data) = map.remove("data") {
        match data {
            Value::Object(mut data) => data.remove("Media").unwrap_or(Value::Null),
            Value::Null => Value::Null,
            _ => anyhow::bail!("GraphQL `data` is not an object"),
        }
    } else if let Some(media) = map.remove("Media") {
        media
    } else {
        Value::Object(map)
    };

    if media.is_null() {
        anyhow::bail!("Document contains no Media object");
    }

    let record: MediaRecord =
        serde_json::from_value(media).context("Document is not an AniList Media object")?;
    if record == MediaRecord::default() {
        anyhow::bail!("Document has no AniList Media fields");
    }

    Ok(record)
}

pub fn cmd_normalize(file: Option<&Path>) -> Result<()> {
    let content = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let value: Value = serde_json::from_str(&content).context("Input is not valid JSON")?;
    let media = media_from_json(value)?;

    println!("{}", serde_json::to_string_pretty(&normalize(&media))?);
    Ok(())
}
