use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::domain::{MediaId, MediaKind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("empty media reference")]
    Empty,

    #[error("not an AniList id or link: {0}")]
    Unrecognized(String),

    #[error("media id out of range: {0}")]
    OutOfRange(String),
}

/// Media id extracted from user input, with the catalogue when the input was a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaRef {
    pub id: MediaId,
    pub kind: Option<MediaKind>,
}

fn link_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)https?://(?:www\.)?anilist\.co/(anime|manga)/(\d+)").expect("Invalid regex")
    })
}

fn parse_positive(digits: &str) -> Result<MediaId, LinkError> {
    digits
        .parse::<i32>()
        .ok()
        .and_then(MediaId::new)
        .ok_or_else(|| LinkError::OutOfRange(digits.to_string()))
}

/// Accepts a bare numeric id or an `anilist.co/(anime|manga)/<id>` link.
pub fn parse_media_ref(input: &str) -> Result<MediaRef, LinkError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LinkError::Empty);
    }

    if input.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(MediaRef {
            id: parse_positive(input)?,
            kind: None,
        });
    }

    let caps = link_regex()
        .captures(input)
        .ok_or_else(|| LinkError::Unrecognized(input.to_string()))?;

    let kind = if caps[1].eq_ignore_ascii_case("manga") {
        MediaKind::Manga
    } else {
        MediaKind::Anime
    };

    Ok(MediaRef {
        id: parse_positive(&caps[2])?,
        kind: Some(kind),
    })
}

pub fn parse_media_id(input: &str) -> Result<MediaId, LinkError> {
    parse_media_ref(input).map(|r| r.id)
}
