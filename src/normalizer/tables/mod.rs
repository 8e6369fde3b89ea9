//! Static lookup tables from `AniList` vocabulary to downstream integer codes.
//!
//! The enum tables are small and scanned linearly. Genre, tag and studio
//! tables are indexed into hash maps on first use.

mod genres;
mod studios;
mod tags;

use std::collections::HashMap;
use std::sync::OnceLock;

pub use genres::GENRES;
pub use studios::STUDIOS;
pub use tags::TAGS;

/// Code used for unmapped status, source and format values.
pub const UNKNOWN_CODE: u32 = 0;

/// Code used for unmapped relation types. Equal to the `OTHER` entry.
pub const OTHER_RELATION_CODE: u32 = 6;

/// `MediaStatus` to status code.
pub const STATUS: &[(&str, u32)] = &[
    ("FINISHED", 1),
    ("RELEASING", 2),
    ("NOT_YET_RELEASED", 3),
    ("CANCELLED", 4),
    ("HIATUS", 5),
];

/// `MediaSource` to origin code.
pub const ORIGIN: &[(&str, u32)] = &[
    ("MANGA", 1),
    ("LIGHT_NOVEL", 2),
    ("VISUAL_NOVEL", 3),
    ("VIDEO_GAME", 4),
    ("NOVEL", 5),
    ("WEB_NOVEL", 6),
    ("DOUJINSHI", 7),
    ("ANIME", 8),
    ("ORIGINAL", 9),
    ("LIVE_ACTION", 10),
    ("GAME", 11),
    ("COMIC", 12),
    ("MULTIMEDIA_PROJECT", 13),
    ("PICTURE_BOOK", 14),
    ("OTHER", 15),
];

/// `MediaFormat` to type code.
pub const FORMAT: &[(&str, u32)] = &[
    ("TV", 1),
    ("TV_SHORT", 2),
    ("MOVIE", 3),
    ("SPECIAL", 4),
    ("OVA", 5),
    ("ONA", 6),
    ("MUSIC", 7),
    ("MANGA", 8),
    ("NOVEL", 9),
    ("ONE_SHOT", 10),
];

/// `MediaRelation` to relation code.
pub const RELATION: &[(&str, u32)] = &[
    ("PREQUEL", 1),
    ("SEQUEL", 2),
    ("ALTERNATIVE", 3),
    ("CHARACTER", 4),
    ("SIDE_STORY", 5),
    ("SPIN_OFF", 5),
    ("OTHER", 6),
];

fn scan(table: &[(&str, u32)], key: &str) -> Option<u32> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn index(table: &'static [(&'static str, u32)]) -> HashMap<&'static str, u32> {
    table.iter().copied().collect()
}

#[must_use]
pub fn status_code(status: &str) -> u32 {
    scan(STATUS, status).unwrap_or(UNKNOWN_CODE)
}

#[must_use]
pub fn origin_code(source: &str) -> u32 {
    scan(ORIGIN, source).unwrap_or(UNKNOWN_CODE)
}

#[must_use]
pub fn type_code(format: &str) -> u32 {
    scan(FORMAT, format).unwrap_or(UNKNOWN_CODE)
}

#[must_use]
pub fn relation_code(relation_type: &str) -> u32 {
    scan(RELATION, relation_type).unwrap_or(OTHER_RELATION_CODE)
}

#[must_use]
pub fn genre_code(name: &str) -> Option<u32> {
    static MAP: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    MAP.get_or_init(|| index(GENRES)).get(name).copied()
}

#[must_use]
pub fn tag_code(name: &str) -> Option<u32> {
    static MAP: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    MAP.get_or_init(|| index(TAGS)).get(name).copied()
}

#[must_use]
pub fn studio_code(name: &str) -> Option<u32> {
    static MAP: OnceLock<HashMap<&'static str, u32>> = OnceLock::new();
    MAP.get_or_init(|| index(STUDIOS)).get(name).copied()
}
