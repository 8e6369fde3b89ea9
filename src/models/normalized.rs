use serde::{Deserialize, Serialize};

use super::media::{ExternalLink, Trailer};

/// Integer-coded record produced by [`crate::normalizer::normalize`].
///
/// Upstream fields without a remapping rule are carried through under their
/// original names, except `season`, which is an upstream enum string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRecord {
    pub id: Option<i32>,
    pub title: String,
    pub alternative_title: String,
    pub storyline: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub episode_number: Option<i32>,
    pub episode_duration: Option<i32>,
    pub horizontal_images: Option<String>,
    pub vertical_images: Option<String>,
    pub status_id: u32,
    pub origin_id: u32,
    pub type_id: u32,
    pub anime_relations: Vec<AnimeRelation>,
    pub genres: Vec<u32>,
    pub studio_id: Vec<u32>,
    pub season_year: Option<i32>,
    pub chapters: Option<i32>,
    pub volumes: Option<i32>,
    pub synonyms: Vec<String>,
    pub average_score: Option<i32>,
    pub mean_score: Option<i32>,
    pub popularity: Option<i32>,
    pub favourites: Option<i32>,
    pub is_adult: Option<bool>,
    pub trailer: Option<Trailer>,
    pub external_links: Vec<ExternalLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimeRelation {
    pub id: i32,
    pub relation_type: u32,
}
