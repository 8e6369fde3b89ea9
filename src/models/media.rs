//! Raw `AniList` `Media` object as returned by the GraphQL endpoint.
//!
//! Every field is optional: upstream omits or nulls fields freely and the
//! normalizer applies its own placeholder policy.

use serde::{Deserialize, Deserializer, Serialize};

/// Upstream sends explicit `null` for empty connections and names.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaRecord {
    pub id: Option<i32>,
    pub title: Option<MediaTitle>,
    /// `ANIME` or `MANGA`. Some queries only select this in place of `format`.
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub source: Option<String>,
    pub start_date: Option<FuzzyDate>,
    pub end_date: Option<FuzzyDate>,
    pub season: Option<String>,
    pub season_year: Option<i32>,
    pub episodes: Option<i32>,
    pub duration: Option<i32>,
    pub chapters: Option<i32>,
    pub volumes: Option<i32>,
    pub genres: Option<Vec<String>>,
    pub synonyms: Option<Vec<String>>,
    pub average_score: Option<i32>,
    pub mean_score: Option<i32>,
    pub popularity: Option<i32>,
    pub favourites: Option<i32>,
    pub is_adult: Option<bool>,
    pub banner_image: Option<String>,
    pub cover_image: Option<CoverImage>,
    pub trailer: Option<Trailer>,
    pub external_links: Option<Vec<ExternalLink>>,
    pub tags: Option<Vec<MediaTag>>,
    pub relations: Option<RelationConnection>,
    pub studios: Option<StudioConnection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaTitle {
    pub romaji: Option<String>,
    pub english: Option<String>,
    pub native: Option<String>,
}

/// `AniList` dates may be partial: any component can be null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<i32>,
    pub day: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoverImage {
    pub extra_large: Option<String>,
    pub large: Option<String>,
    pub medium: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trailer {
    pub id: Option<String>,
    pub site: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalLink {
    pub url: Option<String>,
    pub site: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaTag {
    pub id: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub rank: Option<i32>,
    pub is_media_spoiler: Option<bool>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationConnection {
    #[serde(deserialize_with = "null_as_default")]
    pub edges: Vec<RelationEdge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RelationEdge {
    pub id: Option<i32>,
    pub relation_type: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub node: RelatedMedia,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedMedia {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i32,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub format: Option<String>,
    pub status: Option<String>,
    pub title: Option<MediaTitle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudioConnection {
    #[serde(deserialize_with = "null_as_default")]
    pub edges: Vec<StudioEdge>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioEdge {
    pub is_main: Option<bool>,
    #[serde(deserialize_with = "null_as_default")]
    pub node: Studio,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Studio {
    pub id: Option<i32>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub is_animation_studio: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_record() {
        let json = r#"{
            "id": 1,
            "title": { "romaji": "Cowboy Bebop", "english": null },
            "format": "TV",
            "startDate": { "year": 1998, "month": 4, "day": null },
            "relations": { "edges": [ { "relationType": "SIDE_STORY", "node": { "id": 5 } } ] },
            "studios": { "edges": [ { "node": { "name": "Sunrise" } } ] },
            "rankings": [ { "id": 9, "rank": 1 } ]
        }"#;

        let media: MediaRecord = serde_json::from_str(json).unwrap();
        assert_eq!(media.id, Some(1));
        assert_eq!(media.format.as_deref(), Some("TV"));
        assert_eq!(
            media.title.as_ref().and_then(|t| t.romaji.as_deref()),
            Some("Cowboy Bebop")
        );
        assert_eq!(media.start_date.unwrap().day, None);
        let relations = media.relations.unwrap();
        assert_eq!(relations.edges[0].node.id, 5);
        assert_eq!(
            relations.edges[0].relation_type.as_deref(),
            Some("SIDE_STORY")
        );
        assert_eq!(media.studios.unwrap().edges[0].node.name, "Sunrise");
        assert!(media.cover_image.is_none());
    }

    #[test]
    fn type_field_is_kept_apart_from_format() {
        let media: MediaRecord =
            serde_json::from_str(r#"{ "type": "MANGA", "format": "ONE_SHOT" }"#).unwrap();
        assert_eq!(media.media_type.as_deref(), Some("MANGA"));
        assert_eq!(media.format.as_deref(), Some("ONE_SHOT"));
    }

    #[test]
    fn null_connections_and_names_read_as_empty() {
        let json = r#"{
            "relations": { "edges": null },
            "studios": { "edges": [ { "isMain": true, "node": { "name": null } }, { "node": null } ] },
            "tags": [ { "name": null, "rank": 10 } ]
        }"#;

        let media: MediaRecord = serde_json::from_str(json).unwrap();
        assert!(media.relations.unwrap().edges.is_empty());
        let studios = media.studios.unwrap();
        assert_eq!(studios.edges.len(), 2);
        assert_eq!(studios.edges[0].node.name, "");
        assert_eq!(studios.edges[1].node, Studio::default());
        assert_eq!(media.tags.unwrap()[0].name, "");
    }
}
