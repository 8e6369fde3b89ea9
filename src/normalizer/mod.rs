//! Remaps a raw `AniList` media record into the integer-coded schema.
//!
//! [`normalize`] never fails. Absent strings render as `""`, absent date
//! components render as `""` inside the date string, and absent lists are
//! treated as empty.

pub mod tables;

use crate::models::media::{FuzzyDate, MediaRecord, MediaTag, RelationConnection, StudioConnection};
use crate::models::normalized::{AnimeRelation, NormalizedRecord};

#[must_use]
pub fn normalize(media: &MediaRecord) -> NormalizedRecord {
    let title = media.title.clone().unwrap_or_default();

    let format = media.format.as_deref().or(media.media_type.as_deref());

    NormalizedRecord {
        id: media.id,
        title: title.english.unwrap_or_default(),
        alternative_title: alternative_title(title.native.as_deref(), title.romaji.as_deref()),
        storyline: media.description.clone(),
        start_date: media.start_date.as_ref().map(flatten_date),
        end_date: media.end_date.as_ref().map(flatten_date),
        episode_number: media.episodes,
        episode_duration: media.duration,
        horizontal_images: media.banner_image.clone(),
        vertical_images: media
            .cover_image
            .as_ref()
            .and_then(|c| c.extra_large.clone()),
        status_id: media
            .status
            .as_deref()
            .map_or(tables::UNKNOWN_CODE, tables::status_code),
        origin_id: media
            .source
            .as_deref()
            .map_or(tables::UNKNOWN_CODE, tables::origin_code),
        type_id: format.map_or(tables::UNKNOWN_CODE, tables::type_code),
        anime_relations: map_relations(media.relations.as_ref()),
        genres: merge_genres(
            media.genres.as_deref().unwrap_or_default(),
            media.tags.as_deref().unwrap_or_default(),
        ),
        studio_id: map_studios(media.studios.as_ref()),
        season_year: media.season_year,
        chapters: media.chapters,
        volumes: media.volumes,
        synonyms: media.synonyms.clone().unwrap_or_default(),
        average_score: media.average_score,
        mean_score: media.mean_score,
        popularity: media.popularity,
        favourites: media.favourites,
        is_adult: media.is_adult,
        trailer: media.trailer.clone(),
        external_links: media.external_links.clone().unwrap_or_default(),
    }
}

#[must_use]
pub fn alternative_title(native: Option<&str>, romaji: Option<&str>) -> String {
    format!(
        "{} - {}",
        native.unwrap_or_default(),
        romaji.unwrap_or_default()
    )
}

/// Renders `{year}-{month}-{day}` without padding or validation.
#[must_use]
pub fn flatten_date(date: &FuzzyDate) -> String {
    fn part(value: Option<i32>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    format!("{}-{}-{}", part(date.year), part(date.month), part(date.day))
}

/// Genre codes first, then tag codes, each kept at its first occurrence.
#[must_use]
pub fn merge_genres(genres: &[String], tags: &[MediaTag]) -> Vec<u32> {
    let genre_codes = genres.iter().filter_map(|name| tables::genre_code(name));
    let tag_codes = tags.iter().filter_map(|tag| tables::tag_code(&tag.name));

    let mut codes = Vec::new();
    for code in genre_codes.chain(tag_codes) {
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    codes
}

#[must_use]
pub fn map_studios(studios: Option<&StudioConnection>) -> Vec<u32> {
    studios
        .map(|s| {
            s.edges
                .iter()
                .filter_map(|edge| tables::studio_code(&edge.node.name))
                .collect()
        })
        .unwrap_or_default()
}

#[must_use]
pub fn map_relations(relations: Option<&RelationConnection>) -> Vec<AnimeRelation> {
    relations
        .map(|r| {
            r.edges
                .iter()
                .map(|edge| AnimeRelation {
                    id: edge.node.id,
                    relation_type: edge
                        .relation_type
                        .as_deref()
                        .map_or(tables::OTHER_RELATION_CODE, tables::relation_code),
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::media::{
        CoverImage, MediaTitle, RelatedMedia, RelationEdge, Studio, StudioEdge,
    };

    fn tag(name: &str) -> MediaTag {
        MediaTag {
            name: name.to_string(),
            ..MediaTag::default()
        }
    }

    fn studio(name: &str) -> StudioEdge {
        StudioEdge {
            is_main: Some(true),
            node: Studio {
                name: name.to_string(),
                ..Studio::default()
            },
        }
    }

    fn relation(id: i32, relation_type: Option<&str>) -> RelationEdge {
        RelationEdge {
            id: None,
            relation_type: relation_type.map(str::to_string),
            node: RelatedMedia {
                id,
                ..RelatedMedia::default()
            },
        }
    }

    #[test]
    fn date_is_not_padded() {
        let date = FuzzyDate {
            year: Some(2009),
            month: Some(4),
            day: Some(5),
        };
        assert_eq!(flatten_date(&date), "2009-4-5");
    }

    #[test]
    fn missing_date_parts_render_empty() {
        let date = FuzzyDate {
            year: Some(2024),
            month: None,
            day: None,
        };
        assert_eq!(flatten_date(&date), "2024--");
        assert_eq!(flatten_date(&FuzzyDate::default()), "--");
    }

    #[test]
    fn genres_then_tags_without_duplicates() {
        let genres = vec!["Action".to_string()];
        assert_eq!(merge_genres(&genres, &[tag("Isekai")]), vec![38, 74]);

        let genres = vec!["Romance".to_string(), "Comedy".to_string()];
        let tags = [tag("Love Triangle"), tag("Space"), tag("Astronomy")];
        assert_eq!(merge_genres(&genres, &tags), vec![51, 40, 11]);
    }

    #[test]
    fn repeated_genres_collapse_to_first_occurrence() {
        let genres = vec![
            "Action".to_string(),
            "Drama".to_string(),
            "Action".to_string(),
        ];
        assert_eq!(merge_genres(&genres, &[tag("Isekai")]), vec![38, 41, 74]);
        assert_eq!(merge_genres(&genres, &[]), vec![38, 41]);
    }

    #[test]
    fn unknown_genres_and_tags_are_dropped() {
        let genres = vec!["Isekai".to_string(), "Drama".to_string()];
        let tags = [tag("Not A Tag"), tag("CGI")];
        assert_eq!(merge_genres(&genres, &tags), vec![41]);
    }

    #[test]
    fn unknown_studios_are_dropped() {
        let studios = StudioConnection {
            edges: vec![studio("MAPPA"), studio("NoSuchStudio")],
        };
        assert_eq!(map_studios(Some(&studios)), vec![182]);
        assert!(map_studios(None).is_empty());
    }

    #[test]
    fn relations_keep_order_and_default_to_other() {
        let relations = RelationConnection {
            edges: vec![
                relation(2, Some("SEQUEL")),
                relation(3, Some("ADAPTATION")),
                relation(2, Some("SEQUEL")),
                relation(4, None),
            ],
        };

        let mapped = map_relations(Some(&relations));
        let pairs: Vec<(i32, u32)> = mapped.iter().map(|r| (r.id, r.relation_type)).collect();
        assert_eq!(pairs, vec![(2, 2), (3, 6), (2, 2), (4, 6)]);
    }

    #[test]
    fn empty_record_uses_placeholders() {
        let normalized = normalize(&MediaRecord::default());
        assert_eq!(normalized.title, "");
        assert_eq!(normalized.alternative_title, " - ");
        assert_eq!(normalized.status_id, 0);
        assert_eq!(normalized.origin_id, 0);
        assert_eq!(normalized.type_id, 0);
        assert!(normalized.start_date.is_none());
        assert!(normalized.genres.is_empty());
        assert!(normalized.anime_relations.is_empty());
        assert!(normalized.studio_id.is_empty());
    }

    #[test]
    fn type_falls_back_to_media_type() {
        let media = MediaRecord {
            media_type: Some("MANGA".to_string()),
            ..MediaRecord::default()
        };
        assert_eq!(normalize(&media).type_id, 8);

        let media = MediaRecord {
            media_type: Some("ANIME".to_string()),
            format: Some("MOVIE".to_string()),
            ..MediaRecord::default()
        };
        assert_eq!(normalize(&media).type_id, 3);
    }

    #[test]
    fn images_and_counts_are_renamed() {
        let media = MediaRecord {
            title: Some(MediaTitle {
                romaji: Some("Shingeki no Kyojin".to_string()),
                english: None,
                native: None,
            }),
            episodes: Some(25),
            duration: Some(24),
            banner_image: Some("banner.jpg".to_string()),
            cover_image: Some(CoverImage {
                extra_large: Some("cover-xl.jpg".to_string()),
                large: Some("cover-l.jpg".to_string()),
                ..CoverImage::default()
            }),
            description: Some("Walls.".to_string()),
            ..MediaRecord::default()
        };

        let normalized = normalize(&media);
        assert_eq!(normalized.title, "");
        assert_eq!(normalized.alternative_title, " - Shingeki no Kyojin");
        assert_eq!(normalized.episode_number, Some(25));
        assert_eq!(normalized.episode_duration, Some(24));
        assert_eq!(normalized.horizontal_images.as_deref(), Some("banner.jpg"));
        assert_eq!(normalized.vertical_images.as_deref(), Some("cover-xl.jpg"));
        assert_eq!(normalized.storyline.as_deref(), Some("Walls."));
    }
}
