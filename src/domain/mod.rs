//! Identifiers shared by the link parser, the `AniList` client and the HTTP layer.

use std::fmt;

/// Positive `AniList` media id. Anime and manga share one id space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaId(i32);

impl MediaId {
    /// Returns `None` for zero and negative ids, which `AniList` never issues.
    #[must_use]
    pub const fn new(id: i32) -> Option<Self> {
        if id > 0 { Some(Self(id)) } else { None }
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Catalogue named in an `anilist.co` link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Anime,
    Manga,
}
