/// `AniList` genre name to genre code.
///
/// Codes 38..=56 are the genre block of the downstream catalogue; tag codes
/// in [`super::tags::TAGS`] share the same space.
pub const GENRES: &[(&str, u32)] = &[
    ("Action", 38),
    ("Adventure", 39),
    ("Comedy", 40),
    ("Drama", 41),
    ("Ecchi", 42),
    ("Fantasy", 43),
    ("Hentai", 44),
    ("Horror", 45),
    ("Mahou Shoujo", 46),
    ("Mecha", 47),
    ("Music", 48),
    ("Mystery", 49),
    ("Psychological", 50),
    ("Romance", 51),
    ("Sci-Fi", 52),
    ("Slice of Life", 53),
    ("Sports", 54),
    ("Supernatural", 55),
    ("Thriller", 56),
];
