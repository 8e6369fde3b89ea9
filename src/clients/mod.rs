pub mod anilist;

pub use anilist::{AnilistClient, AnilistError};
