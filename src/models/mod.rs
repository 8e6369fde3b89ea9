pub mod media;
pub mod normalized;

pub use media::MediaRecord;
pub use normalized::{AnimeRelation, NormalizedRecord};
