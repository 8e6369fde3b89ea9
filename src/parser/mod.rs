pub mod link;

pub use link::{LinkError, MediaRef, parse_media_id, parse_media_ref};
