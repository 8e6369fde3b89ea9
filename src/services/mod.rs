pub mod media_service;
pub mod media_service_impl;

pub use media_service::{MediaError, MediaService};
pub use media_service_impl::AnilistMediaService;
