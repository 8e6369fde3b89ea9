mod fetch;
mod normalize;
mod serve;

pub use fetch::cmd_fetch;
pub use normalize::{cmd_normalize, media_from_json};
pub use serve::cmd_serve;
