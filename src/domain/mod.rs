mod platform;
mod poster;

pub use platform::{PlatformEntry, PlatformRegistry};
pub use poster::PosterResult;
