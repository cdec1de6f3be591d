// Page effects that the supervisor tears down and rebuilds when media
// capabilities change.
pub mod cursor;
pub mod parallax;
pub mod rotator;
pub mod services;
pub mod timeline;
pub mod video;

pub use cursor::CursorFollower;
pub use parallax::Parallax;
pub use rotator::RotatingWord;
pub use services::{CardSpotlight, ServiceAccordions};
pub use timeline::TimelineProgress;
pub use video::ProjectVideos;
