//! The PlacementController coordinates widgets, slot occupancy and sizes.

mod operations;
mod types;
mod view;

pub use types::*;
pub use view::WidgetFrame;
