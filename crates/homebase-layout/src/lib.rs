pub mod commands;
pub mod drag;
pub mod error;
pub mod geometry;
pub mod occupancy;
pub mod placement;
pub mod platform;
pub mod resize;
pub mod slot;
pub mod widget;

pub use commands::PlacementCommand;
pub use drag::{DragRelease, DragSession, PointerTarget};
pub use error::PlacementError;
pub use geometry::SlotGeometry;
pub use occupancy::{MoveOutcome, SlotOccupancy};
pub use placement::{PlacementController, PlacementSettings, WidgetFrame};
pub use platform::HostBridge;
pub use resize::{ResizeRelease, ResizeSession};
pub use slot::{Corner, Slot, SlotLayout, VerticalAnchor};
pub use widget::WidgetInstance;
