mod calculation;
mod types;

pub use calculation::{box_height, box_position, corner_position, nearest_slot};
pub use types::*;
