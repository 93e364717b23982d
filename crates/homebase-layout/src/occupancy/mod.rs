//! Slot occupancy — which widget, if any, holds each slot.

mod operations;
mod types;

pub use types::*;
