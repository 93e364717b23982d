//! Overlay shell state.
//!
//! Owns the placement controller, per-widget content, the edit/collapse
//! flags and the single live pointer gesture. Every inbound UI message
//! goes through [`OverlayApp::handle`], which returns the messages to
//! send back.

mod bridge;
mod content;
mod core;
mod dispatch;
mod init;
mod pointer;
mod render;
mod types;

#[cfg(test)]
mod tests;

pub use bridge::LineBridge;
pub use core::OverlayApp;
pub use types::{NoticeView, OverlayView};
