//! Overlay window configuration types.

use serde::{Deserialize, Serialize};

/// Overlay window settings handed to the host process.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial window height in pixels (valid range: 240-4320).
    pub height: u32,
    pub transparent: bool,
    pub always_on_top: bool,
    /// Draw native window decorations.
    pub frame: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 2560,
            height: 1440,
            transparent: true,
            always_on_top: true,
            frame: false,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
