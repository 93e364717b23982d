//! Configuration schema types for Homebase.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod logging;
mod widgets;
mod window;

pub use layout::*;
pub use logging::*;
pub use widgets::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Homebase.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HomebaseConfig {
    pub layout: LayoutConfig,
    pub widgets: WidgetsConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
