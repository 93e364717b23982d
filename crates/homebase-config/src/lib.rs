//! Homebase configuration system.
//!
//! TOML-based configuration with validation. Every section has defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use homebase_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{HomebaseConfig, CONFIG_SCHEMA_VERSION};

use homebase_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default path
/// (creating it from the template on first run) when `path` is `None`.
///
/// Validation problems are logged by the loader and never fail the load.
pub fn load_config(path: Option<&Path>) -> Result<HomebaseConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &HomebaseConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
