//! Full configuration validation.
//!
//! Each section has its own submodule; `validate` calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod layout;
mod widgets;
mod window;


use crate::schema::HomebaseConfig;
use homebase_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HomebaseConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    layout::validate_layout(&mut errors, config);
    widgets::validate_widgets(&mut errors, config);
    window::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
