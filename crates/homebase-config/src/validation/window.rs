//! Overlay window validation.

use crate::schema::HomebaseConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &HomebaseConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}
