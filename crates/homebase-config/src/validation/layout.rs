//! Slot layout validation.

use crate::schema::HomebaseConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &HomebaseConfig) {
    validate_range(errors, "layout.padding", config.layout.padding, 0, 100);
    validate_range(errors, "layout.box_count", config.layout.box_count, 1, 3);
    validate_range(
        errors,
        "layout.top_offset",
        config.layout.top_offset,
        0,
        400,
    );
}
