//! Widget sizing validation (sizes, resize floor, compact threshold).

use crate::schema::{HomebaseConfig, WidgetSize};

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_widgets(errors: &mut Vec<String>, config: &HomebaseConfig) {
    let widgets = &config.widgets;
    validate_range(errors, "widgets.min_height", widgets.min_height, 40, 400);
    validate_range_f64(
        errors,
        "widgets.compact_threshold",
        widgets.compact_threshold,
        0.5,
        1.0,
    );

    for (name, size) in [
        ("youtube", widgets.youtube),
        ("spotify", widgets.spotify),
        ("calendar", widgets.calendar),
    ] {
        validate_size(errors, name, size, widgets.min_height);
    }
}

fn validate_size(errors: &mut Vec<String>, name: &str, size: WidgetSize, min_height: u32) {
    validate_range(errors, &format!("widgets.{name}.width"), size.width, 100, 2000);
    validate_range(errors, &format!("widgets.{name}.height"), size.height, 100, 2000);

    // The half-height snap target must stay reachable above the resize floor.
    if size.height / 2 < min_height {
        errors.push(format!(
            "widgets.{name}.height = {} is below twice widgets.min_height ({min_height})",
            size.height
        ));
    }
}
