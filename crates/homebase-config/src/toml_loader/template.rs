//! Default TOML config template.

/// Default config file content. Every value is commented out so the
/// built-in defaults apply until the user edits it.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Homebase Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# mode = "corners"       # corners, stacked
# padding = 20           # 0-100
# box_count = 3          # 1-3 (stacked mode)
# top_offset = 60        # 0-400 (stacked mode)

[widgets]
# min_height = 100       # 40-400
# compact_threshold = 0.9  # 0.5-1.0

[widgets.youtube]
# width = 416            # 100-2000
# height = 360           # 100-2000

[widgets.spotify]
# width = 416
# height = 240

[widgets.calendar]
# width = 416
# height = 380

[window]
# width = 2560           # 320-7680
# height = 1440          # 240-4320
# transparent = true
# always_on_top = true
# frame = false

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
