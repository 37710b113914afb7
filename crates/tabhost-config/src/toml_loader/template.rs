//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tabhost Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Tabhost"
# width = 1280           # 200-10000
# height = 800           # 200-10000
# button_visible = true  # native chrome buttons shown on open

[sidebar]
# toggle_key = "b"       # with Ctrl (Cmd on macOS)
# toolbar_height = 40    # 0-200

[extension]
# webui_id = "abcdefghijklmnopabcdefghijklmnop"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
