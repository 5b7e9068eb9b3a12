//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# threebody configuration

# Theme: original, terminal
theme = {theme}

# ─────────────────────────────────────────────────────────────────────────────
# PANEL
# ─────────────────────────────────────────────────────────────────────────────
# Lengths are in arbitrary units; [display] maps them onto terminal cells.
# Every transition uses the same duration and easing for all three regions.

[panel]
top_height = {top:?}
middle_height = {middle:?}
bottom_height = {bottom:?}
width = {width:?}
button_bar_height = {bar:?}
button_width = {button_width:?}
button_height = {button_height:?}
transition_ms = {transition_ms}
# Easing: linear, ease-in, ease-out, ease-in-out
easing = "{easing}"

# ─────────────────────────────────────────────────────────────────────────────
# DISPLAY
# ─────────────────────────────────────────────────────────────────────────────

[display]
# Time between animation frames
frame_ms = {frame_ms}
units_per_row = {units_per_row:?}
units_per_column = {units_per_column:?}

# ─────────────────────────────────────────────────────────────────────────────
# LOGGING
# ─────────────────────────────────────────────────────────────────────────────
# RUST_LOG overrides level when set.

[logging]
level = {log_level}
file_enabled = {file_enabled}
file_dir = {file_dir}
# Rotation: hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = {file_prefix}
"#,
            theme = toml_string(&self.theme),
            top = self.panel.top_height,
            middle = self.panel.middle_height,
            bottom = self.panel.bottom_height,
            width = self.panel.width,
            bar = self.panel.button_bar_height,
            button_width = self.panel.button_width,
            button_height = self.panel.button_height,
            transition_ms = self.panel.transition.as_millis(),
            easing = self.panel.easing.as_str(),
            frame_ms = self.display.frame_interval.as_millis(),
            units_per_row = self.display.units_per_row,
            units_per_column = self.display.units_per_column,
            log_level = toml_string(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = toml_string(&self.logging.file_dir.display().to_string()),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = toml_string(&self.logging.file_prefix),
        )
    }
}

/// Quote and escape a string as a TOML basic string
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
