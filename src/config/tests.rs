//! Configuration tests
//!
//! These tests guard the config file format: every field written by
//! `to_toml()` must parse back, and precedence must stay env > file > default.

use super::*;
use crate::panel::Easing;
use std::collections::HashMap;
use std::time::Duration;

fn no_env(_: &str) -> Option<String> {
    None
}

fn parse(toml_str: &str) -> FileConfig {
    toml::from_str(toml_str).expect("config should parse")
}

// ─────────────────────────────────────────────────────────────────────────────
// Round-trip tests
// ─────────────────────────────────────────────────────────────────────────────

/// Verify that the serialized default config parses back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

/// Non-default values survive a trip through the file format.
#[test]
fn test_config_roundtrip_custom_values() {
    let mut config = Config::default();
    config.theme = "terminal".to_string();
    config.panel.top_height = 42.5;
    config.panel.bottom_height = 80.0;
    config.panel.transition = Duration::from_millis(250);
    config.panel.easing = Easing::Linear;
    config.display.frame_interval = Duration::from_millis(33);
    config.display.units_per_row = 25.0;
    config.logging.level = "debug".to_string();
    config.logging.file_enabled = true;
    config.logging.file_rotation = LogRotation::Hourly;

    let resolved = Config::resolve(parse(&config.to_toml()), no_env);
    assert_eq!(resolved, config);
}

/// Strings with quotes and backslashes are escaped, not spliced in raw.
#[test]
fn test_config_roundtrip_escapes_strings() {
    let mut config = Config::default();
    config.theme = r#"my "dark" theme"#.to_string();
    config.logging.file_dir = std::path::PathBuf::from(r"C:\Users\me\logs");
    config.logging.file_prefix = r#"panel\"log""#.to_string();

    let toml_str = config.to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(parsed.is_ok(), "TOML:\n{}\nError: {:?}", toml_str, parsed.err());

    let resolved = Config::resolve(parsed.unwrap(), no_env);
    assert_eq!(resolved, config);
}

// ─────────────────────────────────────────────────────────────────────────────
// Precedence
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_file_uses_defaults() {
    let resolved = Config::resolve(parse(""), no_env);
    assert_eq!(resolved, Config::default());
}

#[test]
fn test_file_overrides_defaults() {
    let file = parse(
        r#"
theme = "terminal"

[panel]
middle_height = 60.0
transition_ms = 800
easing = "linear"
"#,
    );
    let resolved = Config::resolve(file, no_env);

    assert_eq!(resolved.theme, "terminal");
    assert_eq!(resolved.panel.middle_height, 60.0);
    assert_eq!(resolved.panel.top_height, 100.0);
    assert_eq!(resolved.panel.transition, Duration::from_millis(800));
    assert_eq!(resolved.panel.easing, Easing::Linear);
}

#[test]
fn test_env_overrides_file() {
    let file = parse(
        r#"
theme = "terminal"

[panel]
transition_ms = 800
easing = "linear"

[display]
frame_ms = 40
"#,
    );

    let env: HashMap<&str, &str> = HashMap::from([
        ("THREEBODY_THEME", "original"),
        ("THREEBODY_TRANSITION_MS", "120"),
        ("THREEBODY_EASING", "ease-out"),
        ("THREEBODY_FRAME_MS", "20"),
    ]);
    let resolved = Config::resolve(file, |key| env.get(key).map(|v| v.to_string()));

    assert_eq!(resolved.theme, "original");
    assert_eq!(resolved.panel.transition, Duration::from_millis(120));
    assert_eq!(resolved.panel.easing, Easing::EaseOut);
    assert_eq!(resolved.display.frame_interval, Duration::from_millis(20));
}

#[test]
fn test_unparseable_env_number_is_ignored() {
    let file = parse("[panel]\ntransition_ms = 300\n");
    let resolved = Config::resolve(file, |key| {
        (key == "THREEBODY_TRANSITION_MS").then(|| "fast".to_string())
    });
    assert_eq!(resolved.panel.transition, Duration::from_millis(300));
}

#[test]
fn test_unparseable_env_frame_ms_keeps_file_value() {
    let file = parse("[display]\nframe_ms = 40\n");
    let resolved = Config::resolve(file, |key| {
        (key == "THREEBODY_FRAME_MS").then(|| "-3".to_string())
    });
    assert_eq!(resolved.display.frame_interval, Duration::from_millis(40));

    let resolved = Config::resolve(parse(""), |key| {
        (key == "THREEBODY_FRAME_MS").then(|| "16.5".to_string())
    });
    assert_eq!(resolved.display.frame_interval, Duration::from_millis(16));
}

#[test]
fn test_env_millis_accepts_padded_numbers() {
    let resolved = Config::resolve(parse(""), |key| {
        (key == "THREEBODY_TRANSITION_MS").then(|| " 250 ".to_string())
    });
    assert_eq!(resolved.panel.transition, Duration::from_millis(250));
}

/// Regenerating the file keeps what the file says, whatever the shell sets.
#[test]
fn test_file_only_config_ignores_env_overrides() {
    let contents = "theme = \"original\"\n\n[panel]\ntransition_ms = 500\n";
    let env: HashMap<&str, &str> = HashMap::from([
        ("THREEBODY_THEME", "terminal"),
        ("THREEBODY_TRANSITION_MS", "50"),
        ("THREEBODY_EASING", "linear"),
        ("THREEBODY_FRAME_MS", "5"),
    ]);

    let with_env = Config::resolve(parse(contents), |key| env.get(key).map(|v| v.to_string()));
    assert_eq!(with_env.panel.transition, Duration::from_millis(50));

    let rewritten = Config::from_file_only(parse(contents)).to_toml();
    assert!(rewritten.contains("transition_ms = 500\n"), "{rewritten}");
    assert!(rewritten.contains("theme = \"original\"\n"), "{rewritten}");
    assert!(rewritten.contains("easing = \"ease-in-out\"\n"), "{rewritten}");
    assert!(rewritten.contains("frame_ms = 16\n"), "{rewritten}");
    assert!(!rewritten.contains("terminal\"\n"), "{rewritten}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_non_positive_lengths_fall_back() {
    let file = parse(
        r#"
[panel]
top_height = -5.0
middle_height = 0.0
bottom_height = 30.0

[display]
units_per_row = 0.0
"#,
    );
    let resolved = Config::resolve(file, no_env);

    assert_eq!(resolved.panel.top_height, 100.0);
    assert_eq!(resolved.panel.middle_height, 100.0);
    assert_eq!(resolved.panel.bottom_height, 30.0);
    assert_eq!(resolved.display.units_per_row, 20.0);
}

#[test]
fn test_zero_frame_interval_falls_back() {
    let resolved = Config::resolve(parse("[display]\nframe_ms = 0\n"), no_env);
    assert_eq!(resolved.display.frame_interval, Duration::from_millis(16));
}

#[test]
fn test_zero_transition_is_allowed() {
    let resolved = Config::resolve(parse("[panel]\ntransition_ms = 0\n"), no_env);
    assert_eq!(resolved.panel.transition, Duration::ZERO);
}

#[test]
fn test_unknown_easing_falls_back() {
    let resolved = Config::resolve(parse("[panel]\neasing = \"bounce\"\n"), no_env);
    assert_eq!(resolved.panel.easing, Easing::EaseInOut);
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    let resolved = Config::resolve(parse("[logging]\nfile_rotation = \"weekly\"\n"), no_env);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_rotation_names() {
    for rotation in LogRotation::ALL {
        assert_eq!(LogRotation::from_name(rotation.as_str()), Some(rotation));
    }
    assert_eq!(LogRotation::from_name(" Hourly "), Some(LogRotation::Hourly));
    assert_eq!(LogRotation::from_name("weekly"), None);
}

#[test]
fn test_logging_section_from_file() {
    let file = parse(
        r#"
[logging]
level = "DEBUG"
file_enabled = true
file_dir = "/var/log/threebody"
file_rotation = "never"
file_prefix = "panel"
"#,
    );
    let logging = Config::resolve(file, no_env).logging;

    assert_eq!(logging.level, "debug");
    assert!(logging.file_enabled);
    assert_eq!(logging.file_dir, std::path::PathBuf::from("/var/log/threebody"));
    assert_eq!(logging.file_rotation, LogRotation::Never);
    assert_eq!(logging.file_prefix, "panel");
}

#[test]
fn test_unusable_logging_values_fall_back() {
    let file = parse("[logging]\nlevel = \"verbose\"\nfile_prefix = \"  \"\n");
    let logging = Config::resolve(file, no_env).logging;
    assert_eq!(logging.level, "info");
    assert_eq!(logging.file_prefix, "threebody");
}

#[test]
fn test_animation_settings_follow_panel() {
    let mut settings = PanelSettings::default();
    settings.top_height = 10.0;
    settings.middle_height = 20.0;
    settings.bottom_height = 30.0;

    let animation = settings.animation();
    assert_eq!(animation.natural_heights.total(), 60.0);
    assert_eq!(animation.transition, settings.transition);
    assert_eq!(animation.easing, settings.easing);
}
