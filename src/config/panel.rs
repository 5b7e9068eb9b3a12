//! Panel geometry, timing and display configuration
//!
//! Lengths are unit-agnostic; the display section maps them onto terminal
//! cells.

use serde::Deserialize;
use std::time::Duration;

use crate::panel::{Easing, PanelAnimationConfig, RegionHeights, DEFAULT_TRANSITION};

// ─────────────────────────────────────────────────────────────────────────────
// Panel
// ─────────────────────────────────────────────────────────────────────────────

/// Panel geometry and transition settings
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSettings {
    /// Natural height of the optional top region
    pub top_height: f64,
    /// Natural height of the permanent middle region
    pub middle_height: f64,
    /// Natural height of the optional bottom region
    pub bottom_height: f64,
    /// Width shared by every region and the button bar
    pub width: f64,
    /// Height of the bar holding the control
    pub button_bar_height: f64,
    pub button_width: f64,
    pub button_height: f64,
    /// Duration of every transition
    pub transition: Duration,
    /// Easing curve for every transition
    pub easing: Easing,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            top_height: 100.0,
            middle_height: 100.0,
            bottom_height: 100.0,
            width: 520.0,
            button_bar_height: 120.0,
            button_width: 115.0,
            button_height: 49.0,
            transition: DEFAULT_TRANSITION,
            easing: Easing::EaseInOut,
        }
    }
}

/// Panel settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FilePanel {
    pub top_height: Option<f64>,
    pub middle_height: Option<f64>,
    pub bottom_height: Option<f64>,
    pub width: Option<f64>,
    pub button_bar_height: Option<f64>,
    pub button_width: Option<f64>,
    pub button_height: Option<f64>,
    pub transition_ms: Option<u64>,
    pub easing: Option<String>,
}

impl PanelSettings {
    /// Create from file config with defaults
    ///
    /// `transition_ms` and `easing` are the already-resolved env overrides.
    pub fn from_file(
        file: Option<FilePanel>,
        transition_ms: Option<u64>,
        easing: Option<String>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let transition = transition_ms
            .or(file.transition_ms)
            .map(Duration::from_millis)
            .unwrap_or(defaults.transition);

        let easing = match easing.or(file.easing) {
            Some(name) => Easing::from_name(&name).unwrap_or_else(|| {
                eprintln!(
                    "Warning: unknown easing {:?}, using {}",
                    name,
                    defaults.easing.as_str()
                );
                defaults.easing
            }),
            None => defaults.easing,
        };

        Self {
            top_height: positive_or("panel.top_height", file.top_height, defaults.top_height),
            middle_height: positive_or(
                "panel.middle_height",
                file.middle_height,
                defaults.middle_height,
            ),
            bottom_height: positive_or(
                "panel.bottom_height",
                file.bottom_height,
                defaults.bottom_height,
            ),
            width: positive_or("panel.width", file.width, defaults.width),
            button_bar_height: positive_or(
                "panel.button_bar_height",
                file.button_bar_height,
                defaults.button_bar_height,
            ),
            button_width: positive_or("panel.button_width", file.button_width, defaults.button_width),
            button_height: positive_or(
                "panel.button_height",
                file.button_height,
                defaults.button_height,
            ),
            transition,
            easing,
        }
    }

    /// Natural heights in stacking order
    pub fn natural_heights(&self) -> RegionHeights {
        RegionHeights::new(self.top_height, self.middle_height, self.bottom_height)
    }

    /// Settings the animation core runs with
    pub fn animation(&self) -> PanelAnimationConfig {
        PanelAnimationConfig {
            natural_heights: self.natural_heights(),
            transition: self.transition,
            easing: self.easing,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// How the terminal host paces frames and maps units onto cells
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Time between animation frames
    pub frame_interval: Duration,
    /// Length units per terminal row
    pub units_per_row: f64,
    /// Length units per terminal column
    pub units_per_column: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            units_per_row: 20.0,
            units_per_column: 8.0,
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub frame_ms: Option<u64>,
    pub units_per_row: Option<f64>,
    pub units_per_column: Option<f64>,
}

impl DisplaySettings {
    /// Create from file config with defaults
    ///
    /// A zero frame interval would stall the ticker, so it falls back to the
    /// default.
    pub fn from_file(file: Option<FileDisplay>, frame_ms: Option<u64>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let frame_interval = match frame_ms.or(file.frame_ms) {
            Some(0) => {
                eprintln!(
                    "Warning: display.frame_ms must be at least 1, using {}",
                    defaults.frame_interval.as_millis()
                );
                defaults.frame_interval
            }
            Some(ms) => Duration::from_millis(ms),
            None => defaults.frame_interval,
        };

        Self {
            frame_interval,
            units_per_row: positive_or(
                "display.units_per_row",
                file.units_per_row,
                defaults.units_per_row,
            ),
            units_per_column: positive_or(
                "display.units_per_column",
                file.units_per_column,
                defaults.units_per_column,
            ),
        }
    }
}

/// Accept a configured length only if it is a positive, finite number
fn positive_or(field: &str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        Some(v) => {
            eprintln!(
                "Warning: {} must be a positive number (got {}), using {}",
                field, v, default
            );
            default
        }
        None => default,
    }
}
