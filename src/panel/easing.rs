//! Easing curves for panel transitions
//!
//! Every curve maps [0, 1] onto [0, 1], is monotonic, and fixes both
//! endpoints. No curve overshoots, so a region height never leaves the range
//! between its start and target.

/// Easing curve applied to transition progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Accelerating (cubic)
    EaseIn,
    /// Decelerating (cubic)
    EaseOut,
    /// Symmetric S-curve (cubic)
    #[default]
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value; input is clamped to [0, 1]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }

    /// Parse a config name ("linear", "ease-in", "ease-out", "ease-in-out")
    ///
    /// Underscores are accepted in place of dashes.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().replace('_', "-").as_str() {
            "linear" => Some(Self::Linear),
            "ease-in" => Some(Self::EaseIn),
            "ease-out" => Some(Self::EaseOut),
            "ease-in-out" => Some(Self::EaseInOut),
            _ => None,
        }
    }

    /// Name used in the config file
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }
}
