// Colours for the panel host
//
// Two palettes: "original" uses the exact RGB values of the panel design,
// "terminal" sticks to the 16 ANSI colours so it follows the user's
// terminal scheme.

use crate::panel::Region;
use crate::tui::control::ControlLook;
use ratatui::style::{Color, Style};

/// Background everything is composited over in the original palette
const PANEL_BACKGROUND: (u8, u8, u8) = (0x1e, 0x1e, 0x1e);

/// Complete theme definition with all UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,

    // Base colors
    pub bg: Color,
    pub fg: Color,

    // Regions
    /// Top and bottom regions (present only when full)
    pub optional_section: Color,
    pub optional_label: Color,
    /// Middle region (present whenever expanded)
    pub permanent_section: Color,
    pub permanent_label: Color,

    // Control
    pub button_bar: Color,
    pub button_normal: Color,
    pub button_pressed: Color,
    pub button_disabled: Color,
    pub button_label: Color,

    // Status line
    pub status_bar: Color,
    pub status_fg: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::original()
    }
}

impl Theme {
    /// Look up a theme by config name; unknown names get the original palette
    pub fn by_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "terminal" => Self::terminal(),
            "original" => Self::original(),
            other => {
                tracing::warn!("Unknown theme {:?}, using original", other);
                Self::original()
            }
        }
    }

    /// Exact colours of the panel design
    pub fn original() -> Self {
        Self {
            name: "original",
            bg: rgb(PANEL_BACKGROUND),
            fg: Color::Rgb(0xd9, 0xd9, 0xd9),
            optional_section: Color::Rgb(0xff, 0xc2, 0x0a),
            optional_label: Color::Rgb(0x1e, 0x1e, 0x1e),
            permanent_section: Color::Rgb(0x0c, 0x7b, 0xdc),
            permanent_label: Color::Rgb(0xff, 0xff, 0xff),
            button_bar: rgb(PANEL_BACKGROUND),
            button_normal: blend((0xd9, 0xd9, 0xd9), 0x4d, PANEL_BACKGROUND),
            button_pressed: blend((0xff, 0xff, 0xff), 0x4d, PANEL_BACKGROUND),
            button_disabled: blend((0xd9, 0xd9, 0xd9), 0x1a, PANEL_BACKGROUND),
            button_label: Color::Rgb(0xff, 0xff, 0xff),
            status_bar: Color::Rgb(0x2a, 0x2a, 0x2a),
            status_fg: Color::Rgb(0xd9, 0xd9, 0xd9),
            muted: Color::Rgb(0x80, 0x80, 0x80),
        }
    }

    /// ANSI-only palette
    pub fn terminal() -> Self {
        Self {
            name: "terminal",
            bg: Color::Reset,
            fg: Color::White,
            optional_section: Color::Yellow,
            optional_label: Color::Black,
            permanent_section: Color::Blue,
            permanent_label: Color::White,
            button_bar: Color::Reset,
            button_normal: Color::DarkGray,
            button_pressed: Color::Gray,
            button_disabled: Color::Black,
            button_label: Color::White,
            status_bar: Color::DarkGray,
            status_fg: Color::White,
            muted: Color::Gray,
        }
    }

    /// Fill and label style for a region
    pub fn region_style(&self, region: Region) -> Style {
        match region {
            Region::Middle => Style::default()
                .bg(self.permanent_section)
                .fg(self.permanent_label),
            Region::Top | Region::Bottom => Style::default()
                .bg(self.optional_section)
                .fg(self.optional_label),
        }
    }

    pub fn button_style(&self, look: ControlLook) -> Style {
        let bg = match look {
            ControlLook::Normal => self.button_normal,
            ControlLook::Pressed => self.button_pressed,
            ControlLook::Disabled => self.button_disabled,
        };
        let fg = match look {
            ControlLook::Disabled => self.muted,
            _ => self.button_label,
        };
        Style::default().bg(bg).fg(fg)
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Composite `fg` at `alpha` (0-255) over an opaque `bg`
pub fn blend(fg: (u8, u8, u8), alpha: u8, bg: (u8, u8, u8)) -> Color {
    let mix = |f: u8, b: u8| -> u8 {
        let a = alpha as u32;
        ((f as u32 * a + b as u32 * (255 - a) + 127) / 255) as u8
    };
    Color::Rgb(mix(fg.0, bg.0), mix(fg.1, bg.1), mix(fg.2, bg.2))
}
