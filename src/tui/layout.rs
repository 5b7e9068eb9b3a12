//! Terminal geometry for the panel.
//!
//! Converts unit lengths into cell rectangles. The panel hangs from the
//! bottom of the screen: control bar at the very bottom, then the bottom,
//! middle and top regions stacked upward, with empty space above.

use crate::config::{DisplaySettings, PanelSettings};
use crate::panel::{Region, RegionHeights};
use ratatui::layout::Rect;

/// Width classes for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols
    Compact,
    /// 60-99 cols
    Normal,
    /// 100+ cols
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }
}

/// Unit-to-cell conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellScale {
    pub units_per_row: f64,
    pub units_per_column: f64,
}

impl CellScale {
    pub fn from_display(display: &DisplaySettings) -> Self {
        Self {
            units_per_row: display.units_per_row,
            units_per_column: display.units_per_column,
        }
    }

    pub fn rows(&self, units: f64) -> u16 {
        to_cells(units / self.units_per_row)
    }

    pub fn columns(&self, units: f64) -> u16 {
        to_cells(units / self.units_per_column)
    }

    /// Row count per region, in stacking order.
    ///
    /// Rounds the cumulative boundaries rather than each height, so the rows
    /// always add up to the rounded total and no region absorbs another's
    /// rounding error.
    pub fn region_rows(&self, heights: &RegionHeights) -> [u16; 3] {
        let mut rows = [0u16; 3];
        let mut edge_units = 0.0;
        let mut edge_rows = 0u16;
        for (i, region) in Region::ALL.iter().enumerate() {
            edge_units += heights[*region];
            let next = self.rows(edge_units).max(edge_rows);
            rows[i] = next - edge_rows;
            edge_rows = next;
        }
        rows
    }
}

fn to_cells(value: f64) -> u16 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round().min(u16::MAX as f64) as u16
}

/// Where everything goes this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    /// One-line status strip at the top of the screen
    pub status: Rect,
    regions: [Rect; 3],
    /// Union of the three regions
    pub panel: Rect,
    /// Bar holding the control
    pub button_bar: Rect,
    /// The control itself
    pub button: Rect,
}

impl PanelLayout {
    pub fn compute(
        area: Rect,
        heights: &RegionHeights,
        panel: &PanelSettings,
        scale: &CellScale,
    ) -> Self {
        let status_rows = area.height.min(1);
        let status = Rect::new(area.x, area.y, area.width, status_rows);
        let body = Rect::new(
            area.x,
            area.y + status_rows,
            area.width,
            area.height - status_rows,
        );

        let width = scale.columns(panel.width).max(1).min(body.width);

        let bar_rows = scale.rows(panel.button_bar_height).max(1).min(body.height);
        let button_bar = Rect::new(body.x, body.bottom() - bar_rows, width, bar_rows);

        // Clip from the top when the screen is too short: the panel is
        // anchored to the bottom, so the top region disappears first.
        let mut rows = scale.region_rows(heights);
        let available = body.height - bar_rows;
        let mut excess = rows.iter().sum::<u16>().saturating_sub(available);
        for r in rows.iter_mut() {
            let cut = excess.min(*r);
            *r -= cut;
            excess -= cut;
        }

        let mut regions = [Rect::default(); 3];
        let mut bottom_edge = button_bar.y;
        for i in (0..3).rev() {
            let y = bottom_edge - rows[i];
            regions[i] = Rect::new(body.x, y, width, rows[i]);
            bottom_edge = y;
        }
        let panel_rect = Rect::new(body.x, bottom_edge, width, button_bar.y - bottom_edge);

        let button_width = scale.columns(panel.button_width).max(1).min(button_bar.width);
        let button_height = scale.rows(panel.button_height).max(1).min(button_bar.height);
        let button = Rect::new(
            button_bar.x + (button_bar.width - button_width) / 2,
            button_bar.y + (button_bar.height - button_height) / 2,
            button_width,
            button_height,
        );

        Self {
            status,
            regions,
            panel: panel_rect,
            button_bar,
            button,
        }
    }

    pub fn region(&self, region: Region) -> Rect {
        let index = Region::ALL
            .iter()
            .position(|r| *r == region)
            .unwrap_or_default();
        self.regions[index]
    }

    /// Whether a terminal cell lies on the control
    pub fn hits_button(&self, column: u16, row: u16) -> bool {
        let b = self.button;
        !b.is_empty() && column >= b.x && column < b.right() && row >= b.y && row < b.bottom()
    }
}
