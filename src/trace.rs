// Headless trace - drive the panel with synthetic time
//
// Clicks the control a fixed number of times, advancing a fixed number of
// frames after each click, then lets the last transition settle. Every
// frame produces one row, so a trace shows exactly what a renderer pulling
// from the panel would have drawn.

use crate::panel::{Panel, PanelAnimationConfig, PanelState, Region, RegionHeights};
use anyhow::{Context, Result};
use std::io::Write;
use std::time::Duration;

/// How to drive the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    pub clicks: u32,
    pub frame: Duration,
    pub frames_per_click: u32,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            clicks: 3,
            frame: Duration::from_millis(16),
            frames_per_click: 40,
        }
    }
}

/// One rendered frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRow {
    pub frame: u64,
    /// Synthetic time since the panel was mounted
    pub elapsed: Duration,
    pub state: PanelState,
    pub heights: RegionHeights,
}

/// Run the panel through `options` and collect every frame
///
/// The first row is the freshly mounted panel at time zero.
pub fn trace_rows(config: PanelAnimationConfig, options: &TraceOptions) -> Vec<TraceRow> {
    let mut panel = Panel::new(config);
    let mut rows = Vec::new();
    let mut clock = Duration::ZERO;

    record(&panel, clock, &mut rows);

    for _ in 0..options.clicks {
        panel.on_control_clicked();
        for _ in 0..options.frames_per_click {
            clock += options.frame;
            panel.advance(options.frame);
            record(&panel, clock, &mut rows);
        }
    }

    // A zero frame would never settle
    if !options.frame.is_zero() {
        while panel.is_animating() {
            clock += options.frame;
            panel.advance(options.frame);
            record(&panel, clock, &mut rows);
        }
    }

    rows
}

fn record(panel: &Panel, clock: Duration, rows: &mut Vec<TraceRow>) {
    let frame = panel.frame();
    let index = rows.len() as u64;
    rows.push(TraceRow {
        frame: index,
        elapsed: clock,
        state: frame.state,
        heights: frame.heights,
    });
}

/// Write rows as an aligned table with a header line
pub fn write_rows(rows: &[TraceRow], out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{:>5} {:>8} {:<9} {:>8} {:>8} {:>8} {:>8}",
        "frame", "t_ms", "state", "top", "middle", "bottom", "total"
    )
    .context("Failed to write trace header")?;

    for row in rows {
        writeln!(
            out,
            "{:>5} {:>8} {:<9} {:>8.2} {:>8.2} {:>8.2} {:>8.2}",
            row.frame,
            row.elapsed.as_millis(),
            row.state.name(),
            row.heights[Region::Top],
            row.heights[Region::Middle],
            row.heights[Region::Bottom],
            row.heights.total(),
        )
        .context("Failed to write trace row")?;
    }
    Ok(())
}

/// Trace to stdout
pub fn run(config: PanelAnimationConfig, options: TraceOptions) -> Result<()> {
    tracing::debug!(?options, "Tracing panel");
    let rows = trace_rows(config, &options);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_rows(&rows, &mut out)?;
    out.flush().context("Failed to flush trace output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::Easing;

    fn config(transition_ms: u64) -> PanelAnimationConfig {
        PanelAnimationConfig {
            natural_heights: RegionHeights::new(100.0, 100.0, 100.0),
            transition: Duration::from_millis(transition_ms),
            easing: Easing::EaseInOut,
        }
    }

    #[test]
    fn no_clicks_is_single_collapsed_row() {
        let options = TraceOptions {
            clicks: 0,
            ..TraceOptions::default()
        };
        let rows = trace_rows(config(500), &options);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].state, PanelState::Collapsed);
        assert_eq!(rows[0].heights, RegionHeights::ZERO);
        assert_eq!(rows[0].elapsed, Duration::ZERO);
    }

    #[test]
    fn settles_after_last_click() {
        let options = TraceOptions {
            clicks: 2,
            frame: Duration::from_millis(16),
            frames_per_click: 5,
        };
        let rows = trace_rows(config(500), &options);

        let last = rows.last().unwrap();
        assert_eq!(last.state, PanelState::Partial);
        assert_eq!(last.heights, RegionHeights::new(0.0, 100.0, 0.0));
        // 500ms at 16ms per frame settles on the 32nd frame after the click
        assert_eq!(rows.len(), 1 + 5 + 32);
    }

    #[test]
    fn frames_are_numbered_and_timed() {
        let options = TraceOptions {
            clicks: 3,
            frame: Duration::from_millis(10),
            frames_per_click: 4,
        };
        for (i, row) in trace_rows(config(200), &options).iter().enumerate() {
            assert_eq!(row.frame, i as u64);
            assert_eq!(row.elapsed, Duration::from_millis(10 * i as u64));
        }
    }

    #[test]
    fn every_row_keeps_heights_in_range() {
        let options = TraceOptions {
            clicks: 7,
            frame: Duration::from_millis(16),
            frames_per_click: 9,
        };
        for row in trace_rows(config(500), &options) {
            for region in Region::ALL {
                let h = row.heights[region];
                assert!((0.0..=100.0).contains(&h), "frame {}: {h}", row.frame);
            }
            assert!(row.heights.total() <= 300.0);
        }
    }

    #[test]
    fn zero_transition_snaps_on_next_frame() {
        let options = TraceOptions {
            clicks: 1,
            frame: Duration::from_millis(16),
            frames_per_click: 1,
        };
        let rows = trace_rows(config(0), &options);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].heights.total(), 300.0);
    }

    #[test]
    fn writes_header_and_rows() {
        let options = TraceOptions {
            clicks: 1,
            frame: Duration::from_millis(250),
            frames_per_click: 2,
        };
        let rows = trace_rows(config(500), &options);
        let mut out = Vec::new();
        write_rows(&rows, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("frame") && lines[0].contains("total"));
        assert!(lines[1].contains("Collapsed"));
        assert!(lines[2].contains("Full") && lines[2].contains("150.00"));
        assert!(lines[3].contains("300.00"));
    }
}
