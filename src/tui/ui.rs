// UI rendering logic
//
// Called on every frame: lays the panel out for the current terminal size,
// hands the layout back to the app for hit-testing, then paints background,
// status line, regions and button bar in that order.

use super::app::App;
use super::components::{button_bar, panel_view, status_bar};
use super::layout::PanelLayout;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let bg_block = Block::default().style(Style::default().bg(app.theme.bg).fg(app.theme.fg));
    f.render_widget(bg_block, area);

    let heights = *app.panel.orchestrator().heights();
    let layout = PanelLayout::compute(area, &heights, &app.settings, &app.scale);
    app.set_layout(layout);

    status_bar::render(f, layout.status, app);
    panel_view::render(f, &layout, app);
    button_bar::render(f, &layout, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::panel::{PanelState, Region};
    use crate::tui::theme::Theme;
    use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
    use std::time::{Duration, Instant};

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(100, 40)).unwrap()
    }

    fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> Buffer {
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row_text(buffer: &Buffer, area: Rect, y: u16) -> String {
        (area.x..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn collapsed_panel_shows_only_button_bar() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new(), Instant::now());
        let mut terminal = terminal();
        let buffer = render(&mut terminal, &mut app);

        let layout = *app.layout();
        assert_eq!(layout.panel.height, 0);

        let theme = Theme::original();
        for y in 1..layout.button_bar.y {
            assert_eq!(buffer[(0, y)].bg, theme.bg, "row {y} should be background");
        }

        let label_row = layout.button.y + layout.button.height / 2;
        assert!(row_text(&buffer, layout.button, label_row).contains("Full"));
    }

    #[test]
    fn full_panel_paints_regions_in_order() {
        let t0 = Instant::now();
        let mut app = App::with_config(&Config::default(), LogBuffer::new(), t0);
        app.click();
        app.tick(t0 + Duration::from_secs(1));

        let mut terminal = terminal();
        let buffer = render(&mut terminal, &mut app);
        let layout = *app.layout();
        let theme = Theme::original();

        let top = layout.region(Region::Top);
        let middle = layout.region(Region::Middle);
        let bottom = layout.region(Region::Bottom);
        assert!(top.bottom() == middle.y && middle.bottom() == bottom.y);
        assert_eq!(bottom.bottom(), layout.button_bar.y);

        assert_eq!(buffer[(0, top.y)].bg, theme.optional_section);
        assert_eq!(buffer[(0, middle.y)].bg, theme.permanent_section);
        assert_eq!(buffer[(0, bottom.y)].bg, theme.optional_section);

        let label_row = middle.y + middle.height / 2;
        assert!(row_text(&buffer, middle, label_row).contains("middle 100%"));

        let button_row = layout.button.y + layout.button.height / 2;
        assert!(row_text(&buffer, layout.button, button_row).contains(PanelState::Partial.name()));
    }

    #[test]
    fn partial_panel_paints_only_middle() {
        let t0 = Instant::now();
        let mut app = App::with_config(&Config::default(), LogBuffer::new(), t0);
        app.click();
        app.tick(t0 + Duration::from_secs(1));
        app.click();
        app.tick(t0 + Duration::from_secs(2));
        assert_eq!(app.panel.state(), PanelState::Partial);

        let mut terminal = terminal();
        render(&mut terminal, &mut app);
        let layout = *app.layout();

        assert!(layout.region(Region::Top).is_empty());
        assert!(layout.region(Region::Bottom).is_empty());
        assert_eq!(layout.region(Region::Middle).height, 5);
        assert_eq!(layout.panel, layout.region(Region::Middle));
    }

    #[test]
    fn mid_transition_rows_track_total_height() {
        let t0 = Instant::now();
        let mut app = App::with_config(&Config::default(), LogBuffer::new(), t0);
        app.click();

        let mut terminal = terminal();
        for ms in (0..=500).step_by(50) {
            app.tick(t0 + Duration::from_millis(ms));
            render(&mut terminal, &mut app);
            let layout = *app.layout();
            let total = app.panel.orchestrator().total_height();
            assert_eq!(layout.panel.height, app.scale.rows(total), "at {ms}ms");
        }
    }

    #[test]
    fn mouse_click_on_rendered_button() {
        let mut app = App::with_config(&Config::default(), LogBuffer::new(), Instant::now());
        let mut terminal = terminal();
        render(&mut terminal, &mut app);

        let button = app.layout().button;
        app.pointer_down(button.x, button.y);
        let buffer = render(&mut terminal, &mut app);
        assert_eq!(buffer[(button.x, button.y)].bg, Theme::original().button_pressed);

        app.pointer_up(button.x, button.y);
        assert_eq!(app.panel.state(), PanelState::Full);
    }
}
