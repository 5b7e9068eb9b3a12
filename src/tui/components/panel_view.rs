// Panel view component
//
// Fills each region's rows with its colour and centres its label. Hidden
// regions, and regions that round to zero rows, draw nothing.

use crate::panel::Region;
use crate::tui::app::App;
use crate::tui::layout::PanelLayout;
use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, layout: &PanelLayout, app: &App) {
    let orchestrator = app.panel.orchestrator();
    for region in Region::ALL {
        let area = layout.region(region);
        if !orchestrator.is_visible(region) || area.is_empty() {
            continue;
        }

        let style = app.theme.region_style(region);
        f.render_widget(Block::default().style(style), area);

        let label = Paragraph::new(app.region_label(region))
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(label, middle_row(area));
    }
}

/// The single row a centred label goes on
pub(super) fn middle_row(area: Rect) -> Rect {
    Rect::new(area.x, area.y + area.height / 2, area.width, area.height.min(1))
}
