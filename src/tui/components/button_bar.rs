// Button bar component
//
// The bar under the panel and the control centred in it. The control is
// labelled with the state a click would move the panel to.

use super::panel_view::middle_row;
use crate::tui::app::App;
use crate::tui::layout::PanelLayout;
use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, layout: &PanelLayout, app: &App) {
    if layout.button_bar.is_empty() {
        return;
    }

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.button_bar)),
        layout.button_bar,
    );

    if layout.button.is_empty() {
        return;
    }

    let style = app.theme.button_style(app.control_look());
    f.render_widget(Block::default().style(style), layout.button);

    let label = Paragraph::new(app.panel.state().next().name())
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(label, middle_row(layout.button));
}
