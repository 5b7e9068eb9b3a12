// Status bar component
//
// One line at the top: panel state, transition target and progress, total
// height, and the most recent log message.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status line
///
/// Adapts to terminal width:
/// - Wide: labels, transition timing and the latest log message
/// - Normal: labels only
/// - Compact: bare values
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    if area.is_empty() {
        return;
    }

    let bp = Breakpoint::from_width(area.width);
    let status = status_text(app, bp);

    let mut spans = vec![Span::raw(status)];
    if bp.at_least(Breakpoint::Wide) {
        if let Some(entry) = app.log_buffer.latest() {
            spans.push(Span::styled(
                format!(
                    " │ {} {} {}",
                    entry.timestamp.format("%H:%M:%S"),
                    entry.level.as_str(),
                    entry.message
                ),
                Style::default().fg(app.theme.muted),
            ));
        }
    }

    let line = Paragraph::new(Line::from(spans)).style(
        Style::default()
            .bg(app.theme.status_bar)
            .fg(app.theme.status_fg),
    );
    f.render_widget(line, area);
}

fn status_text(app: &App, bp: Breakpoint) -> String {
    let frame = app.panel.frame();
    let orchestrator = app.panel.orchestrator();
    let target = orchestrator.target_state();
    let percent = (frame.progress * 100.0).round() as u32;
    let height = frame.total_height();

    if bp.at_least(Breakpoint::Wide) {
        format!(
            " state {} │ target {} {:>3}% ({}/{}ms) │ height {:.1}",
            frame.state,
            target,
            percent,
            orchestrator.timeline().elapsed().as_millis(),
            orchestrator.config().transition.as_millis(),
            height
        )
    } else if bp.at_least(Breakpoint::Normal) {
        format!(
            " state {} │ target {} {:>3}% │ height {:.1}",
            frame.state, target, percent, height
        )
    } else {
        format!(" {} {}% {:.0}", target, percent, height)
    }
}
