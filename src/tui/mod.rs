// TUI module - Terminal User Interface
//
// This module hosts the panel in the terminal using ratatui. It handles:
// - Terminal initialization and cleanup
// - Frame ticks that advance the panel animation
// - Keyboard and mouse input for the control
// - Rendering the UI

pub mod app;
pub mod components;
pub mod control;
pub mod input;
pub mod layout;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// whether or not the loop failed.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer, Instant::now());

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, config.display.frame_interval).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Longest a single input poll may block the frame ticker
const MAX_INPUT_POLL: Duration = Duration::from_millis(10);

/// Main event loop
///
/// Each frame tick advances the panel by the wall-clock time since the
/// previous tick. Input is polled in between; tokio::select! wakes on
/// whichever comes first. The screen is only redrawn after a tick or an
/// input event, so the redraw rate follows the configured frame interval.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    frame_interval: Duration,
) -> Result<()> {
    let mut frame_ticker = tokio::time::interval(frame_interval);
    // A stalled frame is dropped, not replayed; the next tick's delta covers it
    frame_ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let poll_timeout = input_poll_timeout(frame_interval);
    let mut needs_redraw = true;

    loop {
        if needs_redraw {
            terminal
                .draw(|f| ui::draw(f, app))
                .context("Failed to draw terminal")?;
            needs_redraw = false;
        }

        tokio::select! {
            // Keyboard or mouse input
            handled = async {
                if !event::poll(poll_timeout).unwrap_or(false) {
                    return false;
                }
                match event::read() {
                    Ok(Event::Key(key_event)) => {
                        handle_key_event(app, key_event);
                        true
                    }
                    Ok(Event::Mouse(mouse_event)) => {
                        handle_mouse_event(app, mouse_event);
                        true
                    }
                    Ok(Event::Resize(..)) => true,
                    _ => false,
                }
            } => {
                needs_redraw |= handled;
            }

            // Animation frame
            _ = frame_ticker.tick() => {
                app.tick(Instant::now());
                needs_redraw = true;
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!(state = %app.panel.state(), "Panel host exiting");
    Ok(())
}

/// How long to wait for input before giving the frame ticker a turn
///
/// The poll blocks the runtime thread, so it is kept to half a frame and
/// never more than [`MAX_INPUT_POLL`].
fn input_poll_timeout(frame_interval: Duration) -> Duration {
    (frame_interval / 2).clamp(Duration::from_millis(1), MAX_INPUT_POLL)
}

/// Handle keyboard input
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    // Ctrl+C quits even though raw mode swallows SIGINT
    if key_event.kind == KeyEventKind::Press
        && key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => app.handle_key_press(key_event.code, Instant::now()),
        KeyEventKind::Release => app.handle_key_release(key_event.code),
        _ => {}
    }
}

/// Handle mouse input
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.pointer_down(mouse_event.column, mouse_event.row)
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.pointer_up(mouse_event.column, mouse_event.row)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_poll_follows_frame_interval() {
        assert_eq!(
            input_poll_timeout(Duration::from_millis(16)),
            Duration::from_millis(8)
        );
        assert_eq!(
            input_poll_timeout(Duration::from_millis(4)),
            Duration::from_millis(2)
        );
    }

    #[test]
    fn test_input_poll_is_bounded() {
        // Slow frame rates still hand the runtime back to the ticker promptly
        assert_eq!(input_poll_timeout(Duration::from_millis(100)), MAX_INPUT_POLL);
        // Never a zero-length busy poll
        assert_eq!(
            input_poll_timeout(Duration::from_millis(1)),
            Duration::from_millis(1)
        );
    }
}
