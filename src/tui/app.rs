// TUI application state
//
// Owns the panel and its control, and turns wall-clock ticks and input
// events into panel operations. Rendering reads from here and writes the
// last computed layout back so pointer hit-testing matches what is on screen.

use super::control::{ControlLook, PressableControl};
use super::input::{InputHandler, KeyAction, REPEAT_DEBOUNCE};
use super::layout::{CellScale, PanelLayout};
use super::theme::Theme;
use crate::config::{Config, PanelSettings};
use crate::logging::LogBuffer;
use crate::panel::{Panel, PanelState, Region};
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    pub panel: Panel,

    /// The button in the bar under the panel
    pub control: PressableControl,

    pub theme: Theme,

    /// Geometry in configuration units
    pub settings: PanelSettings,

    pub scale: CellScale,

    /// Log buffer for the status line
    pub log_buffer: LogBuffer,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Input handler for key debouncing
    input_handler: InputHandler,

    /// When the previous frame was advanced
    last_frame: Instant,

    /// Keyboard activation shows the pressed colour until then
    flash_until: Option<Instant>,

    /// Layout of the last rendered frame
    layout: PanelLayout,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer, now: Instant) -> Self {
        let theme = Theme::by_name(&config.theme);
        tracing::info!(
            theme = theme.name,
            transition_ms = config.panel.transition.as_millis() as u64,
            easing = config.panel.easing.as_str(),
            "Panel mounted collapsed"
        );

        Self {
            panel: Panel::new(config.panel.animation()),
            control: PressableControl::new(),
            theme,
            settings: config.panel.clone(),
            scale: CellScale::from_display(&config.display),
            log_buffer,
            should_quit: false,
            input_handler: InputHandler::default(),
            last_frame: now,
            flash_until: None,
            layout: PanelLayout::default(),
        }
    }

    /// Advance the panel by the time since the previous tick
    pub fn tick(&mut self, now: Instant) -> Duration {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        if self.flash_until.is_some_and(|until| now >= until) {
            self.flash_until = None;
        }

        let was_animating = self.panel.is_animating();
        self.panel.advance(delta);
        if was_animating && !self.panel.is_animating() {
            tracing::debug!(state = %self.panel.state(), "Panel settled");
        }
        delta
    }

    /// The control was clicked
    pub fn click(&mut self) -> PanelState {
        let state = self.panel.on_control_clicked();
        tracing::info!(state = %state, "Panel -> {}", state);
        state
    }

    /// Keyboard activation of the control
    pub fn activate(&mut self, now: Instant) {
        if !self.control.is_enabled() {
            return;
        }
        self.flash_until = Some(now + REPEAT_DEBOUNCE);
        self.click();
    }

    pub fn handle_key_press(&mut self, key: KeyCode, now: Instant) {
        match self.input_handler.handle_key_press(key, now) {
            Some(KeyAction::Activate) => self.activate(now),
            Some(KeyAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    /// Left button went down at a terminal cell
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        let inside = self.layout.hits_button(column, row);
        self.control.press(inside);
    }

    /// Left button came up at a terminal cell
    pub fn pointer_up(&mut self, column: u16, row: u16) {
        let inside = self.layout.hits_button(column, row);
        if self.control.release(inside) {
            self.click();
        }
    }

    pub fn control_look(&self) -> ControlLook {
        self.control.look(self.flash_until.is_some())
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    /// Record the layout just rendered
    ///
    /// A control squeezed to zero cells cannot be seen, so it is disabled
    /// until the terminal grows again.
    pub fn set_layout(&mut self, layout: PanelLayout) {
        let visible = !layout.button.is_empty();
        if visible != self.control.is_enabled() {
            tracing::debug!(visible, "Control visibility changed");
            self.control.set_enabled(visible);
        }
        self.layout = layout;
    }

    /// Text shown inside a region: its name and how much of it is showing
    pub fn region_label(&self, region: Region) -> String {
        let reveal = self.panel.orchestrator().reveal(region);
        format!("{} {:.0}%", region.name(), reveal * 100.0)
    }
}
