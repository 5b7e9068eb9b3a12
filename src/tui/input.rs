// Key debouncing for the panel host
//
// Every bound key is an action key: it fires once per press. Terminals that
// report key releases reset the key on release; terminals that only send
// repeated presses while a key is held get a debounce window instead.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum gap between two triggers of a held key on terminals that never
/// report a release
pub const REPEAT_DEBOUNCE: Duration = Duration::from_millis(150);

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Activate the control (same as a click)
    Activate,
    Quit,
}

/// Tracks the state of a single key
#[derive(Debug, Default)]
struct KeyState {
    is_pressed: bool,
    last_triggered: Option<Instant>,
}

/// Maps keys to actions, once per press
pub struct InputHandler {
    bindings: HashMap<KeyCode, KeyAction>,
    key_states: HashMap<KeyCode, KeyState>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
            key_states: HashMap::new(),
        }
    }

    pub fn bind(&mut self, key: KeyCode, action: KeyAction) {
        self.bindings.insert(key, action);
    }

    /// Handle a key press event
    /// Returns the action to run, if this press should trigger one
    pub fn handle_key_press(&mut self, key: KeyCode, now: Instant) -> Option<KeyAction> {
        let action = *self.bindings.get(&key)?;
        let state = self.key_states.entry(key).or_default();

        if state.is_pressed {
            // Held key: only re-trigger after the debounce window
            let ready = state
                .last_triggered
                .map(|last| now.saturating_duration_since(last) >= REPEAT_DEBOUNCE)
                .unwrap_or(true);
            if !ready {
                return None;
            }
        }

        state.is_pressed = true;
        state.last_triggered = Some(now);
        Some(action)
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            *state = KeyState::default();
        }
    }

    /// Space and Enter activate, q and Esc quit
    pub fn with_default_config() -> Self {
        let mut handler = Self::new();
        handler.bind(KeyCode::Char(' '), KeyAction::Activate);
        handler.bind(KeyCode::Enter, KeyAction::Activate);
        handler.bind(KeyCode::Char('q'), KeyAction::Quit);
        handler.bind(KeyCode::Char('Q'), KeyAction::Quit);
        handler.bind(KeyCode::Esc, KeyAction::Quit);
        handler
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_triggers_once_until_release() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert_eq!(
            handler.handle_key_press(KeyCode::Enter, t0),
            Some(KeyAction::Activate)
        );
        assert_eq!(
            handler.handle_key_press(KeyCode::Enter, t0 + Duration::from_millis(20)),
            None
        );

        handler.handle_key_release(KeyCode::Enter);
        assert_eq!(
            handler.handle_key_press(KeyCode::Enter, t0 + Duration::from_millis(40)),
            Some(KeyAction::Activate)
        );
    }

    #[test]
    fn test_held_key_debounced_without_release() {
        let mut handler = InputHandler::default();
        let t0 = Instant::now();

        assert!(handler.handle_key_press(KeyCode::Char(' '), t0).is_some());
        assert!(handler
            .handle_key_press(KeyCode::Char(' '), t0 + Duration::from_millis(100))
            .is_none());
        assert!(handler
            .handle_key_press(KeyCode::Char(' '), t0 + REPEAT_DEBOUNCE)
            .is_some());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut handler = InputHandler::default();
        assert_eq!(handler.handle_key_press(KeyCode::Char('x'), Instant::now()), None);
        handler.handle_key_release(KeyCode::Char('x'));
    }

    #[test]
    fn test_quit_keys() {
        let mut handler = InputHandler::default();
        let now = Instant::now();
        for key in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(handler.handle_key_press(key, now), Some(KeyAction::Quit));
        }
    }
}
