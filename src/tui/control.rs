// Pressable control
//
// A surface that reports its press state and emits a click on release.
// The click fires only when the control is enabled, the pointer went down
// inside it, and came back up inside it.

/// Which colour the control paints with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlLook {
    Normal,
    Pressed,
    Disabled,
}

/// Press tracking for one control
#[derive(Debug, Clone)]
pub struct PressableControl {
    enabled: bool,
    pressed: bool,
}

impl PressableControl {
    pub fn new() -> Self {
        Self {
            enabled: true,
            pressed: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the control; disabling drops any pending press
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pressed = false;
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Pointer went down; arms the control when it landed inside
    pub fn press(&mut self, inside: bool) {
        self.pressed = self.enabled && inside;
    }

    /// Pointer came up; returns `true` when this completes a click
    pub fn release(&mut self, inside: bool) -> bool {
        let was_pressed = self.pressed;
        self.pressed = false;
        was_pressed && inside && self.enabled
    }

    /// Look for this frame; `flash` shows keyboard activation as a press
    pub fn look(&self, flash: bool) -> ControlLook {
        if !self.enabled {
            ControlLook::Disabled
        } else if self.is_pressed() || flash {
            ControlLook::Pressed
        } else {
            ControlLook::Normal
        }
    }
}

impl Default for PressableControl {
    fn default() -> Self {
        Self::new()
    }
}
