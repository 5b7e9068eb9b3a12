// Panel core - state machine plus animation orchestration
//
// The panel is plain owned data: the host holds a `Panel`, forwards clicks
// to it, calls `advance` once per frame, and renders from `frame()`.
// Nothing here knows about terminals, colours or wall-clock time.

mod easing;
mod orchestrator;
mod state;

pub use easing::Easing;
pub use orchestrator::{PanelAnimationConfig, PanelAnimationOrchestrator, DEFAULT_TRANSITION};
pub use state::{PanelState, PanelStateMachine, Region, RegionHeights};

use std::time::Duration;

/// What the render layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Discrete state the panel is in (and animating toward)
    pub state: PanelState,
    /// Interpolated height of each region
    pub heights: RegionHeights,
    /// Transition progress in [0, 1]
    pub progress: f64,
}

impl PanelFrame {
    pub fn total_height(&self) -> f64 {
        self.heights.total()
    }
}

/// The panel: discrete state and its animation, kept in step
///
/// Every accepted click retargets the orchestrator inside the same call, so
/// no frame can render with a stale target after a state change.
#[derive(Debug, Clone)]
pub struct Panel {
    machine: PanelStateMachine,
    orchestrator: PanelAnimationOrchestrator,
}

impl Panel {
    /// Mount a collapsed panel
    pub fn new(config: PanelAnimationConfig) -> Self {
        Self {
            machine: PanelStateMachine::new(),
            orchestrator: PanelAnimationOrchestrator::new(config),
        }
    }

    pub fn state(&self) -> PanelState {
        self.machine.current()
    }

    /// Handle a click from the control: advance the state and retarget
    pub fn on_control_clicked(&mut self) -> PanelState {
        let state = self.machine.on_control_clicked();
        self.orchestrator.retarget(state);
        state
    }

    /// Advance the animation by one frame's worth of time
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.orchestrator.advance(delta)
    }

    pub fn orchestrator(&self) -> &PanelAnimationOrchestrator {
        &self.orchestrator
    }

    pub fn is_animating(&self) -> bool {
        self.orchestrator.is_animating()
    }

    /// Snapshot for rendering
    pub fn frame(&self) -> PanelFrame {
        PanelFrame {
            state: self.state(),
            heights: *self.orchestrator.heights(),
            progress: self.orchestrator.progress(),
        }
    }
}
