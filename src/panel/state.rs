// Panel state machine
//
// The panel has exactly three discrete modes. One click event drives every
// transition; there are no timers and no implicit decay. Intermediate visuals
// come from the orchestrator's interpolation, never from a fourth state.

use std::fmt;
use std::ops::{Index, IndexMut};

/// Discrete panel mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// Nothing visible, panel height 0 (mount-time only)
    #[default]
    Collapsed,
    /// Only the middle region
    Partial,
    /// Top, middle and bottom regions
    Full,
}

impl PanelState {
    /// State reached by one click from this state
    ///
    /// Collapsed opens fully, then the panel toggles between Full and
    /// Partial forever. No click leads back to Collapsed.
    pub fn next(self) -> Self {
        match self {
            PanelState::Collapsed => PanelState::Full,
            PanelState::Full => PanelState::Partial,
            PanelState::Partial => PanelState::Full,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PanelState::Collapsed => "Collapsed",
            PanelState::Partial => "Partial",
            PanelState::Full => "Full",
        }
    }
}

impl fmt::Display for PanelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the three stacked regions, listed top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Top,
    Middle,
    Bottom,
}

impl Region {
    /// All regions in stacking order (top first)
    pub const ALL: [Region; 3] = [Region::Top, Region::Middle, Region::Bottom];

    /// Whether this region occupies space when `state` is at rest
    pub fn is_present_in(self, state: PanelState) -> bool {
        match self {
            Region::Middle => state != PanelState::Collapsed,
            Region::Top | Region::Bottom => state == PanelState::Full,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::Top => "top",
            Region::Middle => "middle",
            Region::Bottom => "bottom",
        }
    }

    fn index(self) -> usize {
        match self {
            Region::Top => 0,
            Region::Middle => 1,
            Region::Bottom => 2,
        }
    }
}

/// A length per region, in configuration units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionHeights([f64; 3]);

impl RegionHeights {
    /// All regions at zero height
    pub const ZERO: RegionHeights = RegionHeights([0.0; 3]);

    pub fn new(top: f64, middle: f64, bottom: f64) -> Self {
        Self([top, middle, bottom])
    }

    /// Overall panel height: always the sum of the region heights
    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Per-region heights for `state`: natural height when present, else 0
    pub fn for_state(natural: &RegionHeights, state: PanelState) -> Self {
        let mut heights = Self::ZERO;
        for region in Region::ALL {
            if region.is_present_in(state) {
                heights[region] = natural[region];
            }
        }
        heights
    }

    /// Per-region linear interpolation at eased progress `t`
    pub fn lerp(from: &RegionHeights, to: &RegionHeights, t: f64) -> Self {
        let mut heights = Self::ZERO;
        for region in Region::ALL {
            let a = from[region];
            let b = to[region];
            heights[region] = a + (b - a) * t;
        }
        heights
    }
}

impl Index<Region> for RegionHeights {
    type Output = f64;

    fn index(&self, region: Region) -> &f64 {
        &self.0[region.index()]
    }
}

impl IndexMut<Region> for RegionHeights {
    fn index_mut(&mut self, region: Region) -> &mut f64 {
        &mut self.0[region.index()]
    }
}

/// Owns the current panel state and applies the click transition
#[derive(Debug, Clone, Default)]
pub struct PanelStateMachine {
    state: PanelState,
}

impl PanelStateMachine {
    /// Start collapsed, as on every mount
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PanelState {
        self.state
    }

    /// Apply the click transition and return the new state
    pub fn on_control_clicked(&mut self) -> PanelState {
        let previous = self.state;
        self.state = previous.next();
        tracing::debug!("Panel state {} -> {}", previous, self.state);
        self.state
    }
}
