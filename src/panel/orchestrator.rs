//! Panel animation orchestrator
//!
//! Turns discrete panel states into per-region heights over time. The
//! orchestrator does not know why a target changed; it only knows the
//! current heights, the heights it is heading for, and how far along the
//! shared transition it is.
//!
//! # Invariants
//!
//! - Progress is always in [0.0, 1.0] (clamped unconditionally)
//! - The overall panel height is the sum of the region heights, both at rest
//!   and mid-transition
//! - Every region uses the same duration and easing curve, so no region runs
//!   ahead of or behind the overall resize
//! - Retargeting mid-flight starts from the current interpolated heights,
//!   so there is never a visual jump
//!
//! # Failure Modes
//!
//! - Zero delta: `advance` is a no-op
//! - Zero duration: retarget snaps straight to the target
//! - Retarget to the current target: no-op, elapsed time is kept

use super::easing::Easing;
use super::state::{PanelState, Region, RegionHeights};
use std::time::Duration;

/// Default transition duration shared by all regions
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(500);

/// Geometry and timing the orchestrator animates with
#[derive(Debug, Clone, PartialEq)]
pub struct PanelAnimationConfig {
    /// Height each region has when present
    pub natural_heights: RegionHeights,
    /// Duration of every transition
    pub transition: Duration,
    /// Curve applied to transition progress
    pub easing: Easing,
}

impl Default for PanelAnimationConfig {
    fn default() -> Self {
        Self {
            natural_heights: RegionHeights::new(100.0, 100.0, 100.0),
            transition: DEFAULT_TRANSITION,
            easing: Easing::default(),
        }
    }
}

/// Mutable interpolation state, one per orchestrator
#[derive(Debug, Clone)]
pub struct AnimationTimeline {
    /// Heights being rendered right now
    current: RegionHeights,
    /// Heights captured when the current transition began
    start: RegionHeights,
    /// Heights the current transition ends at
    target: RegionHeights,
    /// State whose layout `target` describes
    target_state: PanelState,
    elapsed: Duration,
    at_rest: bool,
}

impl AnimationTimeline {
    /// At rest in the collapsed layout (all heights zero)
    fn collapsed() -> Self {
        Self {
            current: RegionHeights::ZERO,
            start: RegionHeights::ZERO,
            target: RegionHeights::ZERO,
            target_state: PanelState::Collapsed,
            elapsed: Duration::ZERO,
            at_rest: true,
        }
    }

    /// Time spent in the current transition
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Drives region heights toward the layout of the latest panel state
#[derive(Debug, Clone)]
pub struct PanelAnimationOrchestrator {
    config: PanelAnimationConfig,
    timeline: AnimationTimeline,
}

impl PanelAnimationOrchestrator {
    pub fn new(config: PanelAnimationConfig) -> Self {
        Self {
            config,
            timeline: AnimationTimeline::collapsed(),
        }
    }

    pub fn config(&self) -> &PanelAnimationConfig {
        &self.config
    }

    pub fn timeline(&self) -> &AnimationTimeline {
        &self.timeline
    }

    /// Point the timeline at the layout for `state`
    ///
    /// Returns `false` when `state` is already the target; in that case
    /// neither the elapsed time nor the current heights are touched.
    pub fn retarget(&mut self, state: PanelState) -> bool {
        let timeline = &mut self.timeline;
        if state == timeline.target_state {
            tracing::trace!("Retarget to {} ignored (already target)", state);
            return false;
        }

        timeline.start = timeline.current;
        timeline.target = RegionHeights::for_state(&self.config.natural_heights, state);
        timeline.target_state = state;
        timeline.elapsed = Duration::ZERO;

        if self.config.transition.is_zero() {
            timeline.current = timeline.target;
            timeline.at_rest = true;
        } else {
            timeline.at_rest = false;
        }

        tracing::debug!(
            "Retarget to {}: total height {:.1} -> {:.1}",
            state,
            timeline.start.total(),
            timeline.target.total()
        );
        true
    }

    /// Advance the running transition by one frame
    ///
    /// Returns `true` if the heights changed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.timeline.at_rest || delta.is_zero() {
            return false;
        }

        self.timeline.elapsed = self.timeline.elapsed.saturating_add(delta);
        let progress = self.progress();

        if progress >= 1.0 {
            self.timeline.current = self.timeline.target;
            self.timeline.at_rest = true;
            tracing::debug!(
                "Settled in {} (total height {:.1})",
                self.timeline.target_state,
                self.timeline.current.total()
            );
        } else {
            self.timeline.current = RegionHeights::lerp(
                &self.timeline.start,
                &self.timeline.target,
                self.config.easing.apply(progress),
            );
        }
        true
    }

    /// Fraction of the current transition elapsed, in [0, 1]
    pub fn progress(&self) -> f64 {
        if self.timeline.at_rest {
            return 1.0;
        }
        let duration = self.config.transition.as_secs_f64();
        if duration <= 0.0 {
            return 1.0;
        }
        (self.timeline.elapsed.as_secs_f64() / duration).clamp(0.0, 1.0)
    }

    pub fn height_of(&self, region: Region) -> f64 {
        self.timeline.current[region]
    }

    /// Whether the region occupies layout space this frame
    ///
    /// Follows the interpolated height, not the discrete presence flag, so a
    /// region keeps drawing while it shrinks away and appears as soon as it
    /// starts to grow.
    pub fn is_visible(&self, region: Region) -> bool {
        self.height_of(region) > 0.0
    }

    /// How much of the region's natural height is showing, in [0, 1]
    pub fn reveal(&self, region: Region) -> f64 {
        let natural = self.config.natural_heights[region];
        if natural <= 0.0 {
            return 0.0;
        }
        (self.height_of(region) / natural).clamp(0.0, 1.0)
    }

    /// Overall panel height (sum of region heights)
    pub fn total_height(&self) -> f64 {
        self.timeline.current.total()
    }

    pub fn heights(&self) -> &RegionHeights {
        &self.timeline.current
    }

    pub fn target_state(&self) -> PanelState {
        self.timeline.target_state
    }

    pub fn is_animating(&self) -> bool {
        !self.timeline.at_rest
    }
}
