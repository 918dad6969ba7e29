//! Per-limb stepping state.

use glam::Vec3;

use super::GaitConfig;
use crate::dynamics::SecondOrderFilter;

/// Where a limb is in its step cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPhase {
    /// The foot is planted and pinned in place.
    Grounded,
    /// The foot is travelling from `start` to `target`.
    Stepping {
        /// Normalised progress through the step, `0` at lift-off.
        progress: f32,
        /// Planted position the step left from.
        start: Vec3,
        /// Ground position the step lands on.
        target: Vec3,
    },
}

/// Per-tick observations for one limb, supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbInput {
    /// Desired foot position, already projected onto the ground.
    pub target: Vec3,
    /// Position of the leg's root joint on the body.
    pub root: Vec3,
}

impl LimbInput {
    /// Creates an input from a ground target and the leg root.
    #[must_use]
    pub const fn new(target: Vec3, root: Vec3) -> Self {
        Self { target, root }
    }
}

/// One leg: its foot, where it last planted, and the filter smoothing its
/// step trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Limb {
    foot: Vec3,
    planted: Vec3,
    phase: StepPhase,
    filter: SecondOrderFilter,
}

impl Limb {
    pub(super) const fn new(foot: Vec3, filter: SecondOrderFilter) -> Self {
        Self {
            foot,
            planted: foot,
            phase: StepPhase::Grounded,
            filter,
        }
    }

    /// Current foot position.
    #[must_use]
    pub const fn foot(&self) -> Vec3 {
        self.foot
    }

    /// Position the foot last planted on.
    #[must_use]
    pub const fn planted(&self) -> Vec3 {
        self.planted
    }

    /// Current step phase.
    #[must_use]
    pub const fn phase(&self) -> StepPhase {
        self.phase
    }

    /// Whether the limb is mid-step.
    #[must_use]
    pub const fn is_stepping(&self) -> bool {
        matches!(self.phase, StepPhase::Stepping { .. })
    }

    pub(super) fn begin_step(&mut self, target: Vec3) {
        self.phase = StepPhase::Stepping {
            progress: 0.0,
            start: self.foot,
            target,
        };
    }

    pub(super) fn pin(&mut self) {
        self.foot = self.planted;
    }

    /// Advances an in-flight step; grounded limbs are left alone.
    pub(super) fn advance(&mut self, delta_time: f32, config: &GaitConfig) {
        let StepPhase::Stepping {
            progress,
            start,
            target,
        } = self.phase
        else {
            return;
        };

        let next = progress + delta_time / config.step_duration;
        let across = config.horizontal_curve.evaluate(next);
        let lift = config.vertical_curve.evaluate(next) * config.step_height;
        let waypoint = start.lerp(target, across) + Vec3::Y * lift;
        self.foot = self.filter.update(delta_time, waypoint, None);

        if next >= 1.0 {
            self.plant(target);
        } else {
            self.phase = StepPhase::Stepping {
                progress: next,
                start,
                target,
            };
        }
    }

    fn plant(&mut self, target: Vec3) {
        self.foot = target;
        self.planted = target;
        self.filter.reset(target);
        self.phase = StepPhase::Grounded;
    }
}
