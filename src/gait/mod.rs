//! Procedural multi-leg stepping.
//!
//! Each limb stays planted until its foot drifts too far from the ground
//! target the caller supplies, or the leg stretches outside its comfortable
//! range. It then steps along an eased arc toward the target, the arc being
//! smoothed by the limb's own [`SecondOrderFilter`]. A limb only lifts while
//! enough others remain planted, and a limb mid-step is never restarted.
//!
//! The rig uses a y-up convention: step height is added along `+Y`.

mod curve;
mod limb;

use glam::Vec3;
use log::debug;
use serde::{Deserialize, Serialize};

pub use curve::StepCurve;
pub use limb::{Limb, LimbInput, StepPhase};

use crate::dynamics::{FilterTuning, SecondOrderFilter, Stabilisation};
use crate::error::{DynamicsError, GaitError, Parameter};
use crate::numeric::index_to_f32;
use crate::{
    DEFAULT_MAX_LEG_STRETCH, DEFAULT_MIN_GROUNDED, DEFAULT_MIN_LEG_STRETCH,
    DEFAULT_STEP_DISTANCE, DEFAULT_STEP_DURATION, DEFAULT_STEP_HEIGHT,
};

/// Tunables for a [`GaitController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GaitConfig {
    /// Foot-to-target distance that triggers a step.
    pub step_distance: f32,
    /// Peak lift of a step above its straight-line path.
    pub step_height: f32,
    /// Seconds a step takes from lift-off to landing.
    pub step_duration: f32,
    /// Leg stretch below which the foot is re-placed.
    pub min_leg_stretch: f32,
    /// Leg stretch above which the foot is re-placed.
    pub max_leg_stretch: f32,
    /// Limbs that must stay planted while others lift.
    pub min_grounded: usize,
    /// Lift profile over the step.
    pub vertical_curve: StepCurve,
    /// Travel profile from start to target over the step.
    pub horizontal_curve: StepCurve,
    /// Tuning of each limb's trajectory filter.
    pub filter: FilterTuning,
    /// Stability strategy of each limb's trajectory filter.
    pub stabilisation: Stabilisation,
}

impl Default for GaitConfig {
    fn default() -> Self {
        Self {
            step_distance: DEFAULT_STEP_DISTANCE,
            step_height: DEFAULT_STEP_HEIGHT,
            step_duration: DEFAULT_STEP_DURATION,
            min_leg_stretch: DEFAULT_MIN_LEG_STRETCH,
            max_leg_stretch: DEFAULT_MAX_LEG_STRETCH,
            min_grounded: DEFAULT_MIN_GROUNDED,
            vertical_curve: StepCurve::Arc,
            horizontal_curve: StepCurve::SmoothStep,
            filter: FilterTuning::default(),
            stabilisation: Stabilisation::default(),
        }
    }
}

impl GaitConfig {
    /// Checks the step timing, distances and filter tuning.
    ///
    /// # Errors
    /// Returns [`DynamicsError::InvalidParameter`] naming the first bad
    /// value.
    pub fn validate(&self) -> Result<(), DynamicsError> {
        self.filter.validate()?;
        if !self.step_duration.is_finite() || self.step_duration <= 0.0 {
            return Err(DynamicsError::invalid(
                Parameter::StepDuration,
                self.step_duration,
            ));
        }
        if !self.step_distance.is_finite() || self.step_distance < 0.0 {
            return Err(DynamicsError::invalid(
                Parameter::StepDistance,
                self.step_distance,
            ));
        }
        if !self.step_height.is_finite() {
            return Err(DynamicsError::invalid(
                Parameter::StepHeight,
                self.step_height,
            ));
        }
        if !self.min_leg_stretch.is_finite() || self.min_leg_stretch < 0.0 {
            return Err(DynamicsError::invalid(
                Parameter::LegStretch,
                self.min_leg_stretch,
            ));
        }
        if !self.max_leg_stretch.is_finite() || self.max_leg_stretch < self.min_leg_stretch {
            return Err(DynamicsError::invalid(
                Parameter::LegStretch,
                self.max_leg_stretch,
            ));
        }
        Ok(())
    }

    fn needs_step(&self, foot: Vec3, input: &LimbInput) -> bool {
        let drift = foot.distance(input.target);
        let stretch = foot.distance(input.root);
        drift > self.step_distance
            || stretch > self.max_leg_stretch
            || stretch < self.min_leg_stretch
    }
}

/// Drives a set of limbs and places the body over them, once per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct GaitController {
    config: GaitConfig,
    limbs: Vec<Limb>,
    body: Vec3,
}

impl GaitController {
    /// Creates a controller with one planted limb per entry of `feet`.
    ///
    /// # Errors
    /// Returns [`GaitError::NoLimbs`] for an empty `feet` slice and
    /// [`GaitError::Dynamics`] for an invalid configuration.
    pub fn new(config: GaitConfig, feet: &[Vec3]) -> Result<Self, GaitError> {
        config.validate()?;
        if feet.is_empty() {
            return Err(GaitError::NoLimbs);
        }
        let limbs = feet
            .iter()
            .map(|&foot| {
                SecondOrderFilter::new(config.filter, config.stabilisation, foot)
                    .map(|filter| Limb::new(foot, filter))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let body = mean(limbs.iter().map(Limb::foot), limbs.len());
        debug!("gait controller with {} limbs, body at {body}", limbs.len());
        Ok(Self {
            config,
            limbs,
            body,
        })
    }

    /// Advances every limb by `delta_time` seconds and returns the new body
    /// position.
    ///
    /// `inputs` holds one entry per limb, in the order the feet were given
    /// to [`Self::new`]. A non-positive or non-finite `delta_time` leaves
    /// every limb untouched.
    ///
    /// # Errors
    /// Returns [`GaitError::LimbCountMismatch`] when `inputs` does not match
    /// the number of limbs.
    pub fn tick(&mut self, delta_time: f32, inputs: &[LimbInput]) -> Result<Vec3, GaitError> {
        if inputs.len() != self.limbs.len() {
            return Err(GaitError::LimbCountMismatch {
                expected: self.limbs.len(),
                actual: inputs.len(),
            });
        }
        if !delta_time.is_finite() || delta_time <= 0.0 {
            debug!("ignoring gait tick with delta time {delta_time}");
            return Ok(self.body);
        }

        self.lift_limbs(inputs);
        for limb in &mut self.limbs {
            limb.advance(delta_time, &self.config);
        }
        self.body = mean(self.limbs.iter().map(Limb::foot), self.limbs.len());
        Ok(self.body)
    }

    /// Limbs in construction order.
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Body position: the average of the feet.
    #[must_use]
    pub const fn body(&self) -> Vec3 {
        self.body
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &GaitConfig {
        &self.config
    }

    /// Number of limbs currently planted.
    #[must_use]
    pub fn grounded_count(&self) -> usize {
        self.limbs.iter().filter(|limb| !limb.is_stepping()).count()
    }

    fn lift_limbs(&mut self, inputs: &[LimbInput]) {
        let mut grounded = self.grounded_count();
        for (index, (limb, input)) in self.limbs.iter_mut().zip(inputs).enumerate() {
            if limb.is_stepping() || grounded <= self.config.min_grounded {
                continue;
            }
            if self.config.needs_step(limb.foot(), input) {
                debug!("limb {index} lifting toward {}", input.target);
                limb.begin_step(input.target);
                grounded -= 1;
            } else {
                limb.pin();
            }
        }
    }
}

fn mean(points: impl Iterator<Item = Vec3>, count: usize) -> Vec3 {
    points.fold(Vec3::ZERO, |sum, point| sum + point) / index_to_f32(count)
}
