//! The second-order dynamics filter.

use glam::Vec3;
use log::{debug, warn};

use super::tuning::{Coefficients, FilterTuning, Stabilisation};
use crate::error::DynamicsError;
use crate::numeric::steps_to_f32;

/// Drives a point toward a moving target with a second-order response.
///
/// Each instance owns its state and is advanced by exactly one caller, once
/// per tick. Clone the filter to preview future output without disturbing
/// the original.
///
/// # Examples
///
/// ```
/// use glam::Vec3;
/// use strider::{FilterTuning, SecondOrderFilter, Stabilisation};
///
/// let tuning = FilterTuning::new(1.0, 1.0, 0.0);
/// let mut filter = SecondOrderFilter::new(tuning, Stabilisation::Substep, Vec3::ZERO)?;
/// let mut position = Vec3::ZERO;
/// for _ in 0..300 {
///     position = filter.update(1.0 / 60.0, Vec3::X, None);
/// }
/// assert!((position.x - 1.0).abs() < 1e-3);
/// # Ok::<(), strider::DynamicsError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SecondOrderFilter {
    tuning: FilterTuning,
    coefficients: Coefficients,
    stabilisation: Stabilisation,
    position: Vec3,
    velocity: Vec3,
    previous_target: Vec3,
}

impl SecondOrderFilter {
    /// Creates a filter at rest on `initial_position`.
    ///
    /// Seeding the filter at the target's starting position avoids a startup
    /// transient.
    ///
    /// # Errors
    /// Returns [`DynamicsError::InvalidParameter`] if `tuning` is invalid.
    pub fn new(
        tuning: FilterTuning,
        stabilisation: Stabilisation,
        initial_position: Vec3,
    ) -> Result<Self, DynamicsError> {
        let coefficients = Coefficients::from_tuning(&tuning)?;
        debug!(
            "second-order filter f={} z={} r={} ({stabilisation:?}), critical step {:.5}s",
            tuning.frequency,
            tuning.damping,
            tuning.response,
            coefficients.critical_step()
        );
        Ok(Self {
            tuning,
            coefficients,
            stabilisation,
            position: initial_position,
            velocity: Vec3::ZERO,
            previous_target: initial_position,
        })
    }

    /// Advances the filter by `delta_time` seconds toward `target`.
    ///
    /// With `target_velocity` set to `None` the velocity is estimated from
    /// the previous target, which is then replaced by `target`. An explicit
    /// velocity, zero included, is used as given and leaves the previous
    /// target untouched.
    ///
    /// A non-positive or non-finite `delta_time` is ignored and the current
    /// position returned. Use [`Self::try_update`] to observe that case.
    pub fn update(&mut self, delta_time: f32, target: Vec3, target_velocity: Option<Vec3>) -> Vec3 {
        match self.try_update(delta_time, target, target_velocity) {
            Ok(position) => position,
            Err(err) => {
                debug!("ignoring filter update: {err}");
                self.position
            }
        }
    }

    /// Fallible form of [`Self::update`].
    ///
    /// # Errors
    /// Returns [`DynamicsError::DegenerateStep`] without touching any state
    /// when `delta_time` is not finite and positive.
    pub fn try_update(
        &mut self,
        delta_time: f32,
        target: Vec3,
        target_velocity: Option<Vec3>,
    ) -> Result<Vec3, DynamicsError> {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return Err(DynamicsError::DegenerateStep { delta_time });
        }

        let feed_forward =
            target_velocity.unwrap_or_else(|| self.estimate_velocity(delta_time, target));

        match self.stabilisation {
            Stabilisation::Substep => self.integrate_substeps(delta_time, target, feed_forward),
            Stabilisation::PoleMatching => {
                let (k1, k2) = self.coefficients.stabilised(delta_time);
                self.euler_step(delta_time, target, feed_forward, k1, k2);
            }
        }
        Ok(self.position)
    }

    /// Places the filter at rest on `position`, forgetting its history.
    pub fn reset(&mut self, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.previous_target = position;
    }

    /// Current filtered output.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Current rate of change of the output.
    #[must_use]
    pub const fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Last target used to estimate velocity.
    #[must_use]
    pub const fn previous_target(&self) -> Vec3 {
        self.previous_target
    }

    /// Tuning the filter was built from.
    #[must_use]
    pub const fn tuning(&self) -> &FilterTuning {
        &self.tuning
    }

    /// Constants derived from the tuning.
    #[must_use]
    pub const fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    /// Stability strategy in use.
    #[must_use]
    pub const fn stabilisation(&self) -> Stabilisation {
        self.stabilisation
    }

    fn estimate_velocity(&mut self, delta_time: f32, target: Vec3) -> Vec3 {
        let estimate = (target - self.previous_target) / delta_time;
        self.previous_target = target;
        estimate
    }

    fn integrate_substeps(&mut self, delta_time: f32, target: Vec3, target_velocity: Vec3) {
        let steps = self.coefficients.substeps(delta_time);
        let span = self.coefficients.substep_span(delta_time);
        if span < delta_time {
            warn!("update of {delta_time}s exceeds {steps} substeps; integrating {span}s");
        }
        let substep = span / steps_to_f32(steps);
        let (k1, k2) = (self.coefficients.k1(), self.coefficients.k2());
        for _ in 0..steps {
            self.euler_step(substep, target, target_velocity, k1, k2);
        }
    }

    fn euler_step(&mut self, step: f32, target: Vec3, target_velocity: Vec3, k1: f32, k2: f32) {
        self.position += step * self.velocity;
        let acceleration = (target + self.coefficients.k3() * target_velocity
            - self.position
            - k1 * self.velocity)
            / k2;
        self.velocity += step * acceleration;
    }
}
