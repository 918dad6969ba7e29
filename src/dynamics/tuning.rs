//! Filter tuning and the integration constants derived from it.

use std::f32::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

use crate::error::{DynamicsError, Parameter};
use crate::numeric::{ceil_to_steps, steps_to_f32};
use crate::{
    CRITICAL_STEP_SAFETY_FACTOR, DEFAULT_DAMPING, DEFAULT_FREQUENCY, DEFAULT_RESPONSE,
    MAX_RECOMMENDED_DAMPING, MAX_RECOMMENDED_FREQUENCY, MAX_RECOMMENDED_RESPONSE, MAX_SUBSTEPS,
};

/// The three scalars that shape a filter's response.
///
/// # Examples
///
/// ```
/// use strider::FilterTuning;
///
/// let tuning = FilterTuning::new(2.0, 1.0, 0.0);
/// assert!(tuning.validate().is_ok());
/// assert!(FilterTuning::new(0.0, 1.0, 0.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterTuning {
    /// Natural frequency in Hz. Higher values respond faster.
    pub frequency: f32,
    /// Damping ratio. `0` oscillates forever, `1` is critically damped and
    /// values above `1` approach the target sluggishly.
    pub damping: f32,
    /// Feed-forward gain on the target velocity. Negative values anticipate
    /// motion, values above `1` overshoot it.
    pub response: f32,
}

impl Default for FilterTuning {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY, DEFAULT_DAMPING, DEFAULT_RESPONSE)
    }
}

impl FilterTuning {
    /// Creates a tuning without validating it.
    #[must_use]
    pub const fn new(frequency: f32, damping: f32, response: f32) -> Self {
        Self {
            frequency,
            damping,
            response,
        }
    }

    /// Checks that the tuning yields a well-defined filter.
    ///
    /// # Errors
    /// Returns [`DynamicsError::InvalidParameter`] when the frequency is not
    /// finite and positive, the damping is not finite and non-negative, or
    /// the response is not finite.
    pub fn validate(&self) -> Result<(), DynamicsError> {
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(DynamicsError::invalid(Parameter::Frequency, self.frequency));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(DynamicsError::invalid(Parameter::Damping, self.damping));
        }
        if !self.response.is_finite() {
            return Err(DynamicsError::invalid(Parameter::Response, self.response));
        }
        Ok(())
    }

    /// Reports whether every scalar sits inside the range tuning tools
    /// expose. Values outside it are legal but rarely useful.
    #[must_use]
    pub fn is_within_recommended(&self) -> bool {
        self.frequency > 0.0
            && self.frequency <= MAX_RECOMMENDED_FREQUENCY
            && (0.0..=MAX_RECOMMENDED_DAMPING).contains(&self.damping)
            && self.response.abs() <= MAX_RECOMMENDED_RESPONSE
    }
}

/// How a filter keeps its integration stable for large time steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stabilisation {
    /// Split each update into Euler substeps no longer than the critical
    /// time step. Updates longer than [`MAX_SUBSTEPS`] critical steps are
    /// truncated to that span.
    #[default]
    Substep,
    /// Take a single step with coefficients recomputed for the step length,
    /// clamping them when slow and pole-matching them when stiff.
    PoleMatching,
}

/// Integration constants derived from a validated [`FilterTuning`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    k1: f32,
    k2: f32,
    k3: f32,
    critical_step: f32,
    angular_frequency: f32,
    damping: f32,
    damped_frequency: f32,
}

impl Coefficients {
    /// Derives the constants for `tuning`.
    ///
    /// # Errors
    /// Propagates [`FilterTuning::validate`] failures.
    pub fn from_tuning(tuning: &FilterTuning) -> Result<Self, DynamicsError> {
        tuning.validate()?;
        let FilterTuning {
            frequency,
            damping,
            response,
        } = *tuning;

        let angular_frequency = TAU * frequency;
        let k1 = damping / (PI * frequency);
        let k2 = 1.0 / (angular_frequency * angular_frequency);
        let k3 = response * damping / angular_frequency;
        let critical_step = CRITICAL_STEP_SAFETY_FACTOR * ((4.0 * k2 + k1 * k1).sqrt() - k1);
        let damped_frequency = angular_frequency * (damping * damping - 1.0).abs().sqrt();

        Ok(Self {
            k1,
            k2,
            k3,
            critical_step,
            angular_frequency,
            damping,
            damped_frequency,
        })
    }

    /// Damping coefficient.
    #[must_use]
    pub const fn k1(&self) -> f32 {
        self.k1
    }

    /// Inertia coefficient; always positive.
    #[must_use]
    pub const fn k2(&self) -> f32 {
        self.k2
    }

    /// Feed-forward coefficient applied to the target velocity.
    #[must_use]
    pub const fn k3(&self) -> f32 {
        self.k3
    }

    /// Longest substep the Euler integrator accepts.
    #[must_use]
    pub const fn critical_step(&self) -> f32 {
        self.critical_step
    }

    /// Natural frequency in radians per second.
    #[must_use]
    pub const fn angular_frequency(&self) -> f32 {
        self.angular_frequency
    }

    /// Damped oscillation frequency in radians per second.
    #[must_use]
    pub const fn damped_frequency(&self) -> f32 {
        self.damped_frequency
    }

    /// Number of Euler substeps [`Stabilisation::Substep`] uses for a step
    /// of `delta_time` seconds, at most [`MAX_SUBSTEPS`].
    #[must_use]
    pub fn substeps(&self, delta_time: f32) -> u32 {
        ceil_to_steps(delta_time / self.critical_step).min(MAX_SUBSTEPS)
    }

    /// Seconds [`Stabilisation::Substep`] integrates for a step of
    /// `delta_time`.
    ///
    /// Steps longer than [`MAX_SUBSTEPS`] critical steps are truncated so
    /// that no substep exceeds [`Self::critical_step`].
    #[must_use]
    pub fn substep_span(&self, delta_time: f32) -> f32 {
        delta_time.min(steps_to_f32(MAX_SUBSTEPS) * self.critical_step)
    }

    /// Returns `(k1, k2)` adjusted for a single step of `delta_time`.
    pub(crate) fn stabilised(&self, delta_time: f32) -> (f32, f32) {
        if self.angular_frequency * delta_time < self.damping {
            return self.clamped(delta_time);
        }

        // Pole matching: reproduce the continuous poles exactly at this step.
        let rate = self.damping * self.angular_frequency * delta_time;
        let decay = (-rate).exp();
        let phase = delta_time * self.damped_frequency;
        // 1 + e^-2rate - 2 e^-rate cos(phase), with cosh when overdamped.
        let denominator = if self.damping <= 1.0 {
            let gap = -(-rate).exp_m1();
            let half_sine = (phase / 2.0).sin();
            gap * gap + 4.0 * decay * half_sine * half_sine
        } else {
            // Expanded so stiff steps cannot overflow.
            let alpha = (phase - rate).exp() + (-phase - rate).exp();
            1.0 + decay * decay - alpha
        };
        let scale = delta_time / denominator;
        let k2 = delta_time * scale;
        if denominator > 0.0 && k2.is_finite() {
            (-(-2.0 * rate).exp_m1() * scale, k2)
        } else {
            self.clamped(delta_time)
        }
    }

    fn clamped(&self, delta_time: f32) -> (f32, f32) {
        let k2 = self
            .k2
            .max(delta_time * delta_time / 2.0 + delta_time * self.k1 / 2.0)
            .max(delta_time * self.k1);
        (self.k1, k2)
    }
}
