//! Step-response sampling for tuning previews.
//!
//! A fresh filter starts at the origin and tracks a target that jumps to
//! `1.0` on the x axis. The resulting curve is what tuning tools plot to show
//! how a frequency/damping/response triple behaves.

use glam::Vec3;
use serde::Serialize;

use crate::dynamics::{FilterTuning, SecondOrderFilter, Stabilisation};
use crate::error::DynamicsError;
use crate::numeric::index_to_f32;
use crate::{FIXED_DELTA_TIME, RESPONSE_SAMPLES, RESPONSE_TIME_SCALE};

/// One point of a sampled step response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResponseSample {
    /// Seconds since the step was applied.
    pub time: f32,
    /// Filter output along the step axis.
    pub value: f32,
}

/// A sampled step response and its summary metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepResponse {
    tuning: FilterTuning,
    stabilisation: Stabilisation,
    delta_time: f32,
    samples: Vec<ResponseSample>,
}

impl StepResponse {
    /// Samples with the defaults used by tuning previews.
    ///
    /// # Errors
    /// Returns [`DynamicsError::InvalidParameter`] for an invalid tuning.
    pub fn preview(
        tuning: FilterTuning,
        stabilisation: Stabilisation,
    ) -> Result<Self, DynamicsError> {
        sample_step_response(
            tuning,
            stabilisation,
            FIXED_DELTA_TIME * RESPONSE_TIME_SCALE,
            RESPONSE_SAMPLES,
        )
    }

    /// Sampled points in time order.
    #[must_use]
    pub fn samples(&self) -> &[ResponseSample] {
        &self.samples
    }

    /// Tuning that produced the curve.
    #[must_use]
    pub const fn tuning(&self) -> &FilterTuning {
        &self.tuning
    }

    /// Step length between samples, in seconds.
    #[must_use]
    pub const fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Highest value reached, or `0.0` for an empty curve.
    #[must_use]
    pub fn peak(&self) -> f32 {
        self.samples
            .iter()
            .map(|sample| sample.value)
            .fold(0.0, f32::max)
    }

    /// How far the curve rises above the target. Never negative.
    #[must_use]
    pub fn overshoot(&self) -> f32 {
        (self.peak() - 1.0).max(0.0)
    }

    /// Lowest value reached. Negative values indicate anticipation.
    #[must_use]
    pub fn trough(&self) -> f32 {
        self.samples
            .iter()
            .map(|sample| sample.value)
            .fold(0.0, f32::min)
    }

    /// Last sampled value.
    #[must_use]
    pub fn final_value(&self) -> Option<f32> {
        self.samples.last().map(|sample| sample.value)
    }

    /// Whether the curve never decreases by more than `tolerance` between
    /// consecutive samples.
    #[must_use]
    pub fn is_monotonic(&self, tolerance: f32) -> bool {
        self.samples
            .windows(2)
            .all(|pair| match pair {
                [earlier, later] => later.value + tolerance >= earlier.value,
                _ => true,
            })
    }

    /// First time after which the curve stays within `band` of the target,
    /// or `None` if the final sample is still outside the band.
    #[must_use]
    pub fn settling_time(&self, band: f32) -> Option<f32> {
        let outside = |sample: &&ResponseSample| (sample.value - 1.0).abs() > band;
        match self.samples.iter().rev().find(outside) {
            None => self.samples.first().map(|sample| sample.time),
            Some(last_outside) => self
                .samples
                .iter()
                .find(|sample| sample.time > last_outside.time)
                .map(|sample| sample.time),
        }
    }
}

/// Drives a fresh filter with a unit step for `samples` ticks.
///
/// The target's velocity is estimated, exactly as an owner that only knows
/// positions would drive the filter.
///
/// # Errors
/// Returns [`DynamicsError::InvalidParameter`] for an invalid tuning and
/// [`DynamicsError::DegenerateStep`] for a non-positive `delta_time`.
///
/// # Examples
///
/// ```
/// use strider::{sample_step_response, FilterTuning, Stabilisation};
///
/// let response = sample_step_response(
///     FilterTuning::new(1.0, 0.3, 0.0),
///     Stabilisation::Substep,
///     1.0 / 60.0,
///     300,
/// )?;
/// assert!(response.overshoot() > 0.0);
/// # Ok::<(), strider::DynamicsError>(())
/// ```
pub fn sample_step_response(
    tuning: FilterTuning,
    stabilisation: Stabilisation,
    delta_time: f32,
    samples: usize,
) -> Result<StepResponse, DynamicsError> {
    let mut filter = SecondOrderFilter::new(tuning, stabilisation, Vec3::ZERO)?;
    let mut points = Vec::with_capacity(samples);
    for index in 0..samples {
        let value = filter.try_update(delta_time, Vec3::X, None)?.x;
        points.push(ResponseSample {
            time: index_to_f32(index + 1) * delta_time,
            value,
        });
    }
    Ok(StepResponse {
        tuning,
        stabilisation,
        delta_time,
        samples: points,
    })
}
