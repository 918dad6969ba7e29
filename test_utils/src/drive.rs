//! Helpers that drive a filter through a scripted input.

use glam::Vec3;
use strider::{FilterTuning, SecondOrderFilter, Stabilisation};

/// Build a filter at the origin, panicking on an invalid tuning.
///
/// # Panics
/// Panics if the tuning is rejected.
///
/// # Examples
/// ```
/// use test_utils::drive::filter_at_origin;
/// use strider::Stabilisation;
/// let filter = filter_at_origin(1.0, 1.0, 0.0, Stabilisation::Substep);
/// assert_eq!(filter.position(), glam::Vec3::ZERO);
/// ```
pub fn filter_at_origin(
    frequency: f32,
    damping: f32,
    response: f32,
    stabilisation: Stabilisation,
) -> SecondOrderFilter {
    let tuning = FilterTuning::new(frequency, damping, response);
    SecondOrderFilter::new(tuning, stabilisation, Vec3::ZERO)
        .unwrap_or_else(|e| panic!("invalid tuning {tuning:?}: {e}"))
}

/// Hold `target` for `ticks` updates of `delta_time`, estimating velocity,
/// and return the x component of every output.
///
/// # Examples
/// ```
/// use glam::Vec3;
/// use test_utils::drive::{filter_at_origin, hold_target};
/// use strider::Stabilisation;
/// let mut filter = filter_at_origin(1.0, 1.0, 0.0, Stabilisation::Substep);
/// let trace = hold_target(&mut filter, 1.0 / 60.0, Vec3::X, 3);
/// assert_eq!(trace.len(), 3);
/// ```
pub fn hold_target(
    filter: &mut SecondOrderFilter,
    delta_time: f32,
    target: Vec3,
    ticks: usize,
) -> Vec<f32> {
    (0..ticks)
        .map(|_| filter.update(delta_time, target, None).x)
        .collect()
}

/// Apply a unit step to a fresh filter and return the x trace.
pub fn step_trace(
    frequency: f32,
    damping: f32,
    response: f32,
    stabilisation: Stabilisation,
    delta_time: f32,
    ticks: usize,
) -> Vec<f32> {
    let mut filter = filter_at_origin(frequency, damping, response, stabilisation);
    hold_target(&mut filter, delta_time, Vec3::X, ticks)
}

/// Largest absolute difference between two traces of equal length.
///
/// # Panics
/// Panics if the traces differ in length.
pub fn max_divergence(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "traces differ in length");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}
