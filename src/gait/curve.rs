//! Normalised easing curves for step trajectories.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

/// Shape of a step trajectory component over normalised progress.
///
/// Every curve maps progress in `[0, 1]` to a weight; progress outside that
/// range is clamped first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepCurve {
    /// Weight equals progress.
    Linear,
    /// Hermite ease-in/ease-out, `3t^2 - 2t^3`.
    SmoothStep,
    /// Half sine: rises from `0` to `1` at mid-step and back to `0`.
    Arc,
}

impl StepCurve {
    /// Evaluates the curve at `progress`.
    ///
    /// # Examples
    /// ```
    /// use strider::StepCurve;
    ///
    /// assert_eq!(StepCurve::Linear.evaluate(0.25), 0.25);
    /// assert_eq!(StepCurve::SmoothStep.evaluate(2.0), 1.0);
    /// assert!((StepCurve::Arc.evaluate(0.5) - 1.0).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn evaluate(self, progress: f32) -> f32 {
        let t = progress.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::Arc => (PI * t).sin(),
        }
    }
}
