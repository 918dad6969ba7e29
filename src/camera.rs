//! Camera follow rig.
//!
//! The camera tracks a point ahead of its subject, extrapolated along the
//! subject's velocity and raised to a fixed height, and eases toward it with
//! a [`SecondOrderFilter`]. It only moves while the subject is grounded and
//! moving, so jumps and idling do not drag the view around.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::dynamics::{FilterTuning, SecondOrderFilter, Stabilisation};
use crate::error::DynamicsError;
use crate::{DEFAULT_ANTICIPATION, DEFAULT_TARGET_HEIGHT};

/// Tunables for a [`CameraFollow`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Seconds of subject travel to look ahead by.
    pub anticipation: f32,
    /// Height above the subject to track.
    pub target_height: f32,
    /// Tuning of the camera filter.
    pub filter: FilterTuning,
    /// Stability strategy of the camera filter.
    pub stabilisation: Stabilisation,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            anticipation: DEFAULT_ANTICIPATION,
            target_height: DEFAULT_TARGET_HEIGHT,
            filter: FilterTuning::new(1.0, 1.0, 0.0),
            stabilisation: Stabilisation::PoleMatching,
        }
    }
}

impl CameraConfig {
    /// Point the camera aims for given the subject's motion.
    #[must_use]
    pub fn look_at(&self, subject_position: Vec3, subject_velocity: Vec3) -> Vec3 {
        subject_position + subject_velocity * self.anticipation + Vec3::Y * self.target_height
    }
}

/// Smoothly follows a moving subject.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFollow {
    config: CameraConfig,
    filter: SecondOrderFilter,
}

impl CameraFollow {
    /// Places the camera above `subject_position`.
    ///
    /// # Errors
    /// Returns [`DynamicsError::InvalidParameter`] for an invalid filter
    /// tuning.
    pub fn new(config: CameraConfig, subject_position: Vec3) -> Result<Self, DynamicsError> {
        let start = subject_position + Vec3::Y * config.target_height;
        let filter = SecondOrderFilter::new(config.filter, config.stabilisation, start)?;
        Ok(Self { config, filter })
    }

    /// Advances the camera by `delta_time` seconds and returns its position.
    ///
    /// The camera holds still unless the subject is `grounded` and has a
    /// non-zero velocity.
    pub fn update(
        &mut self,
        delta_time: f32,
        subject_position: Vec3,
        subject_velocity: Vec3,
        grounded: bool,
    ) -> Vec3 {
        if !grounded || subject_velocity == Vec3::ZERO {
            return self.filter.position();
        }
        let look_at = self.config.look_at(subject_position, subject_velocity);
        self.filter.update(delta_time, look_at, Some(subject_velocity))
    }

    /// Current camera position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.filter.position()
    }

    /// Configuration in use.
    #[must_use]
    pub const fn config(&self) -> &CameraConfig {
        &self.config
    }
}
