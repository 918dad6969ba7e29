//! Error types raised by the filter, the gait driver and the config loader.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Names the tunable rejected by an [`DynamicsError::InvalidParameter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    /// Natural frequency in Hz.
    Frequency,
    /// Damping ratio.
    Damping,
    /// Initial response gain.
    Response,
    /// Duration of a single limb step.
    StepDuration,
    /// Distance that triggers a step.
    StepDistance,
    /// Peak lift of a limb step.
    StepHeight,
    /// Leg stretch bounds.
    LegStretch,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Frequency => "frequency",
            Self::Damping => "damping",
            Self::Response => "response",
            Self::StepDuration => "step duration",
            Self::StepDistance => "step distance",
            Self::StepHeight => "step height",
            Self::LegStretch => "leg stretch",
        };
        f.write_str(name)
    }
}

/// Faults raised by [`crate::SecondOrderFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DynamicsError {
    /// A tuning value would make the filter ill-defined.
    #[error("invalid {parameter}: {value}")]
    InvalidParameter {
        /// The rejected tunable.
        parameter: Parameter,
        /// The value supplied by the caller.
        value: f32,
    },
    /// The caller asked to advance by a non-positive or non-finite step.
    #[error("degenerate time step: {delta_time}")]
    DegenerateStep {
        /// The rejected delta time, in seconds.
        delta_time: f32,
    },
}

impl DynamicsError {
    /// Shorthand for [`DynamicsError::InvalidParameter`].
    #[must_use]
    pub const fn invalid(parameter: Parameter, value: f32) -> Self {
        Self::InvalidParameter { parameter, value }
    }
}

/// Faults raised by [`crate::GaitController`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GaitError {
    /// A limb filter or the gait configuration was rejected.
    #[error(transparent)]
    Dynamics(#[from] DynamicsError),
    /// A controller needs at least one limb.
    #[error("gait controller requires at least one limb")]
    NoLimbs,
    /// The tick supplied a different number of inputs than there are limbs.
    #[error("expected {expected} limb inputs, got {actual}")]
    LimbCountMismatch {
        /// Number of limbs owned by the controller.
        expected: usize,
        /// Number of inputs supplied.
        actual: usize,
    },
}

/// Faults raised while loading a [`crate::RigConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// The contents were not valid rig JSON.
    #[error("failed to parse rig config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The contents parsed but describe an unusable rig.
    #[error("invalid rig config: {0}")]
    Invalid(#[from] GaitError),
}

impl From<DynamicsError> for ConfigError {
    fn from(err: DynamicsError) -> Self {
        Self::Invalid(GaitError::Dynamics(err))
    }
}
