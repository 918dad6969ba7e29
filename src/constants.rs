//! Tuning defaults and numeric constants shared across the rig.
//!
//! Values mirror the inspector defaults of the prototype the rig was built
//! for, so a fresh controller behaves the same before any tuning file is
//! loaded.

/// Safety margin applied to the critical time step of the substep
/// integrator.
///
/// This is a tuned value rather than a derived bound: the integrator is
/// stable right up to `sqrt(4 k2 + k1^2) - k1`, and the factor keeps each
/// substep comfortably inside that region.
pub const CRITICAL_STEP_SAFETY_FACTOR: f32 = 0.8;

/// Most Euler substeps a single update may take.
///
/// Longer updates integrate only `MAX_SUBSTEPS` critical steps, so one call
/// stays cheap and every substep stays stable.
pub const MAX_SUBSTEPS: u32 = 10_000;

/// Fixed simulation tick used by the harness and as the default step for
/// sampled responses (50 Hz).
pub const FIXED_DELTA_TIME: f32 = 1.0 / 50.0;

/// Fraction of [`FIXED_DELTA_TIME`] used per sample when plotting a step
/// response.
pub const RESPONSE_TIME_SCALE: f32 = 0.1;

/// Number of samples taken when plotting a step response.
pub const RESPONSE_SAMPLES: usize = 48;

/// Recommended upper bound for the natural frequency, in Hz.
pub const MAX_RECOMMENDED_FREQUENCY: f32 = 15.0;
/// Recommended upper bound for the damping ratio.
pub const MAX_RECOMMENDED_DAMPING: f32 = 5.0;
/// Recommended magnitude bound for the initial response gain.
pub const MAX_RECOMMENDED_RESPONSE: f32 = 5.0;

/// Default natural frequency for limb filters.
pub const DEFAULT_FREQUENCY: f32 = 1.0;
/// Default damping ratio for limb filters.
pub const DEFAULT_DAMPING: f32 = 0.5;
/// Default initial response for limb filters.
pub const DEFAULT_RESPONSE: f32 = 2.0;

/// Distance a foot may drift from its target before a step is taken.
pub const DEFAULT_STEP_DISTANCE: f32 = 0.1;
/// Peak height of a step above the straight-line trajectory.
pub const DEFAULT_STEP_HEIGHT: f32 = 0.1;
/// Duration of a single step, in seconds.
pub const DEFAULT_STEP_DURATION: f32 = 0.5;
/// Leg stretch below which the foot is re-placed.
pub const DEFAULT_MIN_LEG_STRETCH: f32 = 0.1;
/// Leg stretch above which the foot is re-placed.
pub const DEFAULT_MAX_LEG_STRETCH: f32 = 0.5;
/// Number of feet that must remain planted while others lift.
pub const DEFAULT_MIN_GROUNDED: usize = 2;

/// How far ahead of the subject the camera looks, in seconds of travel.
pub const DEFAULT_ANTICIPATION: f32 = 1.0;
/// Height above the subject the camera tracks.
pub const DEFAULT_TARGET_HEIGHT: f32 = 1.0;
