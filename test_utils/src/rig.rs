//! A four-legged rig used by the gait tests.

use glam::Vec3;
use strider::{FilterTuning, GaitConfig, GaitController, LimbInput};

/// Height of each leg root above its foot.
pub const ROOT_HEIGHT: f32 = 0.3;

/// Feet at the corners of a square centred on the origin.
pub fn square_feet() -> [Vec3; 4] {
    [
        Vec3::new(-0.3, 0.0, -0.3),
        Vec3::new(0.3, 0.0, -0.3),
        Vec3::new(-0.3, 0.0, 0.3),
        Vec3::new(0.3, 0.0, 0.3),
    ]
}

/// Gait configuration with a stiff, non-overshooting limb filter so step
/// trajectories track their waypoints closely.
pub fn stiff_config() -> GaitConfig {
    GaitConfig {
        filter: FilterTuning::new(8.0, 1.0, 0.0),
        ..GaitConfig::default()
    }
}

/// Build a controller over [`square_feet`].
///
/// # Panics
/// Panics if the configuration is rejected.
pub fn quadruped(config: GaitConfig) -> GaitController {
    GaitController::new(config, &square_feet())
        .unwrap_or_else(|e| panic!("invalid gait config: {e}"))
}

/// Inputs whose targets sit `offset` away from each square foot, with leg
/// roots directly above the targets.
pub fn inputs_with_offset(offset: Vec3) -> Vec<LimbInput> {
    square_feet()
        .iter()
        .map(|&foot| {
            let target = foot + offset;
            LimbInput::new(target, target + Vec3::Y * ROOT_HEIGHT)
        })
        .collect()
}
