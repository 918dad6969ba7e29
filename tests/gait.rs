//! Unit-style tests for the gait controller's lift policy and edge cases.

use glam::Vec3;
use rstest::rstest;
use strider::{
    DynamicsError, GaitConfig, GaitController, GaitError, LimbInput, Parameter, StepPhase,
};
use test_utils::rig::{inputs_with_offset, quadruped, square_feet, stiff_config, ROOT_HEIGHT};

const TICK: f32 = 0.02;

#[test]
fn empty_rig_is_rejected() {
    let err = GaitController::new(GaitConfig::default(), &[]).expect_err("no limbs");
    assert_eq!(err, GaitError::NoLimbs);
}

#[rstest]
#[case::zero_duration(GaitConfig { step_duration: 0.0, ..GaitConfig::default() }, Parameter::StepDuration)]
#[case::negative_distance(GaitConfig { step_distance: -1.0, ..GaitConfig::default() }, Parameter::StepDistance)]
#[case::nan_height(GaitConfig { step_height: f32::NAN, ..GaitConfig::default() }, Parameter::StepHeight)]
#[case::infinite_height(GaitConfig { step_height: f32::INFINITY, ..GaitConfig::default() }, Parameter::StepHeight)]
#[case::inverted_stretch(
    GaitConfig { min_leg_stretch: 0.6, max_leg_stretch: 0.5, ..GaitConfig::default() },
    Parameter::LegStretch
)]
fn invalid_config_is_rejected(#[case] config: GaitConfig, #[case] expected: Parameter) {
    let err = GaitController::new(config, &square_feet()).expect_err("invalid config");
    match err {
        GaitError::Dynamics(DynamicsError::InvalidParameter { parameter, .. }) => {
            assert_eq!(parameter, expected);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[rstest]
#[case::negative_min(GaitConfig { min_leg_stretch: -0.1, ..GaitConfig::default() }, -0.1)]
#[case::nan_min(GaitConfig { min_leg_stretch: f32::NAN, ..GaitConfig::default() }, f32::NAN)]
#[case::inverted_max(GaitConfig { min_leg_stretch: 0.6, max_leg_stretch: 0.5, ..GaitConfig::default() }, 0.5)]
fn leg_stretch_error_reports_offending_bound(#[case] config: GaitConfig, #[case] expected: f32) {
    match config.validate() {
        Err(DynamicsError::InvalidParameter {
            parameter: Parameter::LegStretch,
            value,
        }) => assert_eq!(value.to_bits(), expected.to_bits()),
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn input_count_must_match_limbs() {
    let mut controller = quadruped(stiff_config());
    let inputs = inputs_with_offset(Vec3::ZERO);
    let err = controller
        .tick(TICK, inputs.get(..3).expect("four inputs"))
        .expect_err("missing input");
    assert_eq!(
        err,
        GaitError::LimbCountMismatch {
            expected: 4,
            actual: 3
        }
    );
}

#[rstest]
#[case::zero(0.0)]
#[case::negative(-0.02)]
#[case::nan(f32::NAN)]
fn degenerate_tick_changes_nothing(#[case] delta_time: f32) {
    let mut controller = quadruped(stiff_config());
    let before = controller.clone();
    let body = controller
        .tick(delta_time, &inputs_with_offset(Vec3::new(1.0, 0.0, 0.0)))
        .expect("matching inputs");
    assert_eq!(body, before.body());
    assert_eq!(controller, before);
}

#[rstest]
#[case::two_must_stay(2, 2)]
#[case::one_must_stay(1, 3)]
#[case::all_must_stay(4, 0)]
fn lift_policy_keeps_enough_feet_planted(#[case] min_grounded: usize, #[case] lifted: usize) {
    let mut controller = quadruped(GaitConfig {
        min_grounded,
        ..stiff_config()
    });
    let inputs = inputs_with_offset(Vec3::new(0.5, 0.0, 0.0));
    for _ in 0..80 {
        controller.tick(TICK, &inputs).expect("matching inputs");
        assert!(controller.grounded_count() >= min_grounded);
    }
    let mut fresh = quadruped(GaitConfig {
        min_grounded,
        ..stiff_config()
    });
    fresh.tick(TICK, &inputs).expect("matching inputs");
    assert_eq!(4 - fresh.grounded_count(), lifted);
}

#[test]
fn overstretched_leg_steps_even_when_target_is_close() {
    let mut controller = quadruped(stiff_config());
    let mut inputs = inputs_with_offset(Vec3::ZERO);
    if let Some(first) = inputs.first_mut() {
        // Root pulled far above the foot; the target itself has not moved.
        *first = LimbInput::new(first.target, first.target + Vec3::Y * 2.0);
    }
    controller.tick(TICK, &inputs).expect("matching inputs");
    let phases: Vec<bool> = controller.limbs().iter().map(|limb| limb.is_stepping()).collect();
    assert_eq!(phases, vec![true, false, false, false]);
}

#[test]
fn compressed_leg_steps() {
    let mut controller = quadruped(stiff_config());
    let mut inputs = inputs_with_offset(Vec3::ZERO);
    if let Some(first) = inputs.first_mut() {
        *first = LimbInput::new(first.target, first.target + Vec3::Y * 0.05);
    }
    controller.tick(TICK, &inputs).expect("matching inputs");
    assert!(controller.limbs().first().is_some_and(|limb| limb.is_stepping()));
}

#[test]
fn step_in_flight_is_not_restarted() {
    let mut controller = quadruped(stiff_config());
    let first_target = Vec3::new(0.5, 0.0, 0.0);
    controller
        .tick(TICK, &inputs_with_offset(first_target))
        .expect("matching inputs");
    for _ in 0..5 {
        controller
            .tick(TICK, &inputs_with_offset(Vec3::new(-0.5, 0.0, 0.0)))
            .expect("matching inputs");
    }
    let Some(limb) = controller.limbs().first() else {
        panic!("quadruped has limbs");
    };
    let [origin, ..] = square_feet();
    match limb.phase() {
        StepPhase::Stepping { target, start, .. } => {
            assert!(target.distance(origin + first_target) < 1e-6);
            assert_eq!(start, origin);
        }
        StepPhase::Grounded => panic!("limb should still be stepping"),
    }
}

#[test]
fn pinned_feet_return_to_their_plant() {
    let mut controller = quadruped(stiff_config());
    let inputs = inputs_with_offset(Vec3::new(0.05, 0.0, 0.0));
    controller.tick(TICK, &inputs).expect("matching inputs");
    for (limb, foot) in controller.limbs().iter().zip(square_feet()) {
        assert_eq!(limb.phase(), StepPhase::Grounded);
        assert_eq!(limb.foot(), foot);
        assert_eq!(limb.planted(), foot);
    }
    assert!(ROOT_HEIGHT > GaitConfig::default().min_leg_stretch);
}
