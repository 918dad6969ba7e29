//! Behaviour-driven tests for multi-leg stepping using rust-rspec.
//!
//! A four-legged rig is asked to move its ground targets and the scenarios
//! check which legs lift, how steps land and where the body ends up.

#[path = "support/rspec_runner.rs"]
mod rspec_runner;

use glam::Vec3;
use rspec::block::Context as Scenario;
use rspec_runner::run_serial;
use strider::{GaitController, LimbInput, StepPhase};
use test_utils::rig::{inputs_with_offset, quadruped, square_feet, stiff_config};

const TICK: f32 = 0.02;

/// Fixture wrapping a quadruped and the inputs it is fed each tick.
#[derive(Debug, Clone)]
struct GaitWorld {
    controller: GaitController,
    inputs: Vec<LimbInput>,
    peak_lift: f32,
}

impl Default for GaitWorld {
    fn default() -> Self {
        Self {
            controller: quadruped(stiff_config()),
            inputs: inputs_with_offset(Vec3::ZERO),
            peak_lift: 0.0,
        }
    }
}

impl GaitWorld {
    fn retarget(&mut self, offset: Vec3) {
        self.inputs = inputs_with_offset(offset);
    }

    fn run(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.controller
                .tick(TICK, &self.inputs)
                .unwrap_or_else(|e| panic!("tick failed: {e}"));
            let lift = self
                .controller
                .limbs()
                .iter()
                .map(|limb| limb.foot().y)
                .fold(self.peak_lift, f32::max);
            self.peak_lift = lift;
        }
    }

    fn assert_all_planted_at(&self, offset: Vec3) {
        for (limb, foot) in self.controller.limbs().iter().zip(square_feet()) {
            assert_eq!(limb.phase(), StepPhase::Grounded);
            assert!(
                limb.foot().distance(foot + offset) < 1e-6,
                "foot {} not at {}",
                limb.foot(),
                foot + offset
            );
        }
        assert!(self.controller.body().distance(offset) < 1e-5);
    }
}

#[test]
fn quadruped_walks_to_new_targets() {
    run_serial(&rspec::given(
        "a planted quadruped",
        GaitWorld::default(),
        |ctx: &mut Scenario<GaitWorld>| {
            ctx.when("the targets stay under the feet", |ctx| {
                ctx.before_each(|world| world.run(10));
                ctx.then("no leg lifts and the body stays centred", |world| {
                    world.assert_all_planted_at(Vec3::ZERO);
                });
            });

            ctx.when("the targets move half a unit forward", |ctx| {
                ctx.before_each(|world| {
                    world.retarget(Vec3::new(0.5, 0.0, 0.0));
                    world.run(1);
                });

                ctx.then("only two legs lift at once", |world| {
                    assert_eq!(world.controller.grounded_count(), 2);
                    let stepping: Vec<bool> = world
                        .controller
                        .limbs()
                        .iter()
                        .map(|limb| limb.is_stepping())
                        .collect();
                    assert_eq!(stepping, vec![true, true, false, false]);
                });

                ctx.when("the first pair finishes its step", |ctx| {
                    ctx.before_each(|world| world.run(25));
                    ctx.then("the first pair lands and the second lifts", |world| {
                        let stepping: Vec<bool> = world
                            .controller
                            .limbs()
                            .iter()
                            .map(|limb| limb.is_stepping())
                            .collect();
                        assert_eq!(stepping, vec![false, false, true, true]);
                        assert!(world.peak_lift > 0.05, "peak lift {}", world.peak_lift);
                    });
                });

                ctx.when("both pairs have stepped", |ctx| {
                    ctx.before_each(|world| world.run(60));
                    ctx.then("every foot is planted on its target", |world| {
                        world.assert_all_planted_at(Vec3::new(0.5, 0.0, 0.0));
                    });
                });
            });
        },
    ));
}
