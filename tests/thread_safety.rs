//! Compile-time and runtime checks that independent rigs can be driven from
//! separate threads.

use std::thread;

use glam::Vec3;
use static_assertions::assert_impl_all;
use strider::{CameraFollow, GaitController, SecondOrderFilter, Stabilisation};
use test_utils::drive::{filter_at_origin, hold_target};

assert_impl_all!(SecondOrderFilter: Send, Sync, Clone);
assert_impl_all!(GaitController: Send, Sync, Clone);
assert_impl_all!(CameraFollow: Send, Sync, Clone);

#[test]
fn filters_on_separate_threads_match_serial_run() {
    let serial: Vec<Vec<f32>> = (1..=4_u8)
        .map(|i| {
            let mut filter = filter_at_origin(f32::from(i), 0.5, 1.0, Stabilisation::Substep);
            hold_target(&mut filter, 1.0 / 60.0, Vec3::X, 120)
        })
        .collect();

    let handles: Vec<_> = (1..=4_u8)
        .map(|i| {
            thread::spawn(move || {
                let mut filter =
                    filter_at_origin(f32::from(i), 0.5, 1.0, Stabilisation::Substep);
                hold_target(&mut filter, 1.0 / 60.0, Vec3::X, 120)
            })
        })
        .collect();
    let parallel: Vec<Vec<f32>> = handles
        .into_iter()
        .map(|handle| handle.join().expect("filter thread panicked"))
        .collect();

    assert_eq!(serial, parallel);
}
