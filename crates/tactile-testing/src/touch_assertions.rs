//! Assertion helpers for derived touch data.

use tactile_foundation::{CurrentSample, GestureState};
use tactile_ui_graphics::Point;

/// Tolerance used when comparing against reference double values.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Assert that a value is within `tolerance` of the expected one.
#[track_caller]
pub fn assert_approx_eq(actual: f64, expected: f64, tolerance: f64, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that a point is approximately equal to another.
#[track_caller]
pub fn assert_point_approx_eq(actual: Point, expected: Point, tolerance: f64, msg: &str) {
    assert_approx_eq(actual.x, expected.x, tolerance, &format!("{} - x", msg));
    assert_approx_eq(actual.y, expected.y, tolerance, &format!("{} - y", msg));
}

/// Returns the derived sample, failing the test if the state was never stepped.
#[track_caller]
pub fn expect_current<E>(state: &GestureState<E>) -> CurrentSample {
    match state.current {
        Some(current) => current,
        None => panic!("gesture state has no current sample; step it first"),
    }
}

/// Assert that every derived value is a finite number.
#[track_caller]
pub fn assert_all_finite(current: &CurrentSample, msg: &str) {
    let fields = [
        ("x", current.x),
        ("y", current.y),
        ("delta_x", current.delta_x),
        ("delta_y", current.delta_y),
        ("distance", current.distance),
        ("distance_x", current.distance_x),
        ("distance_y", current.distance_y),
        ("angle", current.angle),
        ("velocity_x", current.velocity_x),
        ("velocity_y", current.velocity_y),
        ("velocity", current.velocity),
        ("overall_velocity_x", current.overall_velocity_x),
        ("overall_velocity_y", current.overall_velocity_y),
        ("overall_velocity", current.overall_velocity),
    ];
    for (name, value) in fields {
        assert!(value.is_finite(), "{}: {} is not finite ({})", msg, name, value);
    }
}
