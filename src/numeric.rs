//! Numeric conversion helpers used by the integrators.
//!
//! These utilities guard conversions between floating-point and integer
//! domains so call-sites stay free of raw casts.

/// Round a ratio up to a whole substep count.
///
/// Non-finite or non-positive ratios yield a single step; ratios beyond the
/// `u32` domain saturate.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "The ceiled value is validated against the u32 domain."
)]
#[must_use]
pub fn ceil_to_steps(ratio: f32) -> u32 {
    if !ratio.is_finite() || ratio <= 1.0 {
        return 1;
    }
    let ceiled = ratio.ceil();
    if ceiled >= u32::MAX as f32 {
        return u32::MAX;
    }
    ceiled as u32
}

/// Convert a substep count back into a float divisor.
#[expect(
    clippy::cast_precision_loss,
    reason = "Substep counts large enough to lose precision are already saturated."
)]
#[must_use]
pub fn steps_to_f32(steps: u32) -> f32 {
    steps as f32
}

/// Convert a sample index into a float multiplier.
#[expect(
    clippy::cast_precision_loss,
    reason = "Sample counts stay far below the f32 mantissa."
)]
#[must_use]
pub fn index_to_f32(index: usize) -> f32 {
    index as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::below_one(0.25, 1)]
    #[case::exactly_one(1.0, 1)]
    #[case::fraction_rounds_up(1.01, 2)]
    #[case::whole(3.0, 3)]
    #[case::nan(f32::NAN, 1)]
    #[case::negative(-4.0, 1)]
    #[case::infinite(f32::INFINITY, 1)]
    #[case::saturates(1e12, u32::MAX)]
    fn ceil_to_steps_cases(#[case] ratio: f32, #[case] expected: u32) {
        assert_eq!(ceil_to_steps(ratio), expected);
    }
}
