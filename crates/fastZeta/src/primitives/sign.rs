//! Sign-bit comparison of consecutive Z samples.
//!
//! A sign change is detected on the IEEE sign bit, so `-0.0` and `+0.0` count
//! as different signs and NaN carries whatever sign bit it was produced with.

use num_traits::Float;

/// Whether two consecutive samples lie on opposite sides of zero.
#[inline(always)]
pub fn sign_changed<T: Float>(previous: T, current: T) -> bool {
    previous.is_sign_negative() != current.is_sign_negative()
}

/// Count sign changes between adjacent entries of a sample sequence.
pub fn count_sign_changes<T: Float>(values: &[T]) -> u64 {
    values
        .windows(2)
        .filter(|pair| sign_changed(pair[0], pair[1]))
        .count() as u64
}
