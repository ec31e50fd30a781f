//! Riemann-Siegel theta function.
//!
//! ## Purpose
//!
//! This module computes the phase θ(t) from its asymptotic expansion
//!
//! ```text
//! θ(t) = t/2·ln(t/2π) − t/2 − π/8 + 1/(48t) + 7/(5760t³)
//!      + 31/(80640t⁵) + 127/(430080t⁷) + 511/(1216512t⁹)
//! ```
//!
//! ## Design notes
//!
//! * **No pow calls**: odd powers of `t` are built by repeated multiplication
//!   of `t²`, which keeps results reproducible across targets.
//! * **Precision contract**: the series diverges for small `t`. Nothing is
//!   checked here; callers are expected to stay in the regime `t ≳ 10`.
//!
//! ## Invariants
//!
//! * `t > 0`. Zero and negative inputs yield NaN or infinities.

use std::f64::consts::PI;

/// Asymptotic Riemann-Siegel phase θ(t).
#[inline]
pub fn theta(t: f64) -> f64 {
    let half_t = t * 0.5;
    let t2 = t * t;
    let t3 = t2 * t;
    let t5 = t3 * t2;
    let t7 = t5 * t2;
    let t9 = t7 * t2;

    half_t * (half_t / PI).ln() - half_t - PI * 0.125
        + 1.0 / (48.0 * t)
        + 7.0 / (5760.0 * t3)
        + 31.0 / (80640.0 * t5)
        + 127.0 / (430080.0 * t7)
        + 511.0 / (1216512.0 * t9)
}

/// A priori number of zeros with ordinate below `t`, θ(t)/π.
///
/// This is the estimate reported before a scan starts.
pub fn estimate_zero_count(t: f64) -> f64 {
    theta(t) / PI
}
