//! Riemann-Siegel Z(t) evaluator.
//!
//! ## Purpose
//!
//! This module evaluates the Riemann-Siegel Z-function at a single point on
//! the critical line, combining the theta phase, the main trigonometric sum
//! over the lookup tables and the correction series.
//!
//! ## Design notes
//!
//! * **Borrowed tables**: an evaluator holds a shared reference to the run's
//!   [`LookupTables`] and is `Copy`, so every worker can own one.
//! * **Checked access**: the only failure mode, a table that is too short for
//!   `t`, is reported as [`ZetaError::TableTooSmall`] before the sum starts.
//! * **Sequential accumulation**: the main sum is a plain loop in increasing
//!   `j`; its rounding is fixed by that order.
//!
//! ## Key concepts
//!
//! ```text
//! N = ⌊sqrt(t/2π)⌋,  p = sqrt(t/2π) − N,  z = 2p − 1,  g = 2π/t
//! Z(t) = 2 Σ_{j=1..N} cos(θ(t) − t·ln j)/sqrt(j)
//!      + (−1)^(N−1) · g^(1/4) · Σ_{k=0..order} C_k(z) · g^(k/2)
//! ```
//!
//! ## Invariants
//!
//! * `t > 0`. Non-positive `t` produces NaN or infinities, not an error.
//! * `order <= 4`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate zeta off the critical line.

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use std::f64::consts::PI;

// Internal dependencies
use crate::input::ZetaInput;
use crate::math::coefficients::{correction_terms, CORRECTION_TERMS};
use crate::math::tables::{main_sum_length, LookupTables};
use crate::math::theta::theta;
use crate::primitives::errors::{ZetaError, ZetaResult};

/// Highest supported truncation order of the correction series.
pub const MAX_CORRECTION_ORDER: usize = CORRECTION_TERMS - 1;

const TWO_PI: f64 = 2.0 * PI;

/// Treatment of the main-sum phase `θ(t) − t·ln j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseReduction {
    /// Pass the raw phase to `cos`.
    #[default]
    None,

    /// Reduce the phase with `% 2π` before `cos`.
    Modulo,
}

// ============================================================================
// Evaluator
// ============================================================================

/// Z(t) evaluator over a borrowed set of lookup tables.
#[derive(Debug, Clone, Copy)]
pub struct RiemannSiegel<'a> {
    tables: &'a LookupTables,
    order: usize,
    phase: PhaseReduction,
}

impl<'a> RiemannSiegel<'a> {
    /// Create an evaluator with the full correction series (order 4).
    pub fn new(tables: &'a LookupTables) -> Self {
        Self {
            tables,
            order: MAX_CORRECTION_ORDER,
            phase: PhaseReduction::None,
        }
    }

    /// Set the truncation order of the correction series.
    pub fn with_order(mut self, order: usize) -> ZetaResult<Self> {
        if order > MAX_CORRECTION_ORDER {
            return Err(ZetaError::invalid_input(format!(
                "correction order must be at most {MAX_CORRECTION_ORDER}, got {order}"
            )));
        }
        self.order = order;
        Ok(self)
    }

    /// Set how the main-sum phase is reduced.
    pub fn with_phase_reduction(mut self, phase: PhaseReduction) -> Self {
        self.phase = phase;
        self
    }

    /// Tables this evaluator reads from.
    pub fn tables(&self) -> &'a LookupTables {
        self.tables
    }

    /// Truncation order of the correction series.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Phase reduction mode.
    pub fn phase_reduction(&self) -> PhaseReduction {
        self.phase
    }

    /// Evaluate Z(t).
    #[inline]
    pub fn evaluate(&self, t: f64) -> ZetaResult<f64> {
        self.tables.ensure_covers(t)?;

        let scaled = (t / TWO_PI).sqrt();
        let n = main_sum_length(t);
        let p = scaled - n as f64;

        let main = self.main_sum(t, n);
        let remainder = self.remainder(t, n, p);

        Ok(2.0 * main + remainder)
    }

    /// Evaluate Z at every point of `ts`, preserving order.
    pub fn evaluate_many<I>(&self, ts: &I) -> ZetaResult<Vec<f64>>
    where
        I: ZetaInput + ?Sized,
    {
        let ts = ts.as_zeta_slice()?;

        #[cfg(feature = "cpu")]
        let values = ts.par_iter().map(|&t| self.evaluate(t)).collect();
        #[cfg(not(feature = "cpu"))]
        let values = ts.iter().map(|&t| self.evaluate(t)).collect();

        values
    }

    #[inline(always)]
    fn main_sum(&self, t: f64, n: usize) -> f64 {
        let th = theta(t);
        let inv_sqrt = self.tables.inv_sqrt(n);
        let log_int = self.tables.log_int(n);

        let mut sum = 0.0;
        match self.phase {
            PhaseReduction::None => {
                for (&r, &l) in inv_sqrt.iter().zip(log_int) {
                    sum += r * (th - t * l).cos();
                }
            }
            PhaseReduction::Modulo => {
                for (&r, &l) in inv_sqrt.iter().zip(log_int) {
                    sum += r * ((th - t * l) % TWO_PI).cos();
                }
            }
        }
        sum
    }

    #[inline(always)]
    fn remainder(&self, t: f64, n: usize, p: f64) -> f64 {
        let g = TWO_PI / t;
        let g_half = g.sqrt();
        let scales = [1.0, g_half, g, g * g_half, g * g];

        let c = correction_terms(2.0 * p - 1.0);
        let series: f64 = c
            .iter()
            .zip(scales.iter())
            .take(self.order + 1)
            .map(|(&ck, &s)| ck * s)
            .sum();

        // (−1)^(N−1)
        let sign = if n % 2 == 1 { 1.0 } else { -1.0 };

        sign * g_half.sqrt() * series
    }
}
