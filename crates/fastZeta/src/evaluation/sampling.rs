//! Regular sampling grid over the critical line.
//!
//! ## Purpose
//!
//! This module turns the user bounds `LOWER`, `UPPER` and the sampling
//! density `SAMP` into an immutable grid `t_i = lower + i / samp`, and defines
//! the output of a scan.
//!
//! ## Design notes
//!
//! * **Index-based**: sample points are computed from their index rather than
//!   by accumulating the step, so every worker derives the same `t_i`.
//! * **Inclusive cover**: the grid holds `⌊(upper − lower)·samp + 1⌋` points,
//!   which is every grid point in `[lower, upper]`.
//!
//! ## Invariants
//!
//! * `0 <= lower <= upper`, `samp >= 1`, all finite.
//! * `len() >= 1`.

use crate::primitives::errors::{ZetaError, ZetaResult};

/// Immutable sampling grid over `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingRange {
    lower: f64,
    upper: f64,
    samp: f64,
    step: f64,
    n_samples: usize,
}

impl SamplingRange {
    /// Validate the bounds and build the grid.
    pub fn new(lower: f64, upper: f64, samp: f64) -> ZetaResult<Self> {
        if !lower.is_finite() || !upper.is_finite() || !samp.is_finite() {
            return Err(ZetaError::invalid_input(
                "LOWER, UPPER and SAMP must be finite numbers",
            ));
        }
        if lower < 0.0 || upper < 0.0 {
            return Err(ZetaError::invalid_input(
                "LOWER and UPPER must be positive",
            ));
        }
        if lower > upper {
            return Err(ZetaError::invalid_input("LOWER must be lower than UPPER"));
        }
        if samp < 1.0 {
            return Err(ZetaError::invalid_input(
                "SAMP must be superior or equal to 1.0",
            ));
        }

        let n_samples = ((upper - lower) * samp + 1.0).floor();
        if n_samples >= usize::MAX as f64 {
            return Err(ZetaError::invalid_input(format!(
                "sampling grid of {n_samples} points does not fit in memory indices"
            )));
        }

        Ok(Self {
            lower,
            upper,
            samp,
            step: 1.0 / samp,
            n_samples: n_samples as usize,
        })
    }

    /// Lower bound of the grid.
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Upper bound requested by the caller.
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Samples per unit interval.
    pub fn samp(&self) -> f64 {
        self.samp
    }

    /// Distance between consecutive samples.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.n_samples
    }

    /// Always false; a validated grid holds at least `lower`.
    pub fn is_empty(&self) -> bool {
        self.n_samples == 0
    }

    /// Ordinate of sample `i`.
    #[inline(always)]
    pub fn t(&self, i: usize) -> f64 {
        self.lower + self.step * i as f64
    }

    /// Largest ordinate on the grid.
    pub fn t_max(&self) -> f64 {
        self.t(self.n_samples.saturating_sub(1))
    }
}

/// Output of one counting run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunResult {
    /// A priori estimate θ(upper)/π.
    pub estimated_zero_count: f64,

    /// Sign changes detected on the grid.
    pub sign_changes: u64,

    /// Wall-clock time of table build plus scan.
    pub elapsed_seconds: f64,

    /// Number of grid points scanned.
    pub samples: usize,

    /// Worker count used by the scan.
    pub workers: usize,
}
