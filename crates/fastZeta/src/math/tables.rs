//! Lookup tables for the Riemann-Siegel main sum.
//!
//! ## Purpose
//!
//! This module precomputes `1/sqrt(k)` and `ln(k)` for every `k` the main sum
//! can reach in a run, so that the hot loop only performs one multiply, one
//! fused subtraction and one cosine per term.
//!
//! ## Design notes
//!
//! * **Ownership**: tables are an owned value built once per run and borrowed
//!   read-only by every evaluator. There is no global state.
//! * **Parallel build**: with the `cpu` feature the fill runs on rayon; each
//!   index is independent, so the result is identical to the sequential fill.
//! * **Poisoned slot**: index 0 is never read by the main sum and holds NaN.
//!
//! ## Key concepts
//!
//! * **Table size**: a table of size `M` serves every `t` whose main-sum
//!   length `⌊sqrt(t / 2π)⌋` is below `M`.
//!
//! ## Invariants
//!
//! * `inv_sqrt.len() == log_int.len() == size`.
//! * Tables are never resized after `build`.
//!
//! ## Non-goals
//!
//! * This module does not evaluate the main sum itself (see `evaluation::evaluator`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use std::f64::consts::PI;
use tracing::debug;

// Internal dependencies
use crate::primitives::errors::{ZetaError, ZetaResult};

/// Largest table [`LookupTables::for_upper`] will allocate (4 GiB across both
/// tables). Serves every `t` up to about 4.5e17.
pub const MAX_TABLE_SIZE: usize = 1 << 28;

/// Below this size the parallel fill costs more than it saves.
#[cfg(feature = "cpu")]
const PARALLEL_BUILD_THRESHOLD: usize = 1 << 14;

// ============================================================================
// Sizing
// ============================================================================

/// Main-sum length `N = ⌊sqrt(t / 2π)⌋` at `t`.
#[inline(always)]
pub fn main_sum_length(t: f64) -> usize {
    (t / (2.0 * PI)).sqrt() as usize
}

/// Smallest table size that can serve an evaluation at `t`.
///
/// `None` when the size does not fit in `usize`.
pub fn required_size(t: f64) -> Option<usize> {
    main_sum_length(t).checked_add(1)
}

/// Table size used for a run whose samples never exceed `upper`.
///
/// Always at least [`required_size`]`(upper)`; `None` when it does not fit
/// in `usize`.
pub fn size_for_upper(upper: f64) -> Option<usize> {
    ((upper / (2.0 * PI)).sqrt().ceil() as usize).checked_add(1)
}

// ============================================================================
// Lookup Tables
// ============================================================================

/// Precomputed `1/sqrt(k)` and `ln(k)` for `k ∈ [1, size)`.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTables {
    inv_sqrt: Vec<f64>,
    log_int: Vec<f64>,
}

impl LookupTables {
    /// Build tables of the given size.
    pub fn build(size: usize) -> Self {
        let mut inv_sqrt = vec![f64::NAN; size];
        let mut log_int = vec![f64::NAN; size];

        fill(&mut inv_sqrt, &mut log_int);

        debug!(size, "built lookup tables");
        Self { inv_sqrt, log_int }
    }

    /// Build tables large enough for every sample up to `upper`.
    pub fn for_upper(upper: f64) -> ZetaResult<Self> {
        if !upper.is_finite() || upper < 0.0 {
            return Err(ZetaError::invalid_input(format!(
                "table bound must be finite and non-negative, got {upper}"
            )));
        }
        let size = size_for_upper(upper)
            .filter(|&size| size <= MAX_TABLE_SIZE)
            .ok_or_else(|| {
                ZetaError::invalid_input(format!(
                    "UPPER = {upper} needs lookup tables above {MAX_TABLE_SIZE} entries"
                ))
            })?;
        Self::try_build(size)
    }

    /// Build tables of the given size, reporting allocation failure.
    pub fn try_build(size: usize) -> ZetaResult<Self> {
        let mut inv_sqrt = Vec::new();
        let mut log_int = Vec::new();
        inv_sqrt
            .try_reserve_exact(size)
            .and_then(|()| log_int.try_reserve_exact(size))
            .map_err(|e| {
                ZetaError::invalid_input(format!("cannot allocate {size} table entries: {e}"))
            })?;
        inv_sqrt.resize(size, f64::NAN);
        log_int.resize(size, f64::NAN);

        fill(&mut inv_sqrt, &mut log_int);

        debug!(size, "built lookup tables");
        Ok(Self { inv_sqrt, log_int })
    }

    /// Number of slots, including the unused slot 0.
    pub fn len(&self) -> usize {
        self.inv_sqrt.len()
    }

    /// Whether the tables hold no slots at all.
    pub fn is_empty(&self) -> bool {
        self.inv_sqrt.is_empty()
    }

    /// Check that an evaluation at `t` stays inside the tables.
    #[inline(always)]
    pub fn ensure_covers(&self, t: f64) -> ZetaResult<()> {
        let required = required_size(t).unwrap_or(usize::MAX);
        if required > self.len() {
            return Err(ZetaError::TableTooSmall {
                required,
                available: self.len(),
            });
        }
        Ok(())
    }

    /// `1/sqrt(k)` for `k ∈ [1, n]`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= len()`. Callers check coverage first.
    #[inline(always)]
    pub fn inv_sqrt(&self, n: usize) -> &[f64] {
        &self.inv_sqrt[1..=n]
    }

    /// `ln(k)` for `k ∈ [1, n]`.
    ///
    /// # Panics
    ///
    /// Panics if `n >= len()`. Callers check coverage first.
    #[inline(always)]
    pub fn log_int(&self, n: usize) -> &[f64] {
        &self.log_int[1..=n]
    }
}

#[cfg(feature = "cpu")]
fn fill(inv_sqrt: &mut [f64], log_int: &mut [f64]) {
    if inv_sqrt.len() < PARALLEL_BUILD_THRESHOLD {
        fill_sequential(inv_sqrt, log_int);
        return;
    }

    inv_sqrt
        .par_iter_mut()
        .zip(log_int.par_iter_mut())
        .enumerate()
        .skip(1)
        .for_each(|(k, (r, l))| {
            let k = k as f64;
            *r = 1.0 / k.sqrt();
            *l = k.ln();
        });
}

#[cfg(not(feature = "cpu"))]
fn fill(inv_sqrt: &mut [f64], log_int: &mut [f64]) {
    fill_sequential(inv_sqrt, log_int);
}

fn fill_sequential(inv_sqrt: &mut [f64], log_int: &mut [f64]) {
    for (k, (r, l)) in inv_sqrt.iter_mut().zip(log_int.iter_mut()).enumerate().skip(1) {
        let k = k as f64;
        *r = 1.0 / k.sqrt();
        *l = k.ln();
    }
}
