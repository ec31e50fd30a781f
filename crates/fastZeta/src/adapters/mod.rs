//! Layer 5: Adapters
//!
//! ## Purpose
//!
//! This layer turns a validated configuration into a complete run: it sizes
//! and builds the lookup tables, constructs the evaluator, times the scan and
//! packages the [`RunResult`].
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters ← You are here
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-threaded reference scan.
pub mod sequential;

/// Multi-threaded block scan.
pub mod parallel;

// External dependencies
use std::time::Instant;
use tracing::{info, info_span};

// Internal dependencies
use crate::evaluation::evaluator::{PhaseReduction, RiemannSiegel};
use crate::evaluation::sampling::{RunResult, SamplingRange};
use crate::math::tables::LookupTables;
use crate::math::theta::estimate_zero_count;
use crate::primitives::errors::ZetaResult;

/// Validated parameters shared by every adapter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanSettings {
    /// Sampling grid.
    pub grid: SamplingRange,
    /// Truncation order of the correction series.
    pub order: usize,
    /// Main-sum phase treatment.
    pub phase_reduction: PhaseReduction,
}

/// Build tables, run `scan` over the grid and time it.
pub(crate) fn run_scan<F>(settings: &ScanSettings, workers: usize, scan: F) -> ZetaResult<RunResult>
where
    F: FnOnce(&RiemannSiegel<'_>, &SamplingRange) -> ZetaResult<u64>,
{
    let grid = &settings.grid;
    let _span = info_span!(
        "scan",
        lower = grid.lower(),
        upper = grid.upper(),
        samples = grid.len(),
        workers
    )
    .entered();

    let estimated_zero_count = estimate_zero_count(grid.upper());
    let started = Instant::now();

    let tables = LookupTables::for_upper(grid.t_max().max(grid.upper()))?;
    let evaluator = RiemannSiegel::new(&tables)
        .with_order(settings.order)?
        .with_phase_reduction(settings.phase_reduction);

    let sign_changes = scan(&evaluator, grid)?;
    let elapsed_seconds = started.elapsed().as_secs_f64();

    info!(sign_changes, elapsed_seconds, "scan finished");

    Ok(RunResult {
        estimated_zero_count,
        sign_changes,
        elapsed_seconds,
        samples: grid.len(),
        workers,
    })
}
