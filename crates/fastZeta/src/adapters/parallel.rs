//! Parallel adapter for multi-threaded sign-change counting.
//!
//! ## Purpose
//!
//! This module runs the block scanner on a dedicated pool of `workers`
//! threads and exposes the boundary policy between blocks.
//!
//! ## Design notes
//!
//! * **Defaults**: one worker per available CPU and the inherited
//!   [`BoundaryMode::Isolated`] policy.
//! * **Fallback**: `.parallel(false)` runs the sequential reference scan.
//!
//! ## Invariants
//!
//! * `workers >= 1`.
//! * With `Isolated` boundaries the count is within `workers − 1` below the
//!   sequential count; with `Stitched` boundaries it is equal.

// External dependencies
use std::num::NonZeroUsize;
use std::thread;

// Internal dependencies
use crate::adapters::{run_scan, ScanSettings};
use crate::api::ZetaBuilder;
use crate::engine::executor::{scan_parallel, scan_sequential, BoundaryMode};
use crate::evaluation::sampling::RunResult;
use crate::primitives::errors::{ZetaError, ZetaResult};

/// Builder for the parallel scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelScanBuilder {
    /// Shared configuration.
    pub base: ZetaBuilder,

    /// Requested worker count; `None` uses the available parallelism.
    pub workers: Option<usize>,

    /// Sign seeding policy at block boundaries.
    pub boundary_mode: BoundaryMode,
}

impl ParallelScanBuilder {
    pub(crate) fn from_base(mut base: ZetaBuilder, parallel: bool) -> Self {
        base.parallel = Some(parallel);
        Self {
            base,
            workers: None,
            boundary_mode: BoundaryMode::default(),
        }
    }

    /// Set parallel execution mode.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.base.parallel = Some(parallel);
        self
    }

    /// Set the number of worker threads.
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the sign seeding policy at block boundaries.
    pub fn boundary_mode(mut self, mode: BoundaryMode) -> Self {
        self.boundary_mode = mode;
        self
    }

    /// Validate the configuration.
    pub fn build(self) -> ZetaResult<ParallelScan> {
        let settings = self.base.settings()?;
        let parallel = self.base.parallel.unwrap_or(true);

        let workers = match self.workers {
            Some(0) => {
                return Err(ZetaError::invalid_input("worker count must be at least 1"));
            }
            Some(w) => w,
            None => thread::available_parallelism().map_or(1, NonZeroUsize::get),
        };

        Ok(ParallelScan {
            settings,
            workers: if parallel { workers } else { 1 },
            parallel,
            boundary_mode: self.boundary_mode,
        })
    }
}

/// Validated parallel scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallelScan {
    settings: ScanSettings,
    workers: usize,
    parallel: bool,
    boundary_mode: BoundaryMode,
}

impl ParallelScan {
    /// Validated settings of this scan.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Worker count the scan will use.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Count sign changes over the grid.
    pub fn run(&self) -> ZetaResult<RunResult> {
        if !self.parallel {
            return run_scan(&self.settings, 1, scan_sequential);
        }

        let (workers, mode) = (self.workers, self.boundary_mode);
        run_scan(&self.settings, workers, |evaluator, grid| {
            scan_parallel(evaluator, grid, workers, mode)
        })
    }
}
