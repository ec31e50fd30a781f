//! Sequential adapter for the reference sign-change count.
//!
//! ## Purpose
//!
//! This module runs the whole grid on the calling thread. Its count compares
//! every adjacent pair of samples and is the baseline for parallel runs.
//!
//! ## Invariants
//!
//! * The count does not depend on any thread or pool configuration.

// Internal dependencies
use crate::adapters::{run_scan, ScanSettings};
use crate::api::ZetaBuilder;
use crate::engine::executor::scan_sequential;
use crate::evaluation::sampling::RunResult;
use crate::primitives::errors::ZetaResult;

/// Builder for the sequential scan.
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialScanBuilder {
    /// Shared configuration.
    pub base: ZetaBuilder,
}

impl SequentialScanBuilder {
    /// Validate the configuration.
    pub fn build(self) -> ZetaResult<SequentialScan> {
        Ok(SequentialScan {
            settings: self.base.settings()?,
        })
    }
}

/// Validated sequential scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SequentialScan {
    settings: ScanSettings,
}

impl SequentialScan {
    /// Validated settings of this scan.
    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// Count sign changes over the grid.
    pub fn run(&self) -> ZetaResult<RunResult> {
        run_scan(&self.settings, 1, scan_sequential)
    }
}
