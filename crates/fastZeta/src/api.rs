//! High-level API for counting sign changes of Z(t).
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the sampling and evaluation parameters and a choice of
//! execution adapter (Sequential or Parallel).
//!
//! ## Design notes
//!
//! * **Ergonomic**: every parameter except the bounds has a default.
//! * **Polymorphic**: marker types move the builder to adapter-specific builders.
//! * **Validated**: parameters are checked when `.build()` is called on the adapter.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ZetaBuilder`] via `ZeroCounter::new()`.
//! 2. Chain configuration methods (`.range()`, `.sampling()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Parallel)`.
//! 4. Call `.build()?.run()?` to obtain a [`RunResult`].

// Internal dependencies
use crate::adapters::parallel::ParallelScanBuilder;
use crate::adapters::sequential::SequentialScanBuilder;
use crate::adapters::ScanSettings;
use crate::evaluation::evaluator::MAX_CORRECTION_ORDER;
use crate::evaluation::sampling::SamplingRange;
use crate::math::tables::LookupTables;
use crate::primitives::errors::{ZetaError, ZetaResult};

// Publicly re-exported types
pub use crate::engine::executor::BoundaryMode;
pub use crate::evaluation::evaluator::{PhaseReduction, RiemannSiegel};
pub use crate::evaluation::sampling::RunResult;

// ============================================================================
// Adapter Module
// ============================================================================

/// Adapter selection namespace.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Parallel, Sequential};
}

/// Conversion from the shared builder into an adapter-specific builder.
pub trait ZetaAdapter {
    /// Builder produced by this adapter.
    type Output;

    /// Wrap the shared configuration.
    fn convert(builder: ZetaBuilder) -> Self::Output;
}

/// Marker for the single-threaded reference scan.
#[derive(Debug, Clone, Copy)]
pub struct Sequential;

impl ZetaAdapter for Sequential {
    type Output = SequentialScanBuilder;

    fn convert(builder: ZetaBuilder) -> Self::Output {
        SequentialScanBuilder { base: builder }
    }
}

/// Marker for the multi-threaded block scan.
#[derive(Debug, Clone, Copy)]
pub struct Parallel;

impl ZetaAdapter for Parallel {
    type Output = ParallelScanBuilder;

    fn convert(builder: ZetaBuilder) -> Self::Output {
        // Determine parallel mode: user choice OR default to true
        let parallel = builder.parallel.unwrap_or(true);
        ParallelScanBuilder::from_base(builder, parallel)
    }
}

// ============================================================================
// Shared Builder
// ============================================================================

/// Entry point of the fluent API.
#[derive(Debug, Clone, Copy)]
pub struct ZeroCounter;

impl ZeroCounter {
    /// Start a new configuration.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> ZetaBuilder {
        ZetaBuilder::default()
    }
}

/// Parameters shared by every adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ZetaBuilder {
    /// Lower bound of the sampled interval.
    pub lower: Option<f64>,

    /// Upper bound of the sampled interval.
    pub upper: Option<f64>,

    /// Samples per unit interval.
    pub samp: f64,

    /// Truncation order of the correction series.
    pub order: usize,

    /// Main-sum phase treatment.
    pub phase_reduction: PhaseReduction,

    /// Requested parallel mode, resolved by the adapter.
    pub parallel: Option<bool>,
}

impl Default for ZetaBuilder {
    fn default() -> Self {
        Self {
            lower: None,
            upper: None,
            samp: 1.0,
            order: MAX_CORRECTION_ORDER,
            phase_reduction: PhaseReduction::None,
            parallel: None,
        }
    }
}

impl ZetaBuilder {
    /// Set the lower bound.
    pub fn lower(mut self, lower: f64) -> Self {
        self.lower = Some(lower);
        self
    }

    /// Set the upper bound.
    pub fn upper(mut self, upper: f64) -> Self {
        self.upper = Some(upper);
        self
    }

    /// Set both bounds.
    pub fn range(self, lower: f64, upper: f64) -> Self {
        self.lower(lower).upper(upper)
    }

    /// Set the number of samples per unit interval.
    pub fn sampling(mut self, samp: f64) -> Self {
        self.samp = samp;
        self
    }

    /// Set the truncation order of the correction series (0..=4).
    pub fn correction_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Set how the main-sum phase is reduced.
    pub fn phase_reduction(mut self, phase: PhaseReduction) -> Self {
        self.phase_reduction = phase;
        self
    }

    /// Request parallel or sequential execution.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Select an execution adapter.
    pub fn adapter<A: ZetaAdapter>(self, _adapter: A) -> A::Output {
        A::convert(self)
    }

    /// Validate the shared parameters.
    pub(crate) fn settings(&self) -> ZetaResult<ScanSettings> {
        let lower = self
            .lower
            .ok_or_else(|| ZetaError::invalid_input("LOWER bound is not set"))?;
        let upper = self
            .upper
            .ok_or_else(|| ZetaError::invalid_input("UPPER bound is not set"))?;

        if self.order > MAX_CORRECTION_ORDER {
            return Err(ZetaError::invalid_input(format!(
                "correction order must be at most {MAX_CORRECTION_ORDER}, got {}",
                self.order
            )));
        }

        Ok(ScanSettings {
            grid: SamplingRange::new(lower, upper, self.samp)?,
            order: self.order,
            phase_reduction: self.phase_reduction,
        })
    }
}

// ============================================================================
// One-shot Evaluation
// ============================================================================

/// Evaluate Z(t) once, building tables just large enough for `t`.
///
/// For repeated evaluations build [`LookupTables`] once and reuse a
/// [`RiemannSiegel`] evaluator instead.
pub fn riemann_siegel_z(t: f64) -> ZetaResult<f64> {
    let tables = LookupTables::for_upper(t)?;
    RiemannSiegel::new(&tables).evaluate(t)
}
