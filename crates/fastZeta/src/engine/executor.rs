//! Parallel sign-change scanner.
//!
//! ## Purpose
//!
//! This module counts sign changes of Z(t) over a sampling grid. The index
//! range is cut into one contiguous block per worker; every block is scanned
//! independently on a rayon pool and the partial counts are summed.
//!
//! ## Design notes
//!
//! * **Explicit stages**: [`partition`], [`scan_block`] and [`reduce_counts`]
//!   are plain functions, so each stage can be tested without threads.
//! * **Dedicated pool**: the scan runs on a pool with exactly `workers`
//!   threads, independent of rayon's global pool.
//! * **Join barrier**: partial counts are only combined after every block has
//!   finished; the remainder block is scanned after the join.
//!
//! ## Key concepts
//!
//! * **Block**: `⌊n / workers⌋` consecutive sample indices owned by one worker.
//! * **Remainder**: the top `n mod workers` indices, scanned last and seeded
//!   from the final sample of the last block.
//! * **Seed**: the sample a block compares its first index against.
//!
//! ## Invariants
//!
//! * Blocks and remainder are disjoint and cover `[0, n)` in order.
//! * In [`BoundaryMode::Stitched`] every adjacent pair is compared exactly once.
//! * In [`BoundaryMode::Isolated`] the `workers − 1` pairs that straddle block
//!   boundaries are skipped, so the count is at most `workers − 1` below the
//!   single-worker count.
//!
//! ## Non-goals
//!
//! * This module does not build the lookup tables (see `math::tables`).

// Feature-gated imports
#[cfg(feature = "cpu")]
use rayon::prelude::*;

// External dependencies
use std::ops::Range;
use tracing::debug;

// Internal dependencies
use crate::evaluation::evaluator::RiemannSiegel;
use crate::evaluation::sampling::SamplingRange;
use crate::primitives::errors::{ZetaError, ZetaResult};
use crate::primitives::sign::sign_changed;

/// How a block initializes its sign state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryMode {
    /// Seed each block with its own first sample. Pairs that straddle a block
    /// boundary are never compared.
    #[default]
    Isolated,

    /// Seed each block with the last sample of the previous block.
    Stitched,
}

// ============================================================================
// Partitioning
// ============================================================================

/// Split of a sample index range across workers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    /// One equal-sized block per worker, in index order.
    pub blocks: Vec<Range<usize>>,
    /// Leftover indices at the top of the range.
    pub remainder: Range<usize>,
}

/// Cut `[0, n_samples)` into `workers` equal blocks plus a remainder.
pub fn partition(n_samples: usize, workers: usize) -> ZetaResult<Partition> {
    if workers == 0 {
        return Err(ZetaError::invalid_input("worker count must be at least 1"));
    }

    let block_len = n_samples / workers;
    let blocks = (0..workers)
        .map(|w| w * block_len..(w + 1) * block_len)
        .collect();
    let remainder = workers * block_len..n_samples;

    Ok(Partition { blocks, remainder })
}

// ============================================================================
// Block Scan
// ============================================================================

/// Count sign changes inside `block`, comparing its first sample to `seed`.
///
/// `seed` must not exceed `block.start`; passing `block.start` itself means
/// the first sample only initializes the sign state.
pub fn scan_block(
    evaluator: &RiemannSiegel<'_>,
    grid: &SamplingRange,
    block: Range<usize>,
    seed: usize,
) -> ZetaResult<u64> {
    if block.is_empty() {
        return Ok(0);
    }

    let mut previous = evaluator.evaluate(grid.t(seed))?;
    let start = if seed == block.start {
        block.start + 1
    } else {
        block.start
    };

    let mut count = 0u64;
    for i in start..block.end {
        let current = evaluator.evaluate(grid.t(i))?;
        count += u64::from(sign_changed(previous, current));
        previous = current;
    }

    Ok(count)
}

/// Sum partial counts from all blocks.
pub fn reduce_counts<I>(partials: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    partials.into_iter().sum()
}

fn block_seed(block: &Range<usize>, mode: BoundaryMode) -> usize {
    match mode {
        BoundaryMode::Isolated => block.start,
        BoundaryMode::Stitched => block.start.saturating_sub(1),
    }
}

fn remainder_seed(partition: &Partition) -> usize {
    partition.remainder.start.saturating_sub(1)
}

// ============================================================================
// Scanners
// ============================================================================

/// Count sign changes over the whole grid on the calling thread.
///
/// This is the reference count every parallel scan is measured against.
pub fn scan_sequential(evaluator: &RiemannSiegel<'_>, grid: &SamplingRange) -> ZetaResult<u64> {
    scan_block(evaluator, grid, 0..grid.len(), 0)
}

/// Count sign changes with `workers` threads.
#[cfg(feature = "cpu")]
pub fn scan_parallel(
    evaluator: &RiemannSiegel<'_>,
    grid: &SamplingRange,
    workers: usize,
    mode: BoundaryMode,
) -> ZetaResult<u64> {
    let partition = partition(grid.len(), workers)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| ZetaError::ThreadPool(e.to_string()))?;

    let partials: Vec<u64> = pool.install(|| {
        partition
            .blocks
            .par_iter()
            .map(|block| scan_block(evaluator, grid, block.clone(), block_seed(block, mode)))
            .collect::<ZetaResult<Vec<u64>>>()
    })?;

    let tail = scan_block(
        evaluator,
        grid,
        partition.remainder.clone(),
        remainder_seed(&partition),
    )?;

    debug!(workers, ?partials, remainder = tail, "scan blocks joined");
    Ok(reduce_counts(partials) + tail)
}

/// Sequential fallback with the same partitioning when `cpu` is disabled.
#[cfg(not(feature = "cpu"))]
pub fn scan_parallel(
    evaluator: &RiemannSiegel<'_>,
    grid: &SamplingRange,
    workers: usize,
    mode: BoundaryMode,
) -> ZetaResult<u64> {
    let partition = partition(grid.len(), workers)?;

    let partials = partition
        .blocks
        .iter()
        .map(|block| scan_block(evaluator, grid, block.clone(), block_seed(block, mode)))
        .collect::<ZetaResult<Vec<u64>>>()?;

    let tail = scan_block(
        evaluator,
        grid,
        partition.remainder.clone(),
        remainder_seed(&partition),
    )?;

    debug!(workers, ?partials, remainder = tail, "scan blocks joined");
    Ok(reduce_counts(partials) + tail)
}
