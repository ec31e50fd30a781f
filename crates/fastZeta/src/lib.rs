//! # fastZeta: parallel Riemann-Siegel zero counting
//!
//! `fastZeta` estimates how many zeros of the Riemann zeta function lie on a
//! stretch of the critical line by counting sign changes of the
//! Riemann-Siegel Z-function on a dense regular grid.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use fastZeta::prelude::*;
//!
//! let result = ZeroCounter::new()
//!     .range(10.0, 1000.0)
//!     .sampling(100.0)
//!     .adapter(Parallel)
//!     .workers(4)
//!     .build()?
//!     .run()?;
//!
//! println!("I found {} Zeros in {:.3} seconds", result.sign_changes, result.elapsed_seconds);
//! # Ok::<(), ZetaError>(())
//! ```
//!
//! ## Layers
//!
//! * `primitives`: error type and sign predicate.
//! * `math`: theta phase, correction polynomials, lookup tables.
//! * `evaluation`: the Z(t) evaluator, sampling grid, validation tooling.
//! * `engine`: block partitioning, parallel scan and reduction.
//! * `adapters`: sequential and parallel runs.
//! * `api`: fluent builder.
//!
//! ## Features
//!
//! * `cpu` (default): rayon parallelism and ndarray inputs. Without it every
//!   scan runs on the calling thread with identical results.

#![allow(non_snake_case)]
#![deny(missing_docs)]

pub mod adapters;
pub mod api;
pub mod engine;
pub mod evaluation;
pub mod input;
pub mod math;
pub mod primitives;

/// Commonly used types.
pub mod prelude {
    pub use crate::api::{
        riemann_siegel_z, Adapter, BoundaryMode, Parallel, PhaseReduction, RiemannSiegel,
        RunResult, Sequential, ZeroCounter, ZetaBuilder,
    };
    pub use crate::evaluation::sampling::SamplingRange;
    pub use crate::evaluation::validation::{crosses_zero, zeta_critical_line, KNOWN_ZEROS};
    pub use crate::input::{count_sign_changes_in, ZetaInput};
    pub use crate::math::tables::LookupTables;
    pub use crate::math::theta::{estimate_zero_count, theta};
    pub use crate::primitives::errors::{ZetaError, ZetaResult};
}
