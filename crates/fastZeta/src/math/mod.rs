//! Layer 2: Math
//!
//! ## Purpose
//!
//! This layer provides the numeric building blocks of the Riemann-Siegel
//! formula: the theta phase, the correction polynomials and the per-run
//! lookup tables for the main sum.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Riemann-Siegel theta function.
pub mod theta;

/// Correction-series polynomials C0..C4.
pub mod coefficients;

/// Precomputed 1/sqrt(k) and ln(k) tables (parallel build).
pub mod tables;
