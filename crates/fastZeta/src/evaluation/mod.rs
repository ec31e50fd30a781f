//! Layer 3: Evaluation
//!
//! ## Purpose
//!
//! This layer evaluates the Riemann-Siegel Z-function on the sampling grid
//! and checks it against published zeros.
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
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Single-point Z(t) evaluator.
pub mod evaluator;

/// Regular sampling grid and run output.
pub mod sampling;

/// Known zeros and a direct zeta sum for cross-checking.
pub mod validation;
