//! Layer 4: Engine
//!
//! ## Purpose
//!
//! This layer provides the parallel execution engine that drives many Z(t)
//! evaluations across a sampling grid and reduces their sign changes into a
//! single count.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Adapters
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Block partitioning, block scans and count reduction.
pub mod executor;
