//! Layer 1: Primitives
//!
//! ## Purpose
//!
//! This layer holds the types shared by every other layer: the crate error
//! type and the sign predicate used by the scanners.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error type for all fallible operations.
pub mod errors;

/// Sign-bit comparison of consecutive samples.
pub mod sign;
