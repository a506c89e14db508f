//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the math kernels over caller-owned grids:
//! - Precondition validation for batch inputs (`Validator`)
//! - Scalar strategy dispatch and the masked batch evaluator (`executor`)
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Masked batch evaluation and strategy dispatch.
pub mod executor;

/// Input validation for batch shapes and strategy configuration.
pub mod validator;
