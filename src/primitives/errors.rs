//! Error types for Kimura integral evaluation.
//!
//! ## Purpose
//!
//! This module defines the single error enum used across the crate. Errors
//! only arise at construction and batch boundaries (grid building, shape
//! preconditions, strategy configuration); the scalar numeric kernels are
//! total functions and never fail.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Errors are returned eagerly, before any output cell is
//!   written, so a failed batch call never leaves a partially updated grid.
//! * **no_std**: `Display` is implemented by hand over `core::fmt`;
//!   `std::error::Error` is provided only when the `std` feature is enabled.
//!
//! ## Key concepts
//!
//! * **Shape preconditions**: The batch evaluator requires all four grids to
//!   share one shape. Violations are reported, not undefined behavior.
//!
//! ## Invariants
//!
//! * Every variant carries enough context to identify the offending input.
//!
//! ## Non-goals
//!
//! * This module does not model floating-point overflow/underflow as errors.
//!   Extreme parameters propagate `inf`/`0.0` per IEEE 754 semantics.

// External dependencies
use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors reported by grid construction and batch evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum KimuraError {
    /// A grid constructor was given zero rows or zero columns.
    EmptyGrid,

    /// A grid buffer length does not match the requested dimensions.
    DimensionMismatch {
        /// Requested number of rows.
        rows: usize,
        /// Requested number of columns.
        cols: usize,
        /// Actual length of the supplied buffer.
        len: usize,
    },

    /// A batch input grid does not share the shape of the selection grid.
    ShapeMismatch {
        /// Name of the offending grid (`"dominance"`, `"mask"`, or `"out"`).
        name: &'static str,
        /// Authoritative shape, taken from the selection grid.
        expected: (usize, usize),
        /// Shape of the offending grid.
        got: (usize, usize),
    },

    /// An `Auto` strategy crossover threshold is not finite and positive.
    InvalidThreshold(f64),
}

impl fmt::Display for KimuraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KimuraError::EmptyGrid => {
                write!(f, "Grid must have at least one row and one column")
            }
            KimuraError::DimensionMismatch { rows, cols, len } => {
                write!(
                    f,
                    "Dimension mismatch: {}x{} grid requires {} elements, got {}",
                    rows,
                    cols,
                    rows * cols,
                    len
                )
            }
            KimuraError::ShapeMismatch {
                name,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Shape mismatch: {} grid is {}x{}, expected {}x{}",
                    name, got.0, got.1, expected.0, expected.1
                )
            }
            KimuraError::InvalidThreshold(t) => {
                write!(
                    f,
                    "Invalid threshold: {} (must be > 0 and finite)",
                    t
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KimuraError {}
