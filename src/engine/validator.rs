//! Input validation for batch evaluation and strategy configuration.
//!
//! ## Purpose
//!
//! This module provides the precondition checks that run before any output
//! cell is written. The scalar kernels are total functions and need no
//! validation; everything that can go wrong lives at the batch boundary
//! (grid shapes) and at configuration time (strategy thresholds).
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation.
//! * **Authoritative shape**: The selection grid's shape is the reference;
//!   every other grid is compared against it and named in the error.
//! * **Upgrade over the original**: The reference implementation performed no
//!   shape check and treated mismatches as undefined behavior; here they are
//!   a reported precondition failure.
//!
//! ## Invariants
//!
//! * A successful `validate_batch_shapes` guarantees all four grids share one
//!   shape, so the executor may index them uniformly.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not check element values; NaN/Inf parameters are
//!   accepted and propagate through the arithmetic.
//! * This module does not perform the evaluation itself.

// Internal dependencies
use crate::engine::executor::EvalStrategy;
use crate::primitives::errors::KimuraError;
use crate::primitives::grid::Grid;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for batch inputs and evaluator configuration.
///
/// Provides static methods returning `Result<(), KimuraError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that all four batch grids share the selection grid's shape.
    ///
    /// The selection grid `c` is authoritative; the first grid that differs
    /// is reported by name.
    pub fn validate_batch_shapes(
        c: &Grid<f64>,
        d: &Grid<f64>,
        mask: &Grid<i32>,
        out: &Grid<f64>,
    ) -> Result<(), KimuraError> {
        let expected = c.shape();

        if d.shape() != expected {
            return Err(KimuraError::ShapeMismatch {
                name: "dominance",
                expected,
                got: d.shape(),
            });
        }
        if mask.shape() != expected {
            return Err(KimuraError::ShapeMismatch {
                name: "mask",
                expected,
                got: mask.shape(),
            });
        }
        if out.shape() != expected {
            return Err(KimuraError::ShapeMismatch {
                name: "out",
                expected,
                got: out.shape(),
            });
        }

        Ok(())
    }

    /// Validate an evaluation strategy.
    ///
    /// `Quadrature` and `Series` are always valid; `Auto` requires a finite,
    /// strictly positive crossover threshold.
    pub fn validate_strategy(strategy: &EvalStrategy) -> Result<(), KimuraError> {
        match *strategy {
            EvalStrategy::Quadrature | EvalStrategy::Series => Ok(()),
            EvalStrategy::Auto { threshold } => {
                if !threshold.is_finite() || threshold <= 0.0 {
                    return Err(KimuraError::InvalidThreshold(threshold));
                }
                Ok(())
            }
        }
    }
}
