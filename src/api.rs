//! High-level API for Kimura integral evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: free functions
//! mirroring the scalar and batch kernels, and a small fluent builder
//! (`Kimura`) for configuring an evaluator with a non-default strategy.
//!
//! ## Design notes
//!
//! * **Ergonomic**: The free functions cover the common case with zero
//!   configuration; the builder exists for strategy selection.
//! * **Validated**: Strategy parameters are checked when `.build()` is
//!   called; batch shapes are checked on every batch call.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`KimuraBuilder`] via `Kimura::new()`.
//! 2. Optionally chain `.strategy(...)`.
//! 3. Call `.build()` to obtain a [`KimuraEvaluator`].

// Internal dependencies
use crate::engine::executor;

// Publicly re-exported types
pub use crate::engine::executor::EvalStrategy;
pub use crate::engine::validator::Validator;
pub use crate::math::integrand::integrand;
pub use crate::math::quadrature::quadrature_integral;
pub use crate::math::series::series_denominator;
pub use crate::primitives::errors::KimuraError;
pub use crate::primitives::grid::Grid;

// ============================================================================
// Free Functions
// ============================================================================

/// Evaluate the Kimura integral over a masked 2D grid, in place.
///
/// For every cell with a nonzero mask entry, writes the quadrature integral
/// of the corresponding `(c, d)` pair into `out`; masked-off cells keep their
/// prior contents. `out` is the caller's buffer, mutated in place.
///
/// # Errors
///
/// Returns [`KimuraError::ShapeMismatch`] if the four grids do not share one
/// shape; no cell is written in that case.
///
/// # Example
///
/// ```
/// use kimura_rs::prelude::*;
///
/// let c = Grid::filled(2, 2, 0.0)?;
/// let d = Grid::filled(2, 2, 0.0)?;
/// let mask = Grid::filled(2, 2, 1)?;
/// let mut out = Grid::filled(2, 2, 0.0)?;
///
/// batch_masked_integral(&c, &d, &mask, &mut out)?;
/// assert!((out[(0, 0)] - 1.0).abs() < 1e-12);
/// # Result::<(), KimuraError>::Ok(())
/// ```
pub fn batch_masked_integral(
    c: &Grid<f64>,
    d: &Grid<f64>,
    mask: &Grid<i32>,
    out: &mut Grid<f64>,
) -> Result<(), KimuraError> {
    executor::evaluate_masked_into(EvalStrategy::Quadrature, c, d, mask, out)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`KimuraEvaluator`].
///
/// Re-exported from the prelude as `Kimura`, so the entry point reads
/// `Kimura::new()`.
#[derive(Debug, Clone, Default)]
pub struct KimuraBuilder {
    /// Scalar kernel selection (default: `Quadrature`).
    pub strategy: Option<EvalStrategy>,
}

impl KimuraBuilder {
    /// Start configuring an evaluator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the scalar evaluation strategy.
    pub fn strategy(mut self, strategy: EvalStrategy) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Validate the configuration and build the evaluator.
    ///
    /// # Errors
    ///
    /// Returns [`KimuraError::InvalidThreshold`] if an `Auto` strategy
    /// carries a threshold that is not finite and positive.
    pub fn build(self) -> Result<KimuraEvaluator, KimuraError> {
        let strategy = self.strategy.unwrap_or_default();
        Validator::validate_strategy(&strategy)?;
        Ok(KimuraEvaluator { strategy })
    }
}

/// A configured, reusable evaluator for the Kimura integral.
///
/// Pure and stateless between calls; a single evaluator may be shared across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct KimuraEvaluator {
    strategy: EvalStrategy,
}

impl KimuraEvaluator {
    /// The strategy this evaluator dispatches to.
    #[inline]
    pub fn strategy(&self) -> EvalStrategy {
        self.strategy
    }

    /// Evaluate the integral for one `(c, d)` pair.
    #[inline]
    pub fn integral(&self, c: f64, d: f64) -> f64 {
        self.strategy.evaluate(c, d)
    }

    /// Evaluate the integral over a masked 2D grid, in place.
    ///
    /// # Errors
    ///
    /// Returns [`KimuraError::ShapeMismatch`] if the four grids do not share
    /// one shape.
    pub fn batch_masked(
        &self,
        c: &Grid<f64>,
        d: &Grid<f64>,
        mask: &Grid<i32>,
        out: &mut Grid<f64>,
    ) -> Result<(), KimuraError> {
        executor::evaluate_masked_into(self.strategy, c, d, mask, out)
    }
}
