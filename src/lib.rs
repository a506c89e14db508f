//! # kimura-rs — Kimura Diffusion Integral Evaluation for Rust
//!
//! A small, allocation-conscious numeric library that evaluates the Kimura
//! integral arising in diffusion approximations of allele-frequency dynamics
//! in population genetics:
//!
//! ```text
//! I(c, d) = ∫₀¹ exp(-2·c·x·(1 + d·(1 - x))) dx
//! ```
//!
//! where `c` is the scaled selection coefficient and `d` the dominance
//! coefficient. The integral has no closed form for general parameters, so
//! this crate evaluates it by a fixed 101-point Gauss-Legendre rule, or — in
//! the small-|c| regime — by a 7-term truncated power series.
//!
//! ## What this crate provides
//!
//! * **Scalar quadrature**: [`prelude::quadrature_integral`] evaluates one
//!   `(c, d)` pair against compiled-in constant tables. Fixed order, no
//!   adaptivity, no per-call allocation, thread-safe.
//! * **Series approximation**: [`prelude::series_denominator`] is an
//!   independent small-|c| expansion, accurate to O(c⁷).
//! * **Masked batch evaluation**: [`prelude::batch_masked_integral`] applies
//!   the quadrature over same-shape 2D grids of parameters, skipping cells
//!   whose mask entry is zero and writing in place into a caller-owned
//!   output grid.
//! * **Strategy dispatch**: the [`prelude::Kimura`] builder configures an
//!   evaluator that can switch between quadrature and series on |c|.
//!
//! ## Quick Start
//!
//! ### Scalar evaluation
//!
//! ```rust
//! use kimura_rs::prelude::*;
//!
//! // Neutral case: the integrand is identically 1.
//! let neutral = quadrature_integral(0.0, 0.0);
//! assert!((neutral - 1.0).abs() < 1e-12);
//!
//! // Genic selection (d = 0) has the closed form (1 - e^(-2c)) / (2c).
//! let genic = quadrature_integral(1.0, 0.0);
//! assert!((genic - (1.0 - (-2.0f64).exp()) / 2.0).abs() < 1e-12);
//! ```
//!
//! ### Batch evaluation over a masked grid
//!
//! ```rust
//! use kimura_rs::prelude::*;
//!
//! let c = Grid::from_vec(2, 2, vec![0.0, 0.5, 1.0, 2.0])?;
//! let d = Grid::filled(2, 2, 1.0)?;
//! let mask = Grid::from_vec(2, 2, vec![1, 1, 0, 1])?;
//! let mut out = Grid::filled(2, 2, -1.0)?;
//!
//! batch_masked_integral(&c, &d, &mask, &mut out)?;
//!
//! // Masked-off cells keep their prior contents.
//! assert_eq!(out[(1, 0)], -1.0);
//! assert_eq!(out[(0, 1)], quadrature_integral(0.5, 1.0));
//! # Result::<(), KimuraError>::Ok(())
//! ```
//!
//! ### Strategy selection
//!
//! ```rust
//! use kimura_rs::prelude::*;
//!
//! // Use the series below |c| = 0.05, quadrature above.
//! let evaluator = Kimura::new()
//!     .strategy(Auto { threshold: 0.05 })
//!     .build()?;
//!
//! let small = evaluator.integral(0.01, 2.0);
//! assert!((small - quadrature_integral(0.01, 2.0)).abs() < 1e-9);
//! # Result::<(), KimuraError>::Ok(())
//! ```
//!
//! ## Numerical contract
//!
//! * The quadrature weights sum to 1 over [0, 1] within 1e-12; nodes and
//!   weights are symmetric about 0.5.
//! * `quadrature_integral(0.0, d) == 1.0` for every `d` (within rounding).
//! * For |c| ≤ 0.05 the series and the quadrature agree to better than 1e-6.
//! * Extreme parameters overflow to `inf` or underflow to `0.0` per IEEE 754;
//!   this is accepted behavior, never an error or a panic.
//! * Shape mismatches among batch grids are reported as
//!   [`prelude::KimuraError::ShapeMismatch`] before any output is written.
//!
//! ## Concurrency
//!
//! Every kernel is a pure function over immutable `const` tables. A single
//! [`prelude::KimuraEvaluator`] may be shared freely across threads, and
//! callers may partition batch work across row ranges themselves; no cell
//! depends on any other.
//!
//! ## Feature flags
//!
//! * `std` (default): standard library support; enables
//!   `std::error::Error` for [`prelude::KimuraError`].
//! * `dev`: exposes the [`internals`] module for the test suite. Not for
//!   production use.
//!
//! Without `std`, the crate is `no_std + alloc` and relies on `libm` through
//! `num-traits` for the exponential.
//!
//! ## References
//!
//! - Kimura, M. (1962). "On the Probability of Fixation of Mutant Genes in a
//!   Population"
//! - Crow, J. F. & Kimura, M. (1970). "An Introduction to Population
//!   Genetics Theory"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the error type (`KimuraError`) and the owned row-major 2D
// grid (`Grid`).
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the Kimura integrand, the truncated series approximation, and
// the fixed 101-point Gauss-Legendre quadrature rule with its constant
// tables.
mod math;

// Layer 3: Engine - orchestration and execution control.
//
// Contains input validation, strategy dispatch, and the masked in-place
// batch evaluator.
mod engine;

// High-level fluent API for Kimura integral evaluation.
//
// Provides the free-function surface and the `Kimura` builder.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard kimura-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used items:
///
/// ```
/// use kimura_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        batch_masked_integral, integrand, quadrature_integral, series_denominator,
        EvalStrategy,
        EvalStrategy::{Auto, Quadrature, Series},
        Grid, KimuraBuilder as Kimura, KimuraError, KimuraEvaluator,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
