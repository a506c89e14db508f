//! The per-point Kimura integrand.
//!
//! ## Purpose
//!
//! This module provides the unnormalized integrand of the Kimura diffusion
//! integral,
//!
//! ```text
//! f(x; c, d) = exp(-2·c·x·(1 + d·(1 - x)))
//! ```
//!
//! where `c` is the scaled selection coefficient and `d` the dominance
//! coefficient. The quadrature rule sums weighted evaluations of this
//! function over the unit interval.
//!
//! ## Design notes
//!
//! * **Grouping**: The exponent is computed as `n2cx·d·(1 - x) + n2cx` with
//!   `n2cx = -2·c·x`. This grouping is mathematically equivalent to the
//!   direct form but is kept as-is for numerical consistency with the
//!   quadrature sum.
//! * **Total function**: No validation. Extreme parameters saturate to
//!   `inf` or `0.0` per IEEE 754; that is a valid numeric result.
//!
//! ## Invariants
//!
//! * `f(x; 0, d) == 1` for every `x` and `d`.
//! * The result is non-negative (an exponential).
//!
//! ## Non-goals
//!
//! * This module does not integrate; see `math::quadrature`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Integrand
// ============================================================================

/// Evaluate the Kimura integrand `exp(-2·c·x·(1 + d·(1 - x)))`.
///
/// Pure and allocation-free. May return `0.0` or `inf` for extreme
/// parameters; this is accepted floating-point behavior, not an error.
#[inline]
pub fn integrand<T: Float>(x: T, c: T, d: T) -> T {
    let n2cx = -(c + c) * x;
    (n2cx * d * (T::one() - x) + n2cx).exp()
}
