//! Truncated power-series approximation for small selection coefficients.
//!
//! ## Purpose
//!
//! This module approximates the denominator integral
//!
//! ```text
//! I(c, d) = ∫₀¹ exp(-2·c·x·(1 + d·(1 - x))) dx
//! ```
//!
//! by expanding the exponential in powers of `c` and integrating term by
//! term. With `g(x) = x + d·x·(1 - x)`,
//!
//! ```text
//! I(c, d) = Σₖ (-2c)ᵏ / k! · ∫₀¹ g(x)ᵏ dx
//! ```
//!
//! truncated after k = 6. Each moment `bₖ = ∫₀¹ g(x)ᵏ dx` is a degree-k
//! polynomial in `d` with fixed rational coefficients, evaluated in Horner
//! form.
//!
//! ## Design notes
//!
//! * **Convergence regime**: Successive terms shrink by a factor of roughly
//!   `-2c/k`, so the smallness of `c` matters far more than `d`. For
//!   |c| ≤ 0.05 the truncation error is below 1e-10.
//! * **Alternative path**: The batch evaluator uses quadrature by default;
//!   this series is an independently exposed approximation for the small-|c|
//!   regime (see `EvalStrategy::Auto`).
//! * **Exact rationals**: The moment coefficients are specific to this
//!   integral family and are kept as literal rationals, not recomputed.
//!
//! ## Invariants
//!
//! * `series_denominator(0, d) == 1` for every `d` (only the k = 0 term
//!   survives).
//! * Agreement with the quadrature integral is O(c⁷) for fixed `d`.
//!
//! ## Non-goals
//!
//! * This module does not select between series and quadrature; dispatch
//!   lives in `engine::executor`.

// External dependencies
use num_traits::Float;

// ============================================================================
// Series Approximation
// ============================================================================

/// Convert a literal rational coefficient into `T`.
///
/// All values passed here are small integers, exactly representable in both
/// `f32` and `f64`, so the conversion cannot fail.
#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap()
}

/// Approximate the Kimura denominator integral by its 7-term (k = 0..6)
/// power series in `c`.
///
/// Accurate to O(c⁷); intended for |c| ≲ 0.1. Pure and allocation-free.
#[inline]
pub fn series_denominator<T: Float>(c: T, d: T) -> T {
    // Moments b_k = ∫₀¹ (x + d·x·(1-x))^k dx, Horner form in d.
    let basis: [T; 6] = [
        (lit::<T>(3.0) + d) / lit(6.0),
        (lit::<T>(10.0) + d * (lit::<T>(5.0) + d)) / lit(30.0),
        (lit::<T>(35.0) + d * (lit::<T>(21.0) + d * (lit::<T>(7.0) + d))) / lit(140.0),
        (lit::<T>(126.0)
            + d * (lit::<T>(84.0) + d * (lit::<T>(36.0) + d * (lit::<T>(9.0) + d))))
            / lit(630.0),
        (lit::<T>(462.0)
            + d * (lit::<T>(330.0)
                + d * (lit::<T>(165.0) + d * (lit::<T>(55.0) + d * (lit::<T>(11.0) + d)))))
            / lit(2772.0),
        (lit::<T>(1716.0)
            + d * (lit::<T>(1287.0)
                + d * (lit::<T>(715.0)
                    + d * (lit::<T>(286.0)
                        + d * (lit::<T>(78.0) + d * (lit::<T>(13.0) + d))))))
            / lit(12012.0),
    ];

    // a_0 = 1, a_k = -a_{k-1} · 2c / k, so a_k = (-2c)^k / k!.
    let two_c = c + c;
    let mut coeff = T::one();
    let mut acc = T::one();
    for (k, &b) in basis.iter().enumerate() {
        coeff = -coeff * two_c / lit((k + 1) as f64);
        acc = acc + coeff * b;
    }
    acc
}
