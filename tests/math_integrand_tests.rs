#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use kimura_rs::internals::math::integrand::integrand;

// ============================================================================
// Neutral Case Tests
// ============================================================================

#[test]
fn test_integrand_is_one_when_c_is_zero() {
    for &x in &[0.0, 0.25, 0.5, 0.75, 1.0] {
        for &d in &[-5.0, -1.0, 0.0, 2.0, 10.0] {
            assert_eq!(integrand(x, 0.0, d), 1.0);
        }
    }
}

#[test]
fn test_integrand_is_one_at_x_zero() {
    // The exponent vanishes at x = 0 regardless of parameters.
    assert_eq!(integrand(0.0, 3.0, -2.0), 1.0);
    assert_eq!(integrand(0.0, -7.5, 4.0), 1.0);
}

// ============================================================================
// Agreement With the Direct Form
// ============================================================================

#[test]
fn test_integrand_matches_direct_form() {
    let cases: [(f64, f64, f64); 4] = [
        (0.3, 1.0, 0.5),
        (0.7, -2.0, 3.0),
        (0.11, 4.5, -1.5),
        (0.99, -0.25, 0.0),
    ];
    for &(x, c, d) in &cases {
        let direct = (-2.0 * c * x * (1.0 + d * (1.0 - x))).exp();
        assert_relative_eq!(integrand(x, c, d), direct, max_relative = 1e-14);
    }
}

#[test]
fn test_integrand_genic_selection() {
    // d = 0 reduces to exp(-2cx).
    let val = integrand(0.5, 1.0, 0.0);
    assert_relative_eq!(val, (-1.0f64).exp(), max_relative = 1e-15);
}

// ============================================================================
// Saturation Behavior
// ============================================================================

#[test]
fn test_integrand_overflow_is_infinite() {
    // Strongly negative c drives the exponent far positive.
    let val: f64 = integrand(1.0, -1000.0, 0.0);
    assert!(val.is_infinite() && val > 0.0);
}

#[test]
fn test_integrand_underflow_is_zero() {
    let val: f64 = integrand(1.0, 1000.0, 0.0);
    assert_eq!(val, 0.0);
}

#[test]
fn test_integrand_is_nonnegative() {
    for &x in &[0.1, 0.5, 0.9] {
        for &c in &[-10.0, -1.0, 0.0, 1.0, 10.0] {
            for &d in &[-3.0, 0.0, 3.0] {
                assert!(integrand(x, c, d) >= 0.0);
            }
        }
    }
}

// ============================================================================
// Generic Precision Tests
// ============================================================================

#[test]
fn test_integrand_f32() {
    let v32 = integrand(0.5f32, 0.2, 1.0);
    let v64 = integrand(0.5f64, 0.2, 1.0);
    assert_relative_eq!(v32 as f64, v64, max_relative = 1e-6);
}

// ============================================================================
// Purity Tests
// ============================================================================

#[test]
fn test_integrand_is_deterministic() {
    let a: f64 = integrand(0.37, 1.3, -0.8);
    let b: f64 = integrand(0.37, 1.3, -0.8);
    assert_eq!(a.to_bits(), b.to_bits());
}
