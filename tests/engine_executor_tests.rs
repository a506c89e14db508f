#![cfg(feature = "dev")]

use kimura_rs::internals::engine::executor::{evaluate_masked_into, EvalStrategy};
use kimura_rs::internals::engine::validator::Validator;
use kimura_rs::internals::math::quadrature::quadrature_integral;
use kimura_rs::internals::math::series::series_denominator;
use kimura_rs::internals::primitives::errors::KimuraError;
use kimura_rs::internals::primitives::grid::Grid;

// ============================================================================
// Strategy Dispatch Tests
// ============================================================================

#[test]
fn test_quadrature_strategy_matches_kernel() {
    let s = EvalStrategy::Quadrature;
    let a = s.evaluate(0.8, 1.5);
    assert_eq!(a.to_bits(), quadrature_integral(0.8, 1.5).to_bits());
}

#[test]
fn test_series_strategy_matches_kernel() {
    let s = EvalStrategy::Series;
    let a = s.evaluate(0.02, -1.0);
    let expected: f64 = series_denominator(0.02, -1.0);
    assert_eq!(a.to_bits(), expected.to_bits());
}

#[test]
fn test_auto_strategy_crossover() {
    let s = EvalStrategy::Auto { threshold: 0.1 };

    // At or below the threshold: series.
    let below = s.evaluate(0.1, 2.0);
    let expected_below: f64 = series_denominator(0.1, 2.0);
    assert_eq!(below.to_bits(), expected_below.to_bits());
    let negative = s.evaluate(-0.05, 2.0);
    let expected_negative: f64 = series_denominator(-0.05, 2.0);
    assert_eq!(negative.to_bits(), expected_negative.to_bits());

    // Above the threshold: quadrature.
    let above = s.evaluate(0.2, 2.0);
    assert_eq!(above.to_bits(), quadrature_integral(0.2, 2.0).to_bits());
}

#[test]
fn test_default_strategy_is_quadrature() {
    assert_eq!(EvalStrategy::default(), EvalStrategy::Quadrature);
}

// ============================================================================
// Strategy Validation Tests
// ============================================================================

#[test]
fn test_validate_strategy_accepts_fixed_kernels() {
    assert!(Validator::validate_strategy(&EvalStrategy::Quadrature).is_ok());
    assert!(Validator::validate_strategy(&EvalStrategy::Series).is_ok());
    assert!(Validator::validate_strategy(&EvalStrategy::Auto { threshold: 0.05 }).is_ok());
}

#[test]
fn test_validate_strategy_rejects_bad_thresholds() {
    for &t in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
        let result = Validator::validate_strategy(&EvalStrategy::Auto { threshold: t });
        match result {
            Err(KimuraError::InvalidThreshold(got)) => {
                assert!(got == t || (got.is_nan() && t.is_nan()));
            }
            other => panic!("expected InvalidThreshold, got {:?}", other),
        }
    }
}

// ============================================================================
// Masked Batch Tests
// ============================================================================

#[test]
fn test_masked_cells_are_untouched() {
    // Checkerboard mask over a 3x3 grid; sentinel -1 must survive exactly.
    let c = Grid::from_vec(3, 3, vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]).unwrap();
    let d = Grid::from_vec(3, 3, vec![-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]).unwrap();
    let mask = Grid::from_vec(3, 3, vec![1, 0, 1, 0, 1, 0, 1, 0, 1]).unwrap();
    let mut out = Grid::filled(3, 3, -1.0).unwrap();

    evaluate_masked_into(EvalStrategy::Quadrature, &c, &d, &mask, &mut out).unwrap();

    for i in 0..3 {
        for j in 0..3 {
            if mask[(i, j)] != 0 {
                let expected = quadrature_integral(c[(i, j)], d[(i, j)]);
                assert!((out[(i, j)] - expected).abs() < 1e-9);
            } else {
                assert_eq!(out[(i, j)].to_bits(), (-1.0f64).to_bits());
            }
        }
    }
}

#[test]
fn test_any_nonzero_mask_value_activates() {
    let c = Grid::filled(1, 3, 0.0).unwrap();
    let d = Grid::filled(1, 3, 0.0).unwrap();
    let mask = Grid::from_vec(1, 3, vec![-1, 2, 0]).unwrap();
    let mut out = Grid::filled(1, 3, 9.0).unwrap();

    evaluate_masked_into(EvalStrategy::Quadrature, &c, &d, &mask, &mut out).unwrap();

    assert!((out[(0, 0)] - 1.0).abs() < 1e-12);
    assert!((out[(0, 1)] - 1.0).abs() < 1e-12);
    assert_eq!(out[(0, 2)], 9.0);
}

#[test]
fn test_batch_with_series_strategy() {
    let c = Grid::filled(2, 2, 0.01).unwrap();
    let d = Grid::filled(2, 2, 3.0).unwrap();
    let mask = Grid::filled(2, 2, 1).unwrap();
    let mut out = Grid::filled(2, 2, 0.0).unwrap();

    evaluate_masked_into(EvalStrategy::Series, &c, &d, &mask, &mut out).unwrap();

    let expected: f64 = series_denominator(0.01, 3.0);
    for &v in out.as_slice() {
        assert_eq!(v.to_bits(), expected.to_bits());
    }
}

// ============================================================================
// Shape Precondition Tests
// ============================================================================

#[test]
fn test_shape_mismatch_reports_offending_grid() {
    let c = Grid::filled(2, 2, 0.0).unwrap();
    let d_bad = Grid::filled(2, 3, 0.0).unwrap();
    let d_ok = Grid::filled(2, 2, 0.0).unwrap();
    let mask_bad = Grid::filled(3, 2, 1).unwrap();
    let mask_ok = Grid::filled(2, 2, 1).unwrap();
    let mut out_bad = Grid::filled(1, 1, 0.0).unwrap();
    let mut out_ok = Grid::filled(2, 2, 0.0).unwrap();

    let err = evaluate_masked_into(EvalStrategy::Quadrature, &c, &d_bad, &mask_ok, &mut out_ok)
        .unwrap_err();
    assert_eq!(
        err,
        KimuraError::ShapeMismatch {
            name: "dominance",
            expected: (2, 2),
            got: (2, 3),
        }
    );

    let err = evaluate_masked_into(EvalStrategy::Quadrature, &c, &d_ok, &mask_bad, &mut out_ok)
        .unwrap_err();
    assert_eq!(
        err,
        KimuraError::ShapeMismatch {
            name: "mask",
            expected: (2, 2),
            got: (3, 2),
        }
    );

    let err = evaluate_masked_into(EvalStrategy::Quadrature, &c, &d_ok, &mask_ok, &mut out_bad)
        .unwrap_err();
    assert_eq!(
        err,
        KimuraError::ShapeMismatch {
            name: "out",
            expected: (2, 2),
            got: (1, 1),
        }
    );
}

#[test]
fn test_failed_batch_leaves_output_unmodified() {
    let c = Grid::filled(2, 2, 1.0).unwrap();
    let d = Grid::filled(2, 3, 1.0).unwrap();
    let mask = Grid::filled(2, 2, 1).unwrap();
    let mut out = Grid::filled(2, 2, 42.0).unwrap();

    let result = evaluate_masked_into(EvalStrategy::Quadrature, &c, &d, &mask, &mut out);
    assert!(result.is_err());
    assert!(out.as_slice().iter().all(|&v| v == 42.0));
}
