//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric kernels of the crate:
//! - The Kimura integrand
//! - The small-|c| truncated series for the denominator integral
//! - The fixed 101-point Gauss-Legendre quadrature rule
//!
//! All functions here are total, allocation-free, and side-effect free, and
//! read only compiled-in constant data. They are safe to call concurrently
//! from any number of threads.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// The per-point Kimura integrand.
pub mod integrand;

/// Fixed-order Gauss-Legendre quadrature on [0, 1].
pub mod quadrature;

/// Truncated power-series approximation for small selection coefficients.
pub mod series;
