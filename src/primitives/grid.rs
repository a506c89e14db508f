//! Owned, contiguous 2D grid storage.
//!
//! ## Purpose
//!
//! This module provides `Grid<T>`, the row-major 2D buffer that carries
//! parameter grids, the activity mask, and batch output. It replaces raw
//! strided pointer access with bounds-checked indexed access into an owned
//! contiguous allocation, while preserving the same iteration order
//! (row `i` outer, column `j` inner).
//!
//! ## Design notes
//!
//! * **Caller ownership**: The batch evaluator borrows grids; it never
//!   allocates or retains references beyond the call.
//! * **Contiguity**: One `Vec<T>` of length `rows * cols`, row-major, so the
//!   whole grid is addressable as a single slice for linear scans.
//! * **Checked construction**: Dimensions are validated once at construction;
//!   afterwards `data.len() == rows * cols` holds by invariant.
//!
//! ## Key concepts
//!
//! * **Row-major layout**: Element `(i, j)` lives at `i * cols + j`.
//! * **Shape**: The `(rows, cols)` pair used for batch precondition checks.
//!
//! ## Invariants
//!
//! * `rows >= 1`, `cols >= 1`, and `data.len() == rows * cols`.
//! * Shape is fixed for the lifetime of the grid; no resizing.
//!
//! ## Non-goals
//!
//! * This module does not provide linear algebra, views, or slicing.
//! * This module does not validate element values (NaN/Inf are allowed).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};

// Internal dependencies
use crate::primitives::errors::KimuraError;

// ============================================================================
// Grid
// ============================================================================

/// An owned, row-major 2D grid of `T`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Create a `rows x cols` grid with every element set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`KimuraError::EmptyGrid`] if `rows` or `cols` is zero.
    pub fn filled(rows: usize, cols: usize, value: T) -> Result<Self, KimuraError> {
        if rows == 0 || cols == 0 {
            return Err(KimuraError::EmptyGrid);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from a row-major buffer.
    ///
    /// The buffer is taken by value; element `(i, j)` is read from
    /// `data[i * cols + j]`.
    ///
    /// # Errors
    ///
    /// Returns [`KimuraError::EmptyGrid`] if `rows` or `cols` is zero, and
    /// [`KimuraError::DimensionMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, KimuraError> {
        if rows == 0 || cols == 0 {
            return Err(KimuraError::EmptyGrid);
        }
        if data.len() != rows * cols {
            return Err(KimuraError::DimensionMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as a `(rows, cols)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Borrow element `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Mutably borrow element `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.rows && col < self.cols {
            Some(&mut self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// The full row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The full row-major buffer, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the grid, returning the row-major buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "Grid index ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    /// Panics if `(row, col)` is out of bounds.
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.rows && col < self.cols,
            "Grid index ({}, {}) out of bounds for {}x{} grid",
            row,
            col,
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}
