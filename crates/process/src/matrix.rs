//! Heap-backed dense square matrices for the small state dimensions
//! (2 or 3 in practice) that process definitions use.

use crate::error::ProcessError;

/// A dense `dim x dim` matrix of `f64`, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Returns a zero-initialized matrix of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Builds a matrix from row slices.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::EmptyMatrix`] for zero rows and
    /// [`ProcessError::NotSquare`] if any row's length differs from the
    /// number of rows.
    pub fn from_rows(rows: &[&[f64]]) -> Result<Self, ProcessError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(ProcessError::EmptyMatrix);
        }
        let mut data = Vec::with_capacity(dim * dim);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(ProcessError::NotSquare {
                    rows: dim,
                    bad_row: i,
                    cols: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dim, data })
    }

    /// Returns the dimension of the matrix.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col]
    }

    /// Sets the element at `(row, col)` to `val`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        assert!(row < self.dim && col < self.dim, "index out of bounds");
        self.data[row * self.dim + col] = val;
    }

    /// Iterates over `(row, col, value)` triples in row-major order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(k, &v)| (k / self.dim, k % self.dim, v))
    }

    /// Computes the element-wise sum `self + other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn add(&self, other: &SquareMatrix) -> SquareMatrix {
        assert_eq!(self.dim, other.dim, "dimension mismatch in matrix sum");
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        SquareMatrix {
            dim: self.dim,
            data,
        }
    }

    /// Computes the matrix-vector product `self * v`.
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != self.dim()`.
    pub fn mul_vec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(v.len(), self.dim, "vector length must match dimension");
        let mut result = vec![0.0; self.dim];
        for i in 0..self.dim {
            let mut sum = 0.0;
            for k in 0..self.dim {
                sum += self.data[i * self.dim + k] * v[k];
            }
            result[i] = sum;
        }
        result
    }

    /// Returns the sum of each column.
    pub fn col_sums(&self) -> Vec<f64> {
        let mut sums = vec![0.0; self.dim];
        for i in 0..self.dim {
            for j in 0..self.dim {
                sums[j] += self.data[i * self.dim + j];
            }
        }
        sums
    }
}
