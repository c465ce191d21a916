// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense matrices with dimension validation.
//!
//! A [`Matrix`] is immutable once built: every operation returns a new matrix.
//! Entries are any [`Scalar`], which covers both exact rationals and the
//! symbolic [`Expr`](crate::symbolic::Expr) used for verification.

use crate::errors::{AlgebraError, AlgebraResult};
use crate::rational::Rational;
use num_traits::{One, Zero};
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// Ring operations a matrix entry must support.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
}

impl<T> Scalar for T where
    T: Clone
        + Debug
        + PartialEq
        + Zero
        + One
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Neg<Output = T>
{
}

/// A matrix with runtime-determined dimensions.
///
/// Dimensions are stored explicitly so that degenerate shapes such as `0 × 1`
/// survive transposition and multiplication.
///
/// # Example
///
/// ```
/// use ct_algebra::{integer, Matrix};
///
/// let m = Matrix::new(vec![
///     vec![integer(1), integer(2)],
///     vec![integer(3), integer(4)],
/// ])
/// .unwrap();
/// assert_eq!(m.shape(), (2, 2));
/// assert_eq!(m.transpose().get(0, 1), &integer(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<Vec<T>>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// Creates a new matrix from row data, validating dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if rows have inconsistent lengths.
    pub fn new(data: Vec<Vec<T>>) -> AlgebraResult<Self> {
        let rows = data.len();
        let cols = data.first().map_or(0, Vec::len);

        for (i, row) in data.iter().enumerate() {
            if row.len() != cols {
                return Err(AlgebraError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        Ok(Self { data, rows, cols })
    }

    /// Builds a `rows × cols` matrix whose `(i, j)` entry is `f(i, j)`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let data = (0..rows)
            .map(|i| (0..cols).map(|j| f(i, j)).collect())
            .collect();
        Self { data, rows, cols }
    }

    /// Creates a zero matrix of the specified dimensions.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_, _| T::zero())
    }

    /// The `n × n` identity.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Square matrix with `entries` on the diagonal.
    pub fn diagonal(entries: Vec<T>) -> Self {
        let n = entries.len();
        let mut m = Self::zeros(n, n);
        for (i, entry) in entries.into_iter().enumerate() {
            m.data[i][i] = entry;
        }
        m
    }

    /// Single-column matrix.
    pub fn column(entries: Vec<T>) -> Self {
        let rows = entries.len();
        Self {
            data: entries.into_iter().map(|e| vec![e]).collect(),
            rows,
            cols: 1,
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns a reference to the underlying data.
    pub fn data(&self) -> &[Vec<T>] {
        &self.data
    }

    /// Gets a reference to a specific element.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row][col]
    }

    /// Borrow row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i]
    }

    /// Copy of column `j`.
    pub fn column_vec(&self, j: usize) -> AlgebraResult<Vec<T>> {
        if j >= self.cols {
            return Err(AlgebraError::OutOfRange {
                context: "column".to_string(),
                index: j,
                size: self.cols,
            });
        }
        Ok(self.data.iter().map(|row| row[j].clone()).collect())
    }

    /// Entries of the main diagonal.
    pub fn diagonal_entries(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self.data[i][i].clone())
            .collect()
    }

    /// True when every off-diagonal entry is zero.
    pub fn is_diagonal(&self) -> bool {
        self.data.iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, entry)| i == j || entry.is_zero())
        })
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self.data[j][i].clone())
    }

    /// Matrix product `self · other`.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `self.cols() != other.rows()`.
    pub fn mul(&self, other: &Self) -> AlgebraResult<Self> {
        if self.cols != other.rows {
            return Err(AlgebraError::dimension_mismatch(
                self.cols,
                other.rows,
                "matrix product (left cols vs right rows)",
            ));
        }

        Ok(Self::from_fn(self.rows, other.cols, |i, j| {
            (0..self.cols).fold(T::zero(), |acc, k| {
                acc + self.data[i][k].clone() * other.data[k][j].clone()
            })
        }))
    }

    /// Elementwise (Hadamard) product.
    pub fn hadamard(&self, other: &Self) -> AlgebraResult<Self> {
        if self.rows != other.rows {
            return Err(AlgebraError::dimension_mismatch(
                self.rows,
                other.rows,
                "elementwise product rows",
            ));
        }
        if self.cols != other.cols {
            return Err(AlgebraError::dimension_mismatch(
                self.cols,
                other.cols,
                "elementwise product columns",
            ));
        }

        Ok(Self::from_fn(self.rows, self.cols, |i, j| {
            self.data[i][j].clone() * other.data[i][j].clone()
        }))
    }

    /// Inserts `row` before row `index` (`index == rows()` appends).
    pub fn row_insert(&self, index: usize, row: Vec<T>) -> AlgebraResult<Self> {
        if index > self.rows {
            return Err(AlgebraError::OutOfRange {
                context: "row insertion".to_string(),
                index,
                size: self.rows,
            });
        }
        if row.len() != self.cols {
            return Err(AlgebraError::dimension_mismatch(
                self.cols,
                row.len(),
                "inserted row length",
            ));
        }

        let mut data = self.data.clone();
        data.insert(index, row);
        Ok(Self {
            data,
            rows: self.rows + 1,
            cols: self.cols,
        })
    }

    /// Inserts `column` before column `index` (`index == cols()` appends).
    pub fn col_insert(&self, index: usize, column: Vec<T>) -> AlgebraResult<Self> {
        if index > self.cols {
            return Err(AlgebraError::OutOfRange {
                context: "column insertion".to_string(),
                index,
                size: self.cols,
            });
        }
        if column.len() != self.rows {
            return Err(AlgebraError::dimension_mismatch(
                self.rows,
                column.len(),
                "inserted column length",
            ));
        }

        let mut data = self.data.clone();
        for (row, entry) in data.iter_mut().zip(column) {
            row.insert(index, entry);
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols + 1,
        })
    }

    /// Applies `f` to every entry of row `index`.
    pub fn map_row(&self, index: usize, mut f: impl FnMut(&T) -> T) -> AlgebraResult<Self> {
        if index >= self.rows {
            return Err(AlgebraError::OutOfRange {
                context: "row".to_string(),
                index,
                size: self.rows,
            });
        }

        let mut data = self.data.clone();
        data[index] = self.data[index].iter().map(&mut f).collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Entrywise conversion into another scalar type.
    pub fn map<U: Scalar>(&self, mut f: impl FnMut(&T) -> U) -> Matrix<U> {
        Matrix::from_fn(self.rows, self.cols, |i, j| f(&self.data[i][j]))
    }
}

impl Matrix<Rational> {
    /// Inverse via Gauss–Jordan elimination on `[M | I]`.
    ///
    /// # Errors
    ///
    /// Returns [`AlgebraError::NotSquare`] or [`AlgebraError::Singular`].
    pub fn inverse(&self) -> AlgebraResult<Self> {
        if self.rows != self.cols {
            return Err(AlgebraError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let mut aug: Vec<Vec<Rational>> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut r = row.clone();
                r.extend((0..n).map(|j| {
                    if i == j {
                        Rational::one()
                    } else {
                        Rational::zero()
                    }
                }));
                r
            })
            .collect();

        for col in 0..n {
            let pivot = (col..n)
                .find(|&row| !aug[row][col].is_zero())
                .ok_or(AlgebraError::Singular { column: col })?;
            aug.swap(col, pivot);

            // Make pivot = 1
            let inv = aug[col][col].recip();
            for entry in aug[col].iter_mut() {
                *entry = &*entry * &inv;
            }

            // Eliminate other entries in this column
            for row in 0..n {
                if row != col && !aug[row][col].is_zero() {
                    let factor = aug[row][col].clone();
                    for j in 0..2 * n {
                        let subtract = &factor * &aug[col][j];
                        aug[row][j] -= subtract;
                    }
                }
            }
        }

        let data = aug.into_iter().map(|row| row[n..].to_vec()).collect();
        Ok(Self {
            data,
            rows: n,
            cols: n,
        })
    }

    /// True when every entry is an integer.
    pub fn is_integral(&self) -> bool {
        self.data.iter().flatten().all(|v| v.is_integer())
    }
}
