// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for exact algebra operations.

use thiserror::Error;

/// Errors raised by the matrix, polynomial and rational helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// Operand shapes do not line up
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    DimensionMismatch {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Rows of different lengths passed to a matrix constructor
    #[error("Ragged matrix: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Index outside the matrix
    #[error("Index {index} out of range for {context} of size {size}")]
    OutOfRange {
        context: String,
        index: usize,
        size: usize,
    },

    /// Inversion of a singular matrix
    #[error("Matrix is singular: no pivot in column {column}")]
    Singular { column: usize },

    /// Inversion of a non-square matrix
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// Division by an exact zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Unparsable rational literal
    #[error("Cannot parse '{input}' as a rational: {reason}")]
    Parse { input: String, reason: String },
}

/// Result type alias for algebra operations
pub type AlgebraResult<T> = Result<T, AlgebraError>;

impl AlgebraError {
    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, actual: usize, context: impl Into<String>) -> Self {
        AlgebraError::DimensionMismatch {
            context: context.into(),
            expected,
            actual,
        }
    }

    /// Create a parse error
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        AlgebraError::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}
