// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for transform synthesis
//!
//! Every failure is raised at construction time, before any partial transform
//! could escape, and names the invariant that was violated.

use ct_algebra::AlgebraError;
use thiserror::Error;

/// Main error type for transform synthesis and verification
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookToomError {
    /// Duplicate, misplaced or unparsable evaluation points
    #[error("Invalid point set: {message}")]
    InvalidPointSet { message: String },

    /// Size relation between n, r and the point set violated
    #[error("Size mismatch: {message}")]
    SizeMismatch { message: String },

    /// Scaling placement outside the four defined policies
    #[error("Unsupported scaling policy: {message}")]
    UnsupportedPolicy { message: String },

    /// Matrix operation errors from the algebra layer
    #[error("Matrix operation error: {message}")]
    Matrix { message: String },

    /// Synthesized transform failed the symbolic identity check
    #[error("Verification failed: {message}")]
    Verification { message: String },

    /// Configuration loading errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for transform operations
pub type CookToomResult<T> = Result<T, CookToomError>;

/// Point set violations
#[derive(Error, Debug)]
pub enum PointSetError {
    /// Two finite points coincide, so a Lagrange normalization factor is zero
    #[error("points {first} and {second} are both {value}; the normalization factor would be zero")]
    DuplicatePoints {
        first: usize,
        second: usize,
        value: String,
    },

    /// The point at infinity must be the final entry, and appear at most once
    #[error("point at infinity found at position {index} of {len}; it may only be the last entry")]
    MisplacedInfinity { index: usize, len: usize },

    /// A builder was asked for more rows than there are points
    #[error("{needed} finite points required but only {available} supplied")]
    InsufficientPoints { needed: usize, available: usize },

    /// A point literal could not be parsed
    #[error("cannot parse point '{input}': {reason}")]
    Unparsable { input: String, reason: String },
}

/// Size parameter violations
#[derive(Error, Debug)]
pub enum SizeError {
    /// n must be at least 1
    #[error("output length n must be at least 1")]
    ZeroOutputLength,

    /// r must be at least 1
    #[error("filter length r must be at least 1")]
    ZeroFilterLength,

    /// n + r - 1 does not fit in usize
    #[error("n + r - 1 overflows for n = {n}, r = {r}")]
    Overflow { n: usize, r: usize },

    /// α = n + r - 1 must equal the number of points (infinity included)
    #[error("n + r - 1 = {expected} (n = {n}, r = {r}) but the point set has {actual} points including infinity")]
    LengthMismatch {
        n: usize,
        r: usize,
        expected: usize,
        actual: usize,
    },

    /// A matrix of a transform triple has the wrong shape
    #[error("{name} is {actual_rows}x{actual_cols}, expected {expected_rows}x{expected_cols}")]
    ShapeMismatch {
        name: &'static str,
        expected_rows: usize,
        expected_cols: usize,
        actual_rows: usize,
        actual_cols: usize,
    },

    /// Caller-supplied sizes disagree with the sizes a triple was built for
    #[error("transform was synthesized for n = {built_n}, r = {built_r}, not n = {n}, r = {r}")]
    TripleMismatch {
        n: usize,
        r: usize,
        built_n: usize,
        built_r: usize,
    },
}

impl From<PointSetError> for CookToomError {
    fn from(err: PointSetError) -> Self {
        CookToomError::InvalidPointSet {
            message: err.to_string(),
        }
    }
}

impl From<SizeError> for CookToomError {
    fn from(err: SizeError) -> Self {
        CookToomError::SizeMismatch {
            message: err.to_string(),
        }
    }
}

impl From<AlgebraError> for CookToomError {
    fn from(err: AlgebraError) -> Self {
        CookToomError::Matrix {
            message: err.to_string(),
        }
    }
}

impl From<figment::Error> for CookToomError {
    fn from(err: figment::Error) -> Self {
        CookToomError::Config {
            message: err.to_string(),
        }
    }
}

impl CookToomError {
    /// Create a verification error with a message
    pub fn verification(message: impl Into<String>) -> Self {
        CookToomError::Verification {
            message: message.into(),
        }
    }

    /// Create an unsupported policy error with a message
    pub fn unsupported_policy(message: impl Into<String>) -> Self {
        CookToomError::UnsupportedPolicy {
            message: message.into(),
        }
    }
}
