// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Generalized Vandermonde and translation matrices.
//!
//! Row `i` of a Vandermonde matrix evaluates a polynomial with `width`
//! coefficients at `points[i]`. The augmented form appends the row for the
//! point at infinity, which picks out the leading coefficient instead of
//! evaluating anything.

use crate::errors::{CookToomError, CookToomResult, PointSetError};
use crate::points::EvaluationPoint;
use ct_algebra::{pow, Matrix, Rational};
use num_traits::{One, Zero};

/// Evaluation row of `point` for a polynomial with `width` coefficients.
///
/// A finite point yields `[1, p, p^2, ..., p^(width-1)]`; infinity yields the
/// unit row selecting coefficient `width - 1`.
pub fn evaluation_row(point: &EvaluationPoint, width: usize) -> Vec<Rational> {
    match point {
        EvaluationPoint::Finite(p) => (0..width).map(|j| pow(p, j)).collect(),
        EvaluationPoint::Infinity => infinity_row(width),
    }
}

/// `[0, ..., 0, 1]` of length `width`.
pub fn infinity_row(width: usize) -> Vec<Rational> {
    (0..width)
        .map(|j| {
            if j + 1 == width {
                Rational::one()
            } else {
                Rational::zero()
            }
        })
        .collect()
}

/// `height × width` matrix with entry `(i, j) = points[i]^j`.
///
/// # Errors
///
/// Returns `InvalidPointSet` if `height` exceeds the number of points.
pub fn vandermonde(
    points: &[Rational],
    height: usize,
    width: usize,
) -> CookToomResult<Matrix<Rational>> {
    if height > points.len() {
        return Err(PointSetError::InsufficientPoints {
            needed: height,
            available: points.len(),
        }
        .into());
    }

    Ok(Matrix::from_fn(height, width, |i, j| pow(&points[i], j)))
}

/// `height × width` Vandermonde matrix whose last row belongs to the point at
/// infinity.
///
/// The first `height - 1` rows evaluate at `points[..height - 1]`.
///
/// # Errors
///
/// Returns `InvalidPointSet` when `height - 1` exceeds the number of finite
/// points and `SizeMismatch` when `height` or `width` is zero.
pub fn augmented_vandermonde(
    points: &[Rational],
    height: usize,
    width: usize,
) -> CookToomResult<Matrix<Rational>> {
    if height == 0 || width == 0 {
        return Err(CookToomError::SizeMismatch {
            message: format!(
                "augmented Vandermonde matrix needs a non-empty shape, got {height}x{width}"
            ),
        });
    }
    if height - 1 > points.len() {
        return Err(PointSetError::InsufficientPoints {
            needed: height - 1,
            available: points.len(),
        }
        .into());
    }

    let rows = points[..height - 1]
        .iter()
        .cloned()
        .map(EvaluationPoint::Finite)
        .chain(std::iter::once(EvaluationPoint::Infinity))
        .map(|point| evaluation_row(&point, width))
        .collect();

    Ok(Matrix::new(rows)?)
}

/// `k × (k + 1)` matrix `[I_k | -p^k]` for `k` finite points.
///
/// Applied to `(values at the points, leading coefficient c_k)` it yields the
/// values of the polynomial with its `c_k x^k` term removed, ready for
/// degree `k - 1` interpolation.
pub fn translation_matrix(points: &[Rational]) -> CookToomResult<Matrix<Rational>> {
    let k = points.len();
    let column = points.iter().map(|p| -pow(p, k)).collect();
    Ok(Matrix::<Rational>::identity(k).col_insert(k, column)?)
}
