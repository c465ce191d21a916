// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Fraction-elimination scaling.

use crate::errors::CookToomResult;
use crate::lagrange::normalization_factors;
use crate::points::EvaluationPointSet;
use ct_algebra::{Matrix, Rational};
use num_traits::{One, Signed};
use tracing::debug;

/// Diagonal `α × α` scale matrix `f = diag(F_0, ..., F_{α-2}, 1)`.
///
/// Multiplying the input side by `f` clears the Lagrange denominators; the
/// inverse must then be applied somewhere else (see `ScalingPolicy`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FractionScaling {
    diagonal: Matrix<Rational>,
    flipped: bool,
}

impl FractionScaling {
    pub fn matrix(&self) -> &Matrix<Rational> {
        &self.diagonal
    }

    pub fn into_matrix(self) -> Matrix<Rational> {
        self.diagonal
    }

    /// Whether the first row was negated to make the leading entry positive.
    pub fn flipped(&self) -> bool {
        self.flipped
    }
}

/// Builds the scale matrix for `points`.
///
/// When `F_0` is negative the first row is negated. Either sign gives a
/// correct transform; the positive one is the canonical form.
pub fn fraction_elimination(points: &EvaluationPointSet) -> CookToomResult<FractionScaling> {
    let mut entries = normalization_factors(points.finite_points())?;
    entries.push(Rational::one());
    let mut diagonal = Matrix::diagonal(entries);

    let flipped = diagonal.get(0, 0).is_negative();
    if flipped {
        diagonal = diagonal.map_row(0, |v| -v.clone())?;
        debug!("negated first row of scale matrix, leading entry is now {}", diagonal.get(0, 0));
    }

    Ok(FractionScaling { diagonal, flipped })
}
