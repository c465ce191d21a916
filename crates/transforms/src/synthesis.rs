// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Transform composition.
//!
//! For output length `n`, filter length `r` and `α = n + r - 1` points the
//! minimal filter is computed as
//!
//! ```text
//! Y = AT · ((G · g) ⊙ (BT · d))
//! ```
//!
//! with `AT` (n×α), `G` (α×r) and `BT` (α×α). The matrices are built from the
//! augmented Vandermonde matrices `A_n`, `A_r`, the interpolation side
//! `B = [L·T ; infinity row]` and the fraction-elimination diagonal `f`.

use crate::errors::{CookToomResult, SizeError};
use crate::interpolation::{augmented_vandermonde, infinity_row, translation_matrix};
use crate::lagrange::LagrangeBasis;
use crate::points::EvaluationPointSet;
use crate::policy::ScalingPolicy;
use crate::scaling::fraction_elimination;
use ct_algebra::{Matrix, Rational};
use tracing::{debug, instrument};

/// The four artifacts of a Cook–Toom / Winograd minimal filter `F(n, r)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformTriple {
    output: Matrix<Rational>,
    filter: Matrix<Rational>,
    input: Matrix<Rational>,
    scale: Matrix<Rational>,
    n: usize,
    r: usize,
    policy: ScalingPolicy,
}

impl TransformTriple {
    /// Assembles a triple from externally supplied matrices, e.g. a published
    /// table that should be checked.
    ///
    /// # Errors
    ///
    /// Returns `SizeMismatch` if any shape disagrees with `n` and `r`.
    pub fn from_parts(
        output: Matrix<Rational>,
        filter: Matrix<Rational>,
        input: Matrix<Rational>,
        scale: Matrix<Rational>,
        n: usize,
        r: usize,
        policy: ScalingPolicy,
    ) -> CookToomResult<Self> {
        let triple = Self {
            output,
            filter,
            input,
            scale,
            n,
            r,
            policy,
        };
        triple.check_shapes()?;
        Ok(triple)
    }

    /// Output transform `AT`, `n × α`.
    pub fn output_transform(&self) -> &Matrix<Rational> {
        &self.output
    }

    /// Filter transform `G`, `α × r`.
    pub fn filter_transform(&self) -> &Matrix<Rational> {
        &self.filter
    }

    /// Input transform `BT`, `α × α`.
    pub fn input_transform(&self) -> &Matrix<Rational> {
        &self.input
    }

    /// Fraction-elimination diagonal `f`, `α × α`.
    pub fn scale_diagonal(&self) -> &Matrix<Rational> {
        &self.scale
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn r(&self) -> usize {
        self.r
    }

    /// Number of points, i.e. the column count of `AT`.
    pub fn alpha(&self) -> usize {
        self.output.cols()
    }

    pub fn policy(&self) -> ScalingPolicy {
        self.policy
    }

    /// `A = ATᵀ` for the convolution framing `s = B · ((G·g) ⊙ (A·d))`.
    pub fn convolution_input(&self) -> Matrix<Rational> {
        self.output.transpose()
    }

    /// `B = BTᵀ` for the convolution framing.
    pub fn convolution_output(&self) -> Matrix<Rational> {
        self.input.transpose()
    }

    /// `(AT, G, BT, f)`.
    pub fn into_parts(
        self,
    ) -> (
        Matrix<Rational>,
        Matrix<Rational>,
        Matrix<Rational>,
        Matrix<Rational>,
    ) {
        (self.output, self.filter, self.input, self.scale)
    }

    /// Checks every matrix shape against `n` and `r`.
    pub fn check_shapes(&self) -> CookToomResult<()> {
        let alpha = alpha_for(self.n, self.r)?;
        let expected = [
            ("AT", &self.output, self.n, alpha),
            ("G", &self.filter, alpha, self.r),
            ("BT", &self.input, alpha, alpha),
            ("f", &self.scale, alpha, alpha),
        ];
        for (name, matrix, rows, cols) in expected {
            if matrix.shape() != (rows, cols) {
                return Err(SizeError::ShapeMismatch {
                    name,
                    expected_rows: rows,
                    expected_cols: cols,
                    actual_rows: matrix.rows(),
                    actual_cols: matrix.cols(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// `α = n + r - 1` after checking `n ≥ 1` and `r ≥ 1`.
fn alpha_for(n: usize, r: usize) -> Result<usize, SizeError> {
    if n == 0 {
        return Err(SizeError::ZeroOutputLength);
    }
    if r == 0 {
        return Err(SizeError::ZeroFilterLength);
    }
    n.checked_add(r - 1).ok_or(SizeError::Overflow { n, r })
}

/// Checks `n ≥ 1`, `r ≥ 1` and `n + r - 1 = α`, returning `α`.
pub fn validate_sizes(points: &EvaluationPointSet, n: usize, r: usize) -> CookToomResult<usize> {
    let expected = alpha_for(n, r)?;
    if expected != points.alpha() {
        return Err(SizeError::LengthMismatch {
            n,
            r,
            expected,
            actual: points.alpha(),
        }
        .into());
    }
    Ok(expected)
}

/// `B = [L·T ; infinity row]`, the `α × α` interpolation side.
///
/// `B` maps the values of a degree `α - 1` polynomial at the finite points,
/// followed by its leading coefficient, to all of its coefficients.
pub fn input_side_matrix(points: &EvaluationPointSet) -> CookToomResult<Matrix<Rational>> {
    let finite = points.finite_points();
    let l = LagrangeBasis::new(finite)?.interpolation_matrix();
    let t = translation_matrix(finite)?;
    let lt = l.mul(&t)?;
    Ok(lt.row_insert(finite.len(), infinity_row(points.alpha()))?)
}

/// Synthesizes `F(n, r)` over `points` with the scale factors placed by
/// `policy`.
///
/// # Errors
///
/// Returns `SizeMismatch` when the sizes are inconsistent with the point set
/// and `InvalidPointSet` when two finite points coincide.
#[instrument(skip_all, fields(n = n, r = r, policy = %policy))]
pub fn synthesize(
    points: &EvaluationPointSet,
    n: usize,
    r: usize,
    policy: ScalingPolicy,
) -> CookToomResult<TransformTriple> {
    let alpha = validate_sizes(points, n, r)?;
    let finite = points.finite_points();

    let scaling = fraction_elimination(points)?;
    let f = scaling.into_matrix();
    let f_inv = f.inverse()?;

    let a_n = augmented_vandermonde(finite, alpha, n)?;
    let a_r = augmented_vandermonde(finite, alpha, r)?;
    let b = input_side_matrix(points)?;
    debug!("synthesizing F({n},{r}) on {points}");

    let (output, filter, input) = match policy {
        ScalingPolicy::AbsorbInFilter => {
            (a_n.transpose(), f_inv.mul(&a_r)?, f.mul(&b.transpose())?)
        }
        ScalingPolicy::AbsorbInOutput => {
            (a_n.transpose().mul(&f_inv)?, a_r, f.mul(&b.transpose())?)
        }
        ScalingPolicy::AbsorbInInput => (a_n.transpose(), a_r, b.transpose()),
        ScalingPolicy::ExposeAsSeparateFactor => {
            (a_n.transpose(), a_r, f.mul(&b.transpose())?)
        }
    };

    let triple = TransformTriple {
        output,
        filter,
        input,
        scale: f,
        n,
        r,
        policy,
    };
    triple.check_shapes()?;
    Ok(triple)
}
