// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Lagrange basis over a set of finite points.
//!
//! For points `p_0 .. p_{k-1}` the i-th basis polynomial is
//! `N_i(x) / F_i` with numerator `N_i(x) = ∏_{j≠i} (x - p_j)` and
//! normalization `F_i = ∏_{j≠i} (p_i - p_j)`.

use crate::errors::{CookToomResult, PointSetError};
use ct_algebra::{Matrix, Polynomial, Rational};
use num_traits::{One, Zero};
use tracing::trace;

/// Numerators and normalization factors of the Lagrange basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LagrangeBasis {
    points: Vec<Rational>,
    numerators: Vec<Polynomial>,
    normalizers: Vec<Rational>,
}

impl LagrangeBasis {
    /// Expands every numerator and computes every normalization factor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPointSet` when a normalization factor is zero, i.e. when
    /// two points coincide.
    pub fn new(points: &[Rational]) -> CookToomResult<Self> {
        let normalizers = normalization_factors(points)?;
        let numerators = (0..points.len())
            .map(|i| {
                let others = points
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, p)| p);
                Polynomial::from_roots(others)
            })
            .collect::<Vec<_>>();

        for (i, numerator) in numerators.iter().enumerate() {
            trace!("N_{i}(x) = {numerator}, F_{i} = {}", normalizers[i]);
        }

        Ok(Self {
            points: points.to_vec(),
            numerators,
            normalizers,
        })
    }

    /// Number of points (and basis polynomials).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Rational] {
        &self.points
    }

    /// Unnormalized numerators `N_i`.
    pub fn numerators(&self) -> &[Polynomial] {
        &self.numerators
    }

    /// Normalization factors `F_i`.
    pub fn normalizers(&self) -> &[Rational] {
        &self.normalizers
    }

    /// The normalized basis polynomial `N_i / F_i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn basis_polynomial(&self, i: usize) -> Polynomial {
        // F_i was checked non-zero at construction.
        self.numerators[i].scalar_mul(&self.normalizers[i].recip())
    }

    /// `L_i(x)`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn evaluate_basis(&self, i: usize, x: &Rational) -> Rational {
        self.numerators[i].evaluate(x) / &self.normalizers[i]
    }

    /// `k × k` matrix whose row `i` holds the coefficients of `N_i`, lowest
    /// power first.
    pub fn coefficient_matrix(&self) -> Matrix<Rational> {
        let k = self.len();
        Matrix::from_fn(k, k, |i, j| self.numerators[i].nth(j))
    }

    /// Interpolation matrix `L` with `L[j][i]` the coefficient of `x^j` in the
    /// i-th normalized basis polynomial.
    ///
    /// `L` maps the values of a degree `k - 1` polynomial at the points to its
    /// coefficients.
    pub fn interpolation_matrix(&self) -> Matrix<Rational> {
        let k = self.len();
        Matrix::from_fn(k, k, |i, j| {
            self.numerators[i].nth(j) / &self.normalizers[i]
        })
        .transpose()
    }
}

/// `F_i = ∏_{j≠i} (p_i - p_j)` for every point.
///
/// # Errors
///
/// Returns `InvalidPointSet` naming the colliding pair when a factor is zero.
pub fn normalization_factors(points: &[Rational]) -> CookToomResult<Vec<Rational>> {
    points
        .iter()
        .enumerate()
        .map(|(i, p_i)| {
            let factor = points
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .fold(Rational::one(), |acc, (_, p_j)| acc * (p_i - p_j));

            if factor.is_zero() {
                let second = points
                    .iter()
                    .enumerate()
                    .position(|(j, p_j)| j != i && p_j == p_i)
                    .unwrap_or(i);
                return Err(PointSetError::DuplicatePoints {
                    first: i.min(second),
                    second: i.max(second),
                    value: p_i.to_string(),
                }
                .into());
            }
            Ok(factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CookToomError;
    use crate::interpolation::vandermonde;
    use ct_algebra::{integer, ratio};

    fn ints(values: &[i64]) -> Vec<Rational> {
        values.iter().map(|v| integer(*v)).collect()
    }

    #[test]
    fn test_normalization_factors() {
        let f = normalization_factors(&ints(&[0, 1, -1])).unwrap();
        assert_eq!(f, ints(&[-1, 2, 2]));

        let f = normalization_factors(&ints(&[0, 1, -1, 2, -2])).unwrap();
        assert_eq!(f, ints(&[4, -6, -6, 24, 24]));
    }

    #[test]
    fn test_duplicate_points_give_zero_factor() {
        let err = normalization_factors(&ints(&[3, 1, 3])).unwrap_err();
        match err {
            CookToomError::InvalidPointSet { message } => {
                assert!(message.contains("points 0 and 2"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(LagrangeBasis::new(&ints(&[1, 1])).is_err());
    }

    #[test]
    fn test_numerators_are_expanded() {
        let basis = LagrangeBasis::new(&ints(&[0, 1, -1])).unwrap();
        // N_0 = (x - 1)(x + 1) = x^2 - 1
        assert_eq!(basis.numerators()[0].coefficients(), ints(&[1, 0, -1]).as_slice());
        // N_2 = x (x - 1) = x^2 - x
        assert_eq!(basis.numerators()[2].coefficients(), ints(&[1, -1, 0]).as_slice());
        assert_eq!(
            basis.coefficient_matrix(),
            Matrix::new(vec![ints(&[-1, 0, 1]), ints(&[0, 1, 1]), ints(&[0, -1, 1])]).unwrap()
        );
    }

    #[test]
    fn test_interpolation_matrix_f23() {
        let basis = LagrangeBasis::new(&ints(&[0, 1, -1])).unwrap();
        let half = ratio(1, 2).unwrap();
        let expected = Matrix::new(vec![
            vec![integer(1), integer(0), integer(0)],
            vec![integer(0), half.clone(), -half.clone()],
            vec![integer(-1), half.clone(), half],
        ])
        .unwrap();
        assert_eq!(basis.interpolation_matrix(), expected);
    }

    #[test]
    fn test_basis_is_kronecker_delta() {
        let points = vec![integer(0), integer(1), integer(-1), ratio(1, 2).unwrap()];
        let basis = LagrangeBasis::new(&points).unwrap();
        for i in 0..points.len() {
            for (j, p) in points.iter().enumerate() {
                let expected = if i == j { integer(1) } else { integer(0) };
                assert_eq!(basis.evaluate_basis(i, p), expected);
                assert_eq!(basis.basis_polynomial(i).evaluate(p), expected);
            }
        }
    }

    #[test]
    fn test_interpolation_inverts_vandermonde() {
        let points = ints(&[0, 1, -1, 2, -2]);
        let basis = LagrangeBasis::new(&points).unwrap();
        let v = vandermonde(&points, 5, 5).unwrap();
        assert_eq!(v.mul(&basis.interpolation_matrix()).unwrap(), Matrix::identity(5));
        assert_eq!(basis.interpolation_matrix(), v.inverse().unwrap());
    }

    #[test]
    fn test_empty_basis() {
        let basis = LagrangeBasis::new(&[]).unwrap();
        assert!(basis.is_empty());
        assert_eq!(basis.interpolation_matrix().shape(), (0, 0));
    }
}
