// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Univariate polynomial arithmetic over the rationals.

use crate::rational::Rational;
use num_traits::{One, Signed, Zero};
use std::fmt;

/// A polynomial represented by its coefficients in descending order of degree.
///
/// The polynomial is represented as:
/// `a_n * x^n + a_{n-1} * x^{n-1} + ... + a_1 * x + a_0`
///
/// Every operation is exact; products are returned fully expanded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    /// Coefficients in descending order (highest degree first).
    pub(crate) coefficients: Vec<Rational>,
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, coeff) in self.coefficients.iter().enumerate() {
            let degree = self.coefficients.len() - 1 - i;

            if coeff.is_zero() {
                continue;
            }

            if !first {
                if coeff.is_positive() {
                    write!(f, " + ")?;
                } else {
                    write!(f, " - ")?;
                }
            } else if coeff.is_negative() {
                write!(f, "-")?;
            }
            first = false;

            let abs_coeff = coeff.abs();
            if degree == 0 || !abs_coeff.is_one() {
                write!(f, "{abs_coeff}")?;
            }

            if degree > 0 {
                write!(f, "x")?;
                if degree > 1 {
                    write!(f, "^{degree}")?;
                }
            }
        }

        if first {
            write!(f, "0")?;
        }

        Ok(())
    }
}

impl Polynomial {
    /// Creates a new polynomial from a vector of coefficients in descending order of degree.
    pub fn new(coefficients: Vec<Rational>) -> Self {
        Self { coefficients }
    }

    /// Creates a constant polynomial.
    pub fn constant(constant: Rational) -> Self {
        Self {
            coefficients: vec![constant],
        }
    }

    /// The monic linear factor `x - root`.
    pub fn root_factor(root: &Rational) -> Self {
        Self {
            coefficients: vec![Rational::one(), -root.clone()],
        }
    }

    /// Expands `∏ (x - root)` over all given roots.
    ///
    /// The empty product is the constant `1`.
    pub fn from_roots<'a>(roots: impl IntoIterator<Item = &'a Rational>) -> Self {
        roots
            .into_iter()
            .fold(Polynomial::constant(Rational::one()), |acc, root| {
                acc.mul(&Polynomial::root_factor(root))
            })
    }

    /// Returns the coefficients of the polynomial.
    pub fn coefficients(&self) -> &[Rational] {
        &self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// The degree of a zero polynomial is 0.
    pub fn degree(&self) -> usize {
        if self.coefficients.is_empty() {
            0
        } else {
            self.coefficients.len() - 1
        }
    }

    /// Coefficient of `x^power`; zero above the stored degree.
    pub fn nth(&self, power: usize) -> Rational {
        let len = self.coefficients.len();
        if power >= len {
            return Rational::zero();
        }
        self.coefficients[len - 1 - power].clone()
    }

    /// Checks if the polynomial is zero.
    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }

    /// Multiplies two polynomials using the naive algorithm.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Polynomial::constant(Rational::zero());
        }

        let product_len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut product = vec![Rational::zero(); product_len];

        for i in 0..self.coefficients.len() {
            for j in 0..other.coefficients.len() {
                product[i + j] += &self.coefficients[i] * &other.coefficients[j];
            }
        }

        Polynomial::new(product)
    }

    /// Multiplies each coefficient of the polynomial by a scalar.
    pub fn scalar_mul(&self, scalar: &Rational) -> Self {
        Polynomial::new(self.coefficients.iter().map(|x| x * scalar).collect())
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn evaluate(&self, x: &Rational) -> Rational {
        if self.coefficients.is_empty() {
            return Rational::zero();
        }

        let mut result = self.coefficients[0].clone();
        for coeff in &self.coefficients[1..] {
            result = result * x + coeff;
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{integer, ratio};

    fn poly(desc: &[i64]) -> Polynomial {
        Polynomial::new(desc.iter().map(|c| integer(*c)).collect())
    }

    #[test]
    fn test_basic_polynomial_creation() {
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.degree(), 2);
        assert_eq!(p.coefficients(), &[integer(1), integer(2), integer(3)]);
    }

    #[test]
    fn test_nth_reads_ascending_powers() {
        // 1x^2 + 2x + 3
        let p = poly(&[1, 2, 3]);
        assert_eq!(p.nth(0), integer(3));
        assert_eq!(p.nth(1), integer(2));
        assert_eq!(p.nth(2), integer(1));
        assert_eq!(p.nth(7), integer(0));
    }

    #[test]
    fn test_mul_expands() {
        // (x - 1)(x + 1) = x^2 - 1
        let p = poly(&[1, -1]).mul(&poly(&[1, 1]));
        assert_eq!(p, poly(&[1, 0, -1]));
        assert!(poly(&[0]).mul(&p).is_zero());
    }

    #[test]
    fn test_from_roots() {
        let roots = vec![integer(0), integer(1), integer(-1)];
        // x (x - 1)(x + 1) = x^3 - x
        assert_eq!(Polynomial::from_roots(&roots), poly(&[1, 0, -1, 0]));
        assert_eq!(
            Polynomial::from_roots(&Vec::<Rational>::new()),
            Polynomial::constant(integer(1))
        );
    }

    #[test]
    fn test_evaluate_and_scalar_mul() {
        let p = poly(&[1, 0, -1]);
        assert_eq!(p.evaluate(&integer(3)), integer(8));
        let half = ratio(1, 2).unwrap();
        assert_eq!(p.scalar_mul(&half).evaluate(&integer(3)), integer(4));
        assert_eq!(Polynomial::new(vec![]).evaluate(&integer(3)), integer(0));
    }

    #[test]
    fn test_display() {
        assert_eq!(poly(&[1, 0, -1]).to_string(), "x^2 - 1");
        assert_eq!(poly(&[-1, 2, 0]).to_string(), "-x^2 + 2x");
        assert_eq!(poly(&[0, 0]).to_string(), "0");
        let p = Polynomial::new(vec![ratio(1, 2).unwrap(), ratio(-3, 4).unwrap()]);
        assert_eq!(p.to_string(), "1/2x - 3/4");
    }
}
