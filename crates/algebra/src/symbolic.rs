// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Symbolic multivariate polynomials over indexed symbols.
//!
//! An [`Expr`] is a sparse sum of rational multiples of monomials in symbols
//! such as `d[0]` or `g[2]`. It is stored in canonical form: like monomials are
//! merged and zero coefficients dropped after every operation, so two
//! expressions denote the same polynomial exactly when they compare equal.
//! Simplification is therefore structural and never needs a separate pass.

use crate::rational::Rational;
use num_traits::{One, Signed, Zero};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// An indexed symbol, rendered as `{base}{index}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol {
    base: String,
    index: usize,
}

impl Symbol {
    pub fn new(base: impl Into<String>, index: usize) -> Self {
        Self {
            base: base.into(),
            index,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.index)
    }
}

/// Product of symbols with positive exponents. The empty monomial is `1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Monomial(BTreeMap<Symbol, u32>);

impl Monomial {
    pub fn one() -> Self {
        Self(BTreeMap::new())
    }

    pub fn symbol(symbol: Symbol) -> Self {
        let mut powers = BTreeMap::new();
        powers.insert(symbol, 1);
        Self(powers)
    }

    pub fn is_one(&self) -> bool {
        self.0.is_empty()
    }

    /// Total degree.
    pub fn degree(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn powers(&self) -> impl Iterator<Item = (&Symbol, u32)> {
        self.0.iter().map(|(s, e)| (s, *e))
    }

    fn mul(&self, other: &Self) -> Self {
        let mut powers = self.0.clone();
        for (symbol, exp) in &other.0 {
            *powers.entry(symbol.clone()).or_insert(0) += exp;
        }
        Self(powers)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for (i, (symbol, exp)) in self.powers().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            write!(f, "{symbol}")?;
            if exp > 1 {
                write!(f, "^{exp}")?;
            }
        }
        Ok(())
    }
}

/// Canonical sparse polynomial in indexed symbols with rational coefficients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Expr {
    terms: BTreeMap<Monomial, Rational>,
}

impl Expr {
    /// The constant polynomial `value`.
    pub fn constant(value: Rational) -> Self {
        let mut expr = Self::default();
        expr.accumulate(Monomial::one(), value);
        expr
    }

    /// The single-symbol polynomial `base[index]`.
    pub fn symbol(base: &str, index: usize) -> Self {
        Self::term(Rational::one(), Monomial::symbol(Symbol::new(base, index)))
    }

    /// `coefficient · monomial`.
    pub fn term(coefficient: Rational, monomial: Monomial) -> Self {
        let mut expr = Self::default();
        expr.accumulate(monomial, coefficient);
        expr
    }

    /// Symbols `base0 .. base{len-1}` as expressions.
    pub fn symbols(base: &str, len: usize) -> Vec<Self> {
        (0..len).map(|i| Self::symbol(base, i)).collect()
    }

    /// Iterates `(monomial, coefficient)` in canonical order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &Rational)> {
        self.terms.iter()
    }

    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Coefficient of `monomial`, zero when absent.
    pub fn coefficient(&self, monomial: &Monomial) -> Rational {
        self.terms.get(monomial).cloned().unwrap_or_else(Rational::zero)
    }

    /// Highest total degree of any term; zero for constants.
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(Monomial::degree).max().unwrap_or(0)
    }

    /// Multiplies every coefficient by `scalar`.
    pub fn scale(&self, scalar: &Rational) -> Self {
        if scalar.is_zero() {
            return Self::default();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c * scalar))
                .collect(),
        }
    }

    fn accumulate(&mut self, monomial: Monomial, coefficient: Rational) {
        if coefficient.is_zero() {
            return;
        }
        let entry = self.terms.entry(monomial).or_insert_with(Rational::zero);
        *entry += coefficient;
        if entry.is_zero() {
            self.terms.retain(|_, c| !c.is_zero());
        }
    }

    fn add_ref(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (m, c) in &other.terms {
            result.accumulate(m.clone(), c.clone());
        }
        result
    }

    fn mul_ref(&self, other: &Self) -> Self {
        let mut result = Self::default();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.accumulate(m1.mul(m2), c1 * c2);
            }
        }
        result
    }
}

impl From<Rational> for Expr {
    fn from(value: Rational) -> Self {
        Expr::constant(value)
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, other: Expr) -> Expr {
        self.add_ref(&other)
    }
}

impl<'a> Add<&'a Expr> for &'a Expr {
    type Output = Expr;

    fn add(self, other: &'a Expr) -> Expr {
        self.add_ref(other)
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, other: Expr) -> Expr {
        self.add_ref(&-other)
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, other: Expr) -> Expr {
        self.mul_ref(&other)
    }
}

impl<'a> Mul<&'a Expr> for &'a Expr {
    type Output = Expr;

    fn mul(self, other: &'a Expr) -> Expr {
        self.mul_ref(other)
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr {
            terms: self.terms.into_iter().map(|(m, c)| (m, -c)).collect(),
        }
    }
}

impl Zero for Expr {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl One for Expr {
    fn one() -> Self {
        Self::constant(Rational::one())
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (monomial, coeff)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " {} ", if coeff.is_negative() { "-" } else { "+" })?;
            } else if coeff.is_negative() {
                write!(f, "-")?;
            }

            let abs_coeff = coeff.abs();
            if monomial.is_one() {
                write!(f, "{abs_coeff}")?;
            } else if abs_coeff.is_one() {
                write!(f, "{monomial}")?;
            } else {
                write!(f, "{abs_coeff}*{monomial}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rational::{integer, ratio};

    fn d(i: usize) -> Expr {
        Expr::symbol("d", i)
    }

    fn g(i: usize) -> Expr {
        Expr::symbol("g", i)
    }

    #[test]
    fn test_like_terms_merge_and_cancel() {
        let e = d(0) + d(1) + d(0);
        assert_eq!(e.num_terms(), 2);
        assert_eq!(
            e.coefficient(&Monomial::symbol(Symbol::new("d", 0))),
            integer(2)
        );
        let cancelled = e.clone() - e;
        assert!(cancelled.is_zero());
        assert_eq!(cancelled, Expr::zero());
    }

    #[test]
    fn test_product_expands_and_commutes() {
        let lhs = (d(0) + d(1)) * (g(0) - g(1));
        let rhs = d(0) * g(0) - d(0) * g(1) + g(0) * d(1) - g(1) * d(1);
        assert_eq!(lhs, rhs);
        assert_eq!(lhs.degree(), 2);
        assert_eq!(lhs.num_terms(), 4);
    }

    #[test]
    fn test_fractions_cancel_exactly() {
        let half = Expr::constant(ratio(1, 2).unwrap());
        let e = half.clone() * (d(0) + g(0)) + half * (d(0) - g(0));
        assert_eq!(e, d(0));
    }

    #[test]
    fn test_scale_and_constants() {
        let e = (d(0) + Expr::one()).scale(&integer(3));
        assert_eq!(e, d(0).scale(&integer(3)) + Expr::constant(integer(3)));
        assert!(e.scale(&integer(0)).is_zero());
        assert_eq!(Expr::from(integer(0)), Expr::zero());
    }

    #[test]
    fn test_display() {
        let e = d(0) * g(0) + d(1) * g(1) + d(2) * g(2);
        assert_eq!(e.to_string(), "d0*g0 + d1*g1 + d2*g2");
        let e = d(0).scale(&ratio(-1, 2).unwrap()) + d(1) * d(1) - Expr::one();
        assert_eq!(e.to_string(), "-1 - 1/2*d0 + d1^2");
        assert_eq!(Expr::zero().to_string(), "0");
    }

    #[test]
    fn test_reference_ops() {
        let a = d(0) + g(1);
        let b = g(1);
        assert_eq!(&a + &b, d(0) + g(1).scale(&integer(2)));
        assert_eq!(&a * &b, d(0) * g(1) + g(1) * g(1));
    }
}
