// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Arbitrary-precision rational scalars.

use crate::errors::{AlgebraError, AlgebraResult};
use num::BigRational;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Exact rational scalar used for every matrix entry.
pub type Rational = BigRational;

/// Lifts an integer into the rationals.
pub fn integer(value: i64) -> Rational {
    Rational::from_integer(BigInt::from(value))
}

/// Builds `numer / denom` in lowest terms.
///
/// # Errors
///
/// Returns [`AlgebraError::DivisionByZero`] when `denom` is zero.
pub fn ratio(numer: i64, denom: i64) -> AlgebraResult<Rational> {
    if denom == 0 {
        return Err(AlgebraError::DivisionByZero);
    }
    Ok(Rational::new(BigInt::from(numer), BigInt::from(denom)))
}

/// Raises `base` to a non-negative power by repeated squaring.
pub fn pow(base: &Rational, exp: usize) -> Rational {
    num_traits::pow(base.clone(), exp)
}

/// Parses an integer (`-3`), fraction (`1/2`) or finite decimal (`0.25`).
pub fn parse_rational(input: &str) -> AlgebraResult<Rational> {
    let s = input.trim();
    if s.is_empty() {
        return Err(AlgebraError::parse(input, "empty literal"));
    }

    if let Some((numer, denom)) = s.split_once('/') {
        let numer = parse_integer(input, numer)?;
        let denom = parse_integer(input, denom)?;
        if denom.is_zero() {
            return Err(AlgebraError::parse(input, "zero denominator"));
        }
        return Ok(Rational::new(numer, denom));
    }

    if let Some((whole, frac)) = s.split_once('.') {
        if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
            return Err(AlgebraError::parse(input, "malformed decimal fraction"));
        }
        let negative = whole.trim_start().starts_with('-');
        let whole = match whole.trim() {
            "" | "-" | "+" => BigInt::zero(),
            w => parse_integer(input, w)?,
        };
        let scale = num_traits::pow(BigInt::from(10u32), frac.len());
        let frac = parse_integer(input, frac)?;
        let magnitude = Rational::from_integer(whole.abs()) + Rational::new(frac, scale);
        return Ok(if negative { -magnitude } else { magnitude });
    }

    Ok(Rational::from_integer(parse_integer(input, s)?))
}

fn parse_integer(input: &str, digits: &str) -> AlgebraResult<BigInt> {
    digits
        .trim()
        .parse::<BigInt>()
        .map_err(|e| AlgebraError::parse(input, e.to_string()))
}
