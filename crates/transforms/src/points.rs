// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Evaluation points, including the conventional point at infinity.

use crate::errors::{CookToomResult, PointSetError};
use ct_algebra::{integer, parse_rational, Rational};
use std::fmt;
use std::str::FromStr;

/// A single Cook–Toom evaluation point.
///
/// `Infinity` is never evaluated; it stands for "take the leading coefficient".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationPoint {
    Finite(Rational),
    Infinity,
}

impl EvaluationPoint {
    pub fn is_infinity(&self) -> bool {
        matches!(self, EvaluationPoint::Infinity)
    }
}

impl From<i64> for EvaluationPoint {
    fn from(value: i64) -> Self {
        EvaluationPoint::Finite(integer(value))
    }
}

impl From<Rational> for EvaluationPoint {
    fn from(value: Rational) -> Self {
        EvaluationPoint::Finite(value)
    }
}

impl FromStr for EvaluationPoint {
    type Err = PointSetError;

    /// Accepts `inf`, `infinity`, `∞`, or any rational literal (`-2`, `1/2`, `0.5`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "inf" | "infinity" | "∞" => Ok(EvaluationPoint::Infinity),
            _ => parse_rational(trimmed)
                .map(EvaluationPoint::Finite)
                .map_err(|e| PointSetError::Unparsable {
                    input: s.to_string(),
                    reason: e.to_string(),
                }),
        }
    }
}

impl fmt::Display for EvaluationPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationPoint::Finite(value) => write!(f, "{value}"),
            EvaluationPoint::Infinity => write!(f, "∞"),
        }
    }
}

/// Ordered evaluation points: `α - 1` pairwise distinct finite points followed
/// by the point at infinity.
///
/// The infinity point is always present, so `alpha()` is one more than the
/// number of finite points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationPointSet {
    finite: Vec<Rational>,
}

impl EvaluationPointSet {
    /// Builds a point set from tagged points.
    ///
    /// A trailing [`EvaluationPoint::Infinity`] is optional; it is appended when
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPointSet` when infinity appears before the end or more
    /// than once, or when two finite points coincide.
    pub fn new(points: Vec<EvaluationPoint>) -> CookToomResult<Self> {
        let len = points.len();
        let mut finite = Vec::with_capacity(len);

        for (index, point) in points.into_iter().enumerate() {
            match point {
                EvaluationPoint::Finite(value) => finite.push(value),
                EvaluationPoint::Infinity if index + 1 == len => {}
                EvaluationPoint::Infinity => {
                    return Err(PointSetError::MisplacedInfinity { index, len }.into());
                }
            }
        }

        check_distinct(&finite)?;
        Ok(Self { finite })
    }

    /// Builds a point set from finite points only; infinity is implicit.
    pub fn from_finite<I, T>(points: I) -> CookToomResult<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Rational>,
    {
        let finite: Vec<Rational> = points.into_iter().map(Into::into).collect();
        check_distinct(&finite)?;
        Ok(Self { finite })
    }

    /// Convenience constructor for integer points, e.g. `&[0, 1, -1]`.
    pub fn from_integers(points: &[i64]) -> CookToomResult<Self> {
        Self::from_finite(points.iter().map(|p| integer(*p)))
    }

    /// Parses each literal with [`EvaluationPoint::from_str`].
    pub fn parse<S: AsRef<str>>(literals: &[S]) -> CookToomResult<Self> {
        let points = literals
            .iter()
            .map(|s| s.as_ref().parse::<EvaluationPoint>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(points)
    }

    /// Parses a comma-separated list such as `"0, 1, -1, 1/2, inf"`.
    pub fn parse_list(list: &str) -> CookToomResult<Self> {
        let literals: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        Self::parse(&literals)
    }

    /// Number of points including infinity (`α`).
    pub fn alpha(&self) -> usize {
        self.finite.len() + 1
    }

    /// The `α - 1` finite points, in order.
    pub fn finite_points(&self) -> &[Rational] {
        &self.finite
    }

    /// All `α` points, infinity last.
    pub fn iter(&self) -> impl Iterator<Item = EvaluationPoint> + '_ {
        self.finite
            .iter()
            .cloned()
            .map(EvaluationPoint::Finite)
            .chain(std::iter::once(EvaluationPoint::Infinity))
    }
}

impl fmt::Display for EvaluationPointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.iter().map(|p| p.to_string()).collect();
        write!(f, "({})", rendered.join(", "))
    }
}

fn check_distinct(points: &[Rational]) -> Result<(), PointSetError> {
    for (i, a) in points.iter().enumerate() {
        if let Some(offset) = points[i + 1..].iter().position(|b| a == b) {
            return Err(PointSetError::DuplicatePoints {
                first: i,
                second: i + 1 + offset,
                value: a.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CookToomError;
    use ct_algebra::ratio;

    #[test]
    fn test_infinity_is_implicit() {
        let implicit = EvaluationPointSet::from_integers(&[0, 1, -1]).unwrap();
        let explicit = EvaluationPointSet::new(vec![
            EvaluationPoint::Finite(integer(0)),
            EvaluationPoint::Finite(integer(1)),
            EvaluationPoint::from(ratio(-1, 1).unwrap()),
            EvaluationPoint::Infinity,
        ])
        .unwrap();
        assert_eq!(implicit, explicit);
        assert_eq!(implicit.alpha(), 4);
        assert_eq!(implicit.finite_points().len(), 3);
        assert!(implicit.iter().last().unwrap().is_infinity());
    }

    #[test]
    fn test_duplicate_points_rejected() {
        let err = EvaluationPointSet::from_integers(&[0, 1, 2, 1]).unwrap_err();
        match err {
            CookToomError::InvalidPointSet { message } => {
                assert!(message.contains("points 1 and 3"), "{message}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_equal_fractions_are_duplicates() {
        let err = EvaluationPointSet::parse(&["1/2", "0", "2/4"]).unwrap_err();
        assert!(matches!(err, CookToomError::InvalidPointSet { .. }));
    }

    #[test]
    fn test_misplaced_infinity_rejected() {
        let err = EvaluationPointSet::parse(&["0", "inf", "1"]).unwrap_err();
        assert!(matches!(err, CookToomError::InvalidPointSet { .. }));
        let err = EvaluationPointSet::parse(&["inf", "inf"]).unwrap_err();
        assert!(matches!(err, CookToomError::InvalidPointSet { .. }));
    }

    #[test]
    fn test_parse_list() {
        let set = EvaluationPointSet::parse_list("0, 1, -1, 1/2, -0.5, ∞").unwrap();
        assert_eq!(set.alpha(), 6);
        assert_eq!(set.finite_points()[3], ratio(1, 2).unwrap());
        assert_eq!(set.finite_points()[4], ratio(-1, 2).unwrap());
        assert_eq!(set.to_string(), "(0, 1, -1, 1/2, -1/2, ∞)");

        assert!(EvaluationPointSet::parse_list("0, x").is_err());
    }

    #[test]
    fn test_only_infinity() {
        let set = EvaluationPointSet::parse_list("inf").unwrap();
        assert_eq!(set.alpha(), 1);
        assert!(set.finite_points().is_empty());
        assert_eq!(EvaluationPointSet::from_integers(&[]).unwrap(), set);
    }
}
