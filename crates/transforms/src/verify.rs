// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Symbolic verification of transform triples.
//!
//! The matrices are lifted into canonical symbolic polynomials and applied to
//! the abstract vectors `d` and `g`. Because [`Expr`] is canonical, comparing
//! the result with the direct formula is a proof of algebraic identity.

use crate::errors::{CookToomError, CookToomResult, SizeError};
use crate::policy::ScalingPolicy;
use crate::synthesis::TransformTriple;
use ct_algebra::{Expr, Matrix, Rational};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace};

/// Which of the two equivalent algorithms is being checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    /// `Y[i] = Σ_k d[i+k]·g[k]` for `i < n`, computed as `AT · ((G·g) ⊙ (BT·d))`.
    #[default]
    Filter,
    /// `s[k] = Σ_{i+j=k} d[i]·g[j]` for `k < α`, computed as `B · ((G·g) ⊙ (A·d))`.
    Convolution,
}

impl Framing {
    /// Applies the triple to symbolic inputs in this framing.
    pub fn apply(&self, triple: &TransformTriple) -> CookToomResult<SymbolicVector> {
        match self {
            Framing::Filter => verify_filter(triple),
            Framing::Convolution => verify_convolution(triple),
        }
    }

    /// The reference result for `F(n, r)` in this framing.
    pub fn direct(&self, n: usize, r: usize) -> SymbolicVector {
        match self {
            Framing::Filter => direct_filter(n, r),
            Framing::Convolution => direct_convolution(n, r),
        }
    }

    pub fn check(&self, triple: &TransformTriple) -> CookToomResult<SymbolicVector> {
        match self {
            Framing::Filter => check_filter(triple),
            Framing::Convolution => check_convolution(triple),
        }
    }
}

/// A named vector of canonical expressions, rendered one `name[i] = ...` line
/// per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolicVector {
    name: &'static str,
    entries: Vec<Expr>,
}

impl SymbolicVector {
    pub fn new(name: &'static str, entries: Vec<Expr>) -> Self {
        Self { name, entries }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn entries(&self) -> &[Expr] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Expr> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for SymbolicVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}[{i}] = {entry}", self.name)?;
        }
        Ok(())
    }
}

fn lift(matrix: &Matrix<Rational>) -> Matrix<Expr> {
    matrix.map(|v| Expr::constant(v.clone()))
}

fn symbolic_column(base: &str, len: usize) -> Matrix<Expr> {
    Matrix::column(Expr::symbols(base, len))
}

/// `G·g ⊙ x`, where `x` is the transformed data; under
/// [`ScalingPolicy::ExposeAsSeparateFactor`] `f⁻¹` is applied to `x` first.
fn elementwise_stage(
    triple: &TransformTriple,
    transformed_data: Matrix<Expr>,
) -> CookToomResult<Matrix<Expr>> {
    let transformed_data = match triple.policy() {
        ScalingPolicy::ExposeAsSeparateFactor => {
            lift(&triple.scale_diagonal().inverse()?).mul(&transformed_data)?
        }
        _ => transformed_data,
    };
    let g = symbolic_column("g", triple.r());
    let transformed_filter = lift(triple.filter_transform()).mul(&g)?;
    trace!("elementwise stage: {} products", transformed_filter.rows());
    Ok(transformed_filter.hadamard(&transformed_data)?)
}

fn into_vector(name: &'static str, column: Matrix<Expr>) -> CookToomResult<SymbolicVector> {
    Ok(SymbolicVector::new(name, column.column_vec(0)?))
}

/// Checks the caller's sizes against the triple, then runs [`verify_filter`].
///
/// # Errors
///
/// Returns `SizeMismatch` if `n` or `r` differ from the sizes the triple was
/// synthesized for.
pub fn verify(triple: &TransformTriple, n: usize, r: usize) -> CookToomResult<SymbolicVector> {
    if triple.n() != n || triple.r() != r {
        return Err(SizeError::TripleMismatch {
            n,
            r,
            built_n: triple.n(),
            built_r: triple.r(),
        }
        .into());
    }
    verify_filter(triple)
}

/// `Y = AT · ((G·g) ⊙ (BT·d))` with `d` of length `α` and `g` of length `r`.
pub fn verify_filter(triple: &TransformTriple) -> CookToomResult<SymbolicVector> {
    triple.check_shapes()?;
    let d = symbolic_column("d", triple.alpha());
    let transformed_data = lift(triple.input_transform()).mul(&d)?;
    let product = elementwise_stage(triple, transformed_data)?;
    let y = lift(triple.output_transform()).mul(&product)?;
    into_vector("Y", y)
}

/// `s = B · ((G·g) ⊙ (A·d))` with `A = ATᵀ`, `B = BTᵀ` and `d` of length `n`.
pub fn verify_convolution(triple: &TransformTriple) -> CookToomResult<SymbolicVector> {
    triple.check_shapes()?;
    let d = symbolic_column("d", triple.n());
    let transformed_data = lift(&triple.convolution_input()).mul(&d)?;
    let product = elementwise_stage(triple, transformed_data)?;
    let s = lift(&triple.convolution_output()).mul(&product)?;
    into_vector("s", s)
}

/// `Y[i] = Σ_{k<r} d[i+k]·g[k]` for `i < n`.
pub fn direct_filter(n: usize, r: usize) -> SymbolicVector {
    let entries = (0..n)
        .map(|i| {
            (0..r).fold(Expr::zero(), |acc, k| {
                acc + Expr::symbol("d", i + k) * Expr::symbol("g", k)
            })
        })
        .collect();
    SymbolicVector::new("Y", entries)
}

/// `s[k] = Σ_{i+j=k} d[i]·g[j]` for `k < n + r - 1`, with `d` of length `n`.
pub fn direct_convolution(n: usize, r: usize) -> SymbolicVector {
    let len = (n + r).saturating_sub(1);
    let entries = (0..len)
        .map(|k| {
            (0..n)
                .filter(|i| *i <= k && k - *i < r)
                .fold(Expr::zero(), |acc, i| {
                    acc + Expr::symbol("d", i) * Expr::symbol("g", k - i)
                })
        })
        .collect();
    SymbolicVector::new("s", entries)
}

fn compare(actual: SymbolicVector, expected: SymbolicVector) -> CookToomResult<SymbolicVector> {
    if actual.len() != expected.len() {
        return Err(CookToomError::verification(format!(
            "{} has {} entries, expected {}",
            actual.name(),
            actual.len(),
            expected.len()
        )));
    }
    if let Some(index) = (0..actual.len()).find(|&i| actual.entries[i] != expected.entries[i]) {
        return Err(CookToomError::verification(format!(
            "{name}[{index}] = {got}, expected {want}",
            name = actual.name(),
            got = actual.entries[index],
            want = expected.entries[index]
        )));
    }
    debug!("{} entries match the direct formula", actual.len());
    Ok(actual)
}

/// Runs [`verify_filter`] and requires the result to equal [`direct_filter`].
///
/// # Errors
///
/// Returns `Verification` naming the first mismatching output.
pub fn check_filter(triple: &TransformTriple) -> CookToomResult<SymbolicVector> {
    compare(verify_filter(triple)?, direct_filter(triple.n(), triple.r()))
}

/// Runs [`verify_convolution`] and requires the result to equal
/// [`direct_convolution`].
pub fn check_convolution(triple: &TransformTriple) -> CookToomResult<SymbolicVector> {
    compare(
        verify_convolution(triple)?,
        direct_convolution(triple.n(), triple.r()),
    )
}
