// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! # Exact Algebra
//!
//! The arithmetic substrate for Cook–Toom transform synthesis. Nothing in this
//! crate ever touches floating point.
//!
//! ## Features
//!
//! - Arbitrary-precision rationals built on `num-bigint`.
//! - Dense univariate polynomials with exact expansion and coefficient extraction.
//! - Dense matrices over any ring: product, transpose, row/column insertion,
//!   elementwise product and Gauss–Jordan inversion over the rationals.
//! - Canonical symbolic polynomials over indexed symbols (`d0`, `g2`, ...), whose
//!   structural equality is algebraic identity.

pub mod errors;
pub mod matrix;
pub mod polynomial;
pub mod rational;
pub mod symbolic;

pub use errors::{AlgebraError, AlgebraResult};
pub use matrix::{Matrix, Scalar};
pub use polynomial::Polynomial;
pub use rational::{integer, parse_rational, pow, ratio, Rational};
pub use symbolic::{Expr, Monomial, Symbol};
