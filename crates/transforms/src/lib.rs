// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Cook–Toom / Winograd minimal filtering transforms.
//!
//! Given `α - 1` distinct finite evaluation points (the point at infinity is
//! always the `α`-th), an output length `n` and a filter length `r` with
//! `α = n + r - 1`, this crate synthesizes the exact rational matrices of the
//! minimal filter `F(n, r)`:
//!
//! ```text
//! Y = AT · ((G · g) ⊙ (BT · d))
//! ```
//!
//! which needs only `α` multiplications instead of `n · r`.
//!
//! ## Pipeline
//!
//! 1. [`interpolation`] builds the augmented Vandermonde matrices `A_n`, `A_r`
//!    and the translation matrix `T`.
//! 2. [`lagrange`] derives the interpolation matrix `L` and the normalization
//!    factors `F_i`.
//! 3. [`scaling`] turns the `F_i` into the diagonal `f` that clears the
//!    denominators of `L`.
//! 4. [`synthesis`] composes the transforms, placing `f⁻¹` according to a
//!    [`ScalingPolicy`].
//! 5. [`verify`] applies the result to symbolic `d` and `g` and compares with
//!    the direct formula.
//!
//! ## Example
//!
//! ```
//! use ct_transforms::{check_filter, synthesize, EvaluationPointSet, ScalingPolicy};
//!
//! let points = EvaluationPointSet::from_integers(&[0, 1, -1]).unwrap();
//! let triple = synthesize(&points, 2, 3, ScalingPolicy::AbsorbInFilter).unwrap();
//! let y = check_filter(&triple).unwrap();
//! assert_eq!(y.to_string(), "Y[0] = d0*g0 + d1*g1 + d2*g2\nY[1] = d1*g0 + d2*g1 + d3*g2\n");
//! ```

pub mod config;
pub mod errors;
pub mod interpolation;
pub mod lagrange;
pub mod points;
pub mod policy;
pub mod scaling;
pub mod synthesis;
pub mod utils;
pub mod verify;

// Re-export commonly used types for convenience
pub use config::{ConfigOverrides, SynthesisConfig};
pub use errors::{CookToomError, CookToomResult, PointSetError, SizeError};
pub use interpolation::{augmented_vandermonde, translation_matrix, vandermonde};
pub use lagrange::LagrangeBasis;
pub use points::{EvaluationPoint, EvaluationPointSet};
pub use policy::ScalingPolicy;
pub use scaling::{fraction_elimination, FractionScaling};
pub use synthesis::{synthesize, TransformTriple};
pub use verify::{
    check_convolution, check_filter, direct_convolution, direct_filter, verify,
    verify_convolution, verify_filter, Framing, SymbolicVector,
};
