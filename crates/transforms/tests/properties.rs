// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use ct_algebra::{integer, Matrix, Rational};
use ct_transforms::{
    check_convolution, check_filter, fraction_elimination, synthesize, vandermonde,
    EvaluationPointSet, LagrangeBasis, ScalingPolicy,
};
use num_traits::Signed;
use proptest::prelude::*;

/// Up to five distinct small integers, so that `α ≤ 6`.
fn arb_points() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-4i64..=4, 0..=5)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

/// Points together with an `(n, r)` split of `α`.
fn arb_problem() -> impl Strategy<Value = (Vec<i64>, usize, usize)> {
    arb_points().prop_flat_map(|points| {
        let alpha = points.len() + 1;
        (Just(points), 1..=alpha).prop_map(move |(points, n)| (points, n, alpha + 1 - n))
    })
}

fn rationals(points: &[i64]) -> Vec<Rational> {
    points.iter().map(|p| integer(*p)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn every_policy_matches_direct_formula((points, n, r) in arb_problem()) {
        let set = EvaluationPointSet::from_integers(&points).unwrap();
        for policy in ScalingPolicy::ALL {
            let triple = synthesize(&set, n, r, policy).unwrap();
            prop_assert_eq!(triple.output_transform().shape(), (n, set.alpha()));
            prop_assert_eq!(triple.filter_transform().shape(), (set.alpha(), r));
            prop_assert!(check_filter(&triple).is_ok());
            prop_assert!(check_convolution(&triple).is_ok());
        }
    }

    #[test]
    fn lagrange_basis_inverts_vandermonde(points in arb_points()) {
        let p = rationals(&points);
        let basis = LagrangeBasis::new(&p).unwrap();
        let v = vandermonde(&p, p.len(), p.len()).unwrap();
        prop_assert_eq!(v.mul(&basis.interpolation_matrix()).unwrap(), Matrix::identity(p.len()));
        for (i, p_i) in p.iter().enumerate() {
            for j in 0..p.len() {
                let expected = if i == j { integer(1) } else { integer(0) };
                prop_assert_eq!(basis.evaluate_basis(j, p_i), expected);
            }
        }
    }

    #[test]
    fn scale_matrix_has_non_negative_lead(points in arb_points()) {
        let set = EvaluationPointSet::from_integers(&points).unwrap();
        let f = fraction_elimination(&set).unwrap().into_matrix();
        prop_assert!(!f.get(0, 0).is_negative());
        prop_assert_eq!(f.mul(&f.inverse().unwrap()).unwrap(), Matrix::identity(set.alpha()));
    }

    #[test]
    fn repeated_point_is_rejected(mut points in arb_points(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!points.is_empty());
        let duplicate = points[pick.index(points.len())];
        points.push(duplicate);
        prop_assert!(EvaluationPointSet::from_integers(&points).is_err());
    }
}
