// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use ct_algebra::{integer, ratio, Expr, Matrix, Polynomial, Rational};
use num_traits::Zero;
use proptest::prelude::*;

fn arb_rational() -> impl Strategy<Value = Rational> {
    (-20i64..=20, 1i64..=6).prop_map(|(n, d)| ratio(n, d).unwrap())
}

fn arb_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<Rational>> {
    prop::collection::vec(prop::collection::vec(arb_rational(), cols), rows)
        .prop_map(|data| Matrix::new(data).unwrap())
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    prop::collection::vec((-3i64..=3, 0usize..3, 0usize..3), 0..4).prop_map(|terms| {
        terms.into_iter().fold(Expr::zero(), |acc, (c, i, j)| {
            acc + Expr::constant(integer(c)) * Expr::symbol("d", i) * Expr::symbol("g", j)
        })
    })
}

proptest! {
    #[test]
    fn from_roots_vanishes_at_roots(roots in prop::collection::vec(arb_rational(), 0..5)) {
        let p = Polynomial::from_roots(roots.iter());
        prop_assert_eq!(p.degree(), roots.len());
        for root in &roots {
            prop_assert!(p.evaluate(root).is_zero());
        }
    }

    #[test]
    fn transpose_reverses_products(a in arb_matrix(2, 3), b in arb_matrix(3, 4)) {
        let ab = a.mul(&b).unwrap();
        prop_assert_eq!(ab.transpose(), b.transpose().mul(&a.transpose()).unwrap());
    }

    #[test]
    fn inverse_when_invertible(m in arb_matrix(3, 3)) {
        if let Ok(inv) = m.inverse() {
            prop_assert_eq!(m.mul(&inv).unwrap(), Matrix::identity(3));
            prop_assert_eq!(inv.mul(&m).unwrap(), Matrix::identity(3));
        }
    }

    #[test]
    fn expressions_form_a_ring(a in arb_expr(), b in arb_expr(), c in arb_expr()) {
        prop_assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
        prop_assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b.clone() + a.clone() * c
        );
        prop_assert!((a.clone() - a).is_zero());
    }
}
