// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use ct_algebra::{integer, ratio, Matrix, Rational};
use ct_transforms::{
    check_convolution, check_filter, direct_filter, synthesize, verify, CookToomError,
    EvaluationPoint, EvaluationPointSet, Framing, ScalingPolicy, TransformTriple,
};

fn int_matrix(rows: &[&[i64]]) -> Matrix<Rational> {
    Matrix::new(
        rows.iter()
            .map(|r| r.iter().map(|v| integer(*v)).collect())
            .collect(),
    )
    .unwrap()
}

#[test]
fn test_f23_end_to_end() -> Result<()> {
    let points = EvaluationPointSet::parse_list("0, 1, -1")?;
    let triple = synthesize(&points, 2, 3, ScalingPolicy::default())?;

    assert_eq!(triple.output_transform().shape(), (2, 4));
    assert_eq!(triple.filter_transform().shape(), (4, 3));
    assert_eq!(triple.input_transform().shape(), (4, 4));

    let y = verify(&triple, 2, 3)?;
    assert_eq!(y.get(0).unwrap().to_string(), "d0*g0 + d1*g1 + d2*g2");
    assert_eq!(y.get(1).unwrap().to_string(), "d1*g0 + d2*g1 + d3*g2");
    Ok(())
}

#[test]
fn test_published_f23_table_verifies() -> Result<()> {
    // The widely used F(2,3) table differs from ours in the sign of the last
    // row of BT and the last column of AT.
    let half = ratio(1, 2)?;
    let g = Matrix::new(vec![
        vec![integer(1), integer(0), integer(0)],
        vec![half.clone(), half.clone(), half.clone()],
        vec![half.clone(), -half.clone(), half],
        vec![integer(0), integer(0), integer(1)],
    ])?;
    let triple = TransformTriple::from_parts(
        int_matrix(&[&[1, 1, 1, 0], &[0, 1, -1, -1]]),
        g,
        int_matrix(&[&[1, 0, -1, 0], &[0, 1, 1, 0], &[0, -1, 1, 0], &[0, 1, 0, -1]]),
        Matrix::identity(4),
        2,
        3,
        ScalingPolicy::AbsorbInFilter,
    )?;
    check_filter(&triple)?;
    check_convolution(&triple)?;
    Ok(())
}

#[test]
fn test_f43_on_five_points() -> Result<()> {
    let points = EvaluationPointSet::from_integers(&[0, 1, -1, 2, -2])?;
    for policy in ScalingPolicy::ALL {
        let triple = synthesize(&points, 4, 3, policy)?;
        assert_eq!(triple.output_transform().shape(), (4, 6));
        let y = check_filter(&triple)?;
        assert_eq!(y, direct_filter(4, 3));
        assert_eq!(y.get(3).unwrap().to_string(), "d3*g0 + d4*g1 + d5*g2");
        check_convolution(&triple)?;
    }
    Ok(())
}

#[test]
fn test_f43_integral_input_transform() -> Result<()> {
    let points = EvaluationPointSet::from_integers(&[0, 1, -1, 2, -2])?;
    let triple = synthesize(&points, 4, 3, ScalingPolicy::AbsorbInFilter)?;
    assert!(triple.input_transform().is_integral());
    assert!(triple.output_transform().is_integral());
    assert!(!triple.filter_transform().is_integral());
    Ok(())
}

#[test]
fn test_fractional_points() -> Result<()> {
    let points = EvaluationPointSet::parse_list("0, 1/2, -1/2, 2, inf")?;
    assert_eq!(points.alpha(), 5);
    for policy in ScalingPolicy::ALL {
        let triple = synthesize(&points, 3, 3, policy)?;
        check_filter(&triple)?;
        check_convolution(&triple)?;
    }
    Ok(())
}

#[test]
fn test_policies_agree() -> Result<()> {
    let points = EvaluationPointSet::from_integers(&[0, 1, -1, 3])?;
    for framing in [Framing::Filter, Framing::Convolution] {
        let outputs = ScalingPolicy::ALL
            .iter()
            .map(|policy| {
                let triple = synthesize(&points, 3, 3, *policy)?;
                framing.apply(&triple)
            })
            .collect::<Result<Vec<_>, CookToomError>>()?;
        assert!(outputs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(outputs[0], framing.direct(3, 3));
    }
    Ok(())
}

#[test]
fn test_pass_through_filter() -> Result<()> {
    let points = EvaluationPointSet::from_integers(&[0, 1, -1])?;
    for policy in ScalingPolicy::ALL {
        let triple = synthesize(&points, 4, 1, policy)?;
        assert_eq!(triple.filter_transform().shape(), (4, 1));

        // With g = [1] the transform is the identity on d.
        let g = triple.filter_transform().mul(&Matrix::column(vec![integer(1)]))?;
        let mut input = Matrix::diagonal(g.column_vec(0)?).mul(triple.input_transform())?;
        if policy == ScalingPolicy::ExposeAsSeparateFactor {
            input = triple.scale_diagonal().inverse()?.mul(&input)?;
        }
        assert_eq!(triple.output_transform().mul(&input)?, Matrix::identity(4));
    }
    Ok(())
}

#[test]
fn test_invalid_inputs() {
    let duplicate = EvaluationPointSet::new(vec![
        EvaluationPoint::Finite(integer(0)),
        EvaluationPoint::Finite(integer(2)),
        EvaluationPoint::Finite(integer(0)),
    ]);
    assert!(matches!(duplicate, Err(CookToomError::InvalidPointSet { .. })));

    let points = EvaluationPointSet::from_integers(&[0, 1, -1]).unwrap();
    assert!(matches!(
        synthesize(&points, 3, 3, ScalingPolicy::default()),
        Err(CookToomError::SizeMismatch { .. })
    ));
    assert!(matches!(
        "7".parse::<ScalingPolicy>(),
        Err(CookToomError::UnsupportedPolicy { .. })
    ));
}
