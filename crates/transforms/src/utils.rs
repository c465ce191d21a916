// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::synthesis::TransformTriple;
use crate::verify::Framing;
use ct_algebra::{Matrix, Rational};
use std::fmt::Write;

/// Renders `matrix` under a `name (rows x cols):` heading with right-aligned
/// columns.
pub fn format_matrix(name: &str, matrix: &Matrix<Rational>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}x{}):", name, matrix.rows(), matrix.cols());

    // Determine max width for formatting
    let max_width = matrix
        .data()
        .iter()
        .flat_map(|row| row.iter())
        .map(|v| v.to_string().chars().count())
        .max()
        .unwrap_or(1);

    for row in matrix.data() {
        out.push_str("  [");
        for (i, val) in row.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{:>width$}", val.to_string(), width = max_width);
        }
        out.push_str("]\n");
    }
    out
}

/// All four artifacts, labelled for `framing`.
///
/// The filter framing shows `AT`, `G`, `BT`; the convolution framing shows
/// their transposes `A`, `G`, `B`. The scale diagonal `f` closes both.
pub fn format_triple(triple: &TransformTriple, framing: Framing) -> String {
    let sections = match framing {
        Framing::Filter => [
            ("AT", triple.output_transform().clone()),
            ("G", triple.filter_transform().clone()),
            ("BT", triple.input_transform().clone()),
            ("f", triple.scale_diagonal().clone()),
        ],
        Framing::Convolution => [
            ("A", triple.convolution_input()),
            ("G", triple.filter_transform().clone()),
            ("B", triple.convolution_output()),
            ("f", triple.scale_diagonal().clone()),
        ],
    };
    sections
        .iter()
        .map(|(name, matrix)| format_matrix(name, matrix))
        .collect::<Vec<_>>()
        .join("\n")
}
