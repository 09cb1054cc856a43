//! Parity-check matrices in symplectic form.
//!
//! A parity-check matrix is a [`BitMatrix`] whose rows are symplectic vectors. In block
//! layout the first half of the columns are X-bits and the second half Z-bits; in
//! interleaved layout column `2i` is the X-bit and column `2i + 1` the Z-bit of qubit
//! `i`.

use crate::{Result, SymplecticError, SymplecticVector};
use gf2::{Bit, BitMatrix};
use itertools::Itertools;
use std::io::{self, Write};

fn block_row(row: &[Bit]) -> String {
    let (x_bits, z_bits) = row.split_at(row.len() / 2);
    let render = |bits: &[Bit]| -> String { bits.iter().map(|bit| if bit.is_one() { '1' } else { '_' }).collect() };
    format!("{}|{}", render(x_bits), render(z_bits))
}

/// Renders a block-layout matrix one row per line, `_` for 0 and `1` for 1, with `|`
/// between the X-part and the Z-part.
///
/// ```
/// use gf2::BitMatrix;
/// use symplectic::to_block_string;
///
/// let matrix: BitMatrix = "1001|0110".parse().unwrap();
/// assert_eq!(to_block_string(&matrix), "1_|_1\n_1|1_");
/// ```
#[must_use]
pub fn to_block_string(matrix: &BitMatrix) -> String {
    matrix.rows().map(block_row).join("\n")
}

/// Writes [`to_block_string`] followed by `end`.
///
/// # Errors
///
/// Propagates errors from `writer`.
pub fn write_block<Writer: Write>(writer: &mut Writer, matrix: &BitMatrix, end: &str) -> io::Result<()> {
    write!(writer, "{}{end}", to_block_string(matrix))
}

/// Prints [`to_block_string`] followed by `end` to standard output.
///
/// # Errors
///
/// Propagates errors from writing to standard output.
pub fn print_block(matrix: &BitMatrix, end: &str) -> io::Result<()> {
    write_block(&mut io::stdout().lock(), matrix, end)
}

fn require_even_columns(matrix: &BitMatrix) -> Result<usize> {
    let column_count = matrix.column_count();
    if column_count % 2 == 1 {
        return Err(SymplecticError::OddLength(column_count));
    }
    Ok(column_count / 2)
}

/// Reorders interleaved columns `X0 Z0 X1 Z1 ..` into block layout `X0 X1 .. Z0 Z1 ..`.
///
/// Rows keep their order and content; only columns move.
///
/// ```
/// use gf2::BitMatrix;
/// use symplectic::interleaved_to_symplectic;
///
/// let interleaved: BitMatrix = "1100|0011".parse().unwrap();
/// let block = interleaved_to_symplectic(&interleaved).unwrap();
/// assert_eq!(block, "1010|0101".parse::<BitMatrix>().unwrap());
/// ```
///
/// # Errors
///
/// Returns [`SymplecticError::OddLength`] if the column count is odd.
pub fn interleaved_to_symplectic(matrix: &BitMatrix) -> Result<BitMatrix> {
    let qubit_count = require_even_columns(matrix)?;
    let columns: Vec<usize> = (0..qubit_count)
        .map(|qubit| 2 * qubit)
        .chain((0..qubit_count).map(|qubit| 2 * qubit + 1))
        .collect();
    Ok(matrix.select_columns(&columns)?)
}

/// Inverse of [`interleaved_to_symplectic`].
///
/// # Errors
///
/// Returns [`SymplecticError::OddLength`] if the column count is odd.
pub fn symplectic_to_interleaved(matrix: &BitMatrix) -> Result<BitMatrix> {
    let qubit_count = require_even_columns(matrix)?;
    let columns: Vec<usize> = (0..qubit_count)
        .flat_map(|qubit| [qubit, qubit_count + qubit])
        .collect();
    Ok(matrix.select_columns(&columns)?)
}

/// Row `row` of a block-layout matrix as a [`SymplecticVector`].
///
/// # Errors
///
/// Returns [`gf2::Gf2Error::RowOutOfRange`] for a missing row and
/// [`SymplecticError::OddLength`] if the column count is odd.
pub fn row_vector(matrix: &BitMatrix, row: usize) -> Result<SymplecticVector> {
    if row >= matrix.row_count() {
        return Err(gf2::Gf2Error::RowOutOfRange {
            row,
            row_count: matrix.row_count(),
        }
        .into());
    }
    SymplecticVector::from_bits(matrix.row(row).iter().copied())
}
