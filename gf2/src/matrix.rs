use crate::{Bit, Gf2Error, Result};
use itertools::Itertools;
use std::ops::Index;
use std::str::FromStr;

/// A dense matrix over GF(2), stored row-major as one [`Bit`] per entry.
///
/// `BitMatrix` is the value type exchanged between the symplectic utilities and the
/// rank engine. Each row is a contiguous slice of bits. The packed-word representation
/// used for elimination lives only inside [`rank`](crate::rank).
///
/// # Construction
///
/// ```
/// use gf2::BitMatrix;
///
/// let zeros = BitMatrix::zeros(2, 3);
/// let identity = BitMatrix::identity(3);
/// let matrix = BitMatrix::from_rows([[1u8, 0, 1], [0, 1, 1]], 3).unwrap();
/// assert_eq!(matrix.shape(), (2, 3));
///
/// let parsed: BitMatrix = "101|011".parse().unwrap();
/// assert_eq!(parsed, matrix);
/// ```
///
/// # Linear algebra
///
/// ```
/// use gf2::BitMatrix;
///
/// let mut matrix = BitMatrix::identity(3);
/// matrix.add_into_row(0, 1);
/// assert_eq!(matrix.rank(), 3);
/// ```
#[must_use]
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitMatrix {
    bits: Vec<Bit>,
    row_count: usize,
    column_count: usize,
}

impl BitMatrix {
    pub fn zeros(row_count: usize, column_count: usize) -> Self {
        Self {
            bits: vec![Bit::ZERO; row_count * column_count],
            row_count,
            column_count,
        }
    }

    pub fn identity(dimension: usize) -> Self {
        let mut identity = Self::zeros(dimension, dimension);
        for index in 0..dimension {
            identity.set((index, index), Bit::ONE);
        }
        identity
    }

    /// Creates a matrix from nested iterators of values convertible to [`Bit`].
    ///
    /// Integer entries are reduced modulo 2.
    ///
    /// # Errors
    ///
    /// Returns [`Gf2Error::ShapeMismatch`] if a row does not have `column_count` entries.
    pub fn from_rows<Row, Rows>(rows: Rows, column_count: usize) -> Result<Self>
    where
        Row: IntoIterator,
        Row::Item: Into<Bit>,
        Rows: IntoIterator<Item = Row>,
    {
        let mut bits = Vec::new();
        let mut row_count = 0;
        for row in rows {
            let before = bits.len();
            bits.extend(row.into_iter().map(Into::into));
            let actual = bits.len() - before;
            if actual != column_count {
                return Err(Gf2Error::ShapeMismatch {
                    expected: column_count,
                    actual,
                });
            }
            row_count += 1;
        }
        Ok(Self {
            bits,
            row_count,
            column_count,
        })
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.row_count, self.column_count)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|bit| bit.is_zero())
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn get(&self, (row, column): (usize, usize)) -> Bit {
        self[(row, column)]
    }

    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    pub fn set(&mut self, (row, column): (usize, usize), to: impl Into<Bit>) {
        assert!(row < self.row_count && column < self.column_count);
        self.bits[row * self.column_count + column] = to.into();
    }

    /// # Panics
    ///
    /// Panics if `index >= self.row_count()`.
    #[must_use]
    pub fn row(&self, index: usize) -> &[Bit] {
        assert!(index < self.row_count);
        &self.bits[index * self.column_count..(index + 1) * self.column_count]
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Bit]> + '_ {
        (0..self.row_count).map(|index| self.row(index))
    }

    /// Returns the matrix made of the given columns, in the order given.
    ///
    /// Columns may repeat. The row order is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Gf2Error::ColumnOutOfRange`] if any column index is out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use gf2::BitMatrix;
    ///
    /// let matrix: BitMatrix = "110|011".parse().unwrap();
    /// let selected = matrix.select_columns(&[2, 0]).unwrap();
    /// assert_eq!(selected, "01|10".parse::<BitMatrix>().unwrap());
    /// ```
    pub fn select_columns(&self, columns: &[usize]) -> Result<Self> {
        if let Some(&column) = columns.iter().find(|&&column| column >= self.column_count) {
            return Err(Gf2Error::ColumnOutOfRange {
                column,
                column_count: self.column_count,
            });
        }
        let bits = self
            .rows()
            .flat_map(|row| columns.iter().map(move |&column| row[column]))
            .collect();
        Ok(Self {
            bits,
            row_count: self.row_count,
            column_count: columns.len(),
        })
    }

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn swap_rows(&mut self, left_row_index: usize, right_row_index: usize) {
        assert!(left_row_index < self.row_count && right_row_index < self.row_count);
        for column in 0..self.column_count {
            self.bits.swap(
                left_row_index * self.column_count + column,
                right_row_index * self.column_count + column,
            );
        }
    }

    /// After calling this method, row `i` holds what was previously row `permutation[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`Gf2Error::RowOutOfRange`] if the permutation references a missing row,
    /// or [`Gf2Error::ShapeMismatch`] if it does not have one entry per row.
    pub fn permute_rows(&mut self, permutation: &[usize]) -> Result<()> {
        if permutation.len() != self.row_count {
            return Err(Gf2Error::ShapeMismatch {
                expected: self.row_count,
                actual: permutation.len(),
            });
        }
        let mut bits = Vec::with_capacity(self.bits.len());
        for &source in permutation {
            if source >= self.row_count {
                return Err(Gf2Error::RowOutOfRange {
                    row: source,
                    row_count: self.row_count,
                });
            }
            bits.extend_from_slice(self.row(source));
        }
        self.bits = bits;
        Ok(())
    }

    /// Performs `row[to_index] += row[from_index]` over GF(2).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn add_into_row(&mut self, to_index: usize, from_index: usize) {
        assert!(to_index < self.row_count && from_index < self.row_count);
        for column in 0..self.column_count {
            let from = self.bits[from_index * self.column_count + column];
            self.bits[to_index * self.column_count + column] += from;
        }
    }

    /// Computes the rank over GF(2).
    ///
    /// ```
    /// use gf2::BitMatrix;
    ///
    /// assert_eq!(BitMatrix::identity(5).rank(), 5);
    /// assert_eq!(BitMatrix::zeros(5, 5).rank(), 0);
    /// ```
    #[must_use]
    pub fn rank(&self) -> usize {
        crate::rank(self)
    }
}

impl Index<(usize, usize)> for BitMatrix {
    type Output = Bit;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        assert!(row < self.row_count && column < self.column_count);
        &self.bits[row * self.column_count + column]
    }
}

/// Stacks matrices vertically, rows of the first matrix on top.
///
/// An empty input gives a `0 x 0` matrix.
///
/// # Errors
///
/// Returns [`Gf2Error::ShapeMismatch`] if the matrices do not all have the same column
/// count.
pub fn row_stacked<'t, Matrices>(matrices: Matrices) -> Result<BitMatrix>
where
    Matrices: IntoIterator<Item = &'t BitMatrix>,
{
    let mut bits = Vec::new();
    let mut column_count: Option<usize> = None;
    let mut row_count = 0;
    for matrix in matrices {
        let expected = *column_count.get_or_insert(matrix.column_count);
        if expected != matrix.column_count {
            return Err(Gf2Error::ShapeMismatch {
                expected,
                actual: matrix.column_count,
            });
        }
        bits.extend_from_slice(&matrix.bits);
        row_count += matrix.row_count;
    }
    Ok(BitMatrix {
        bits,
        row_count,
        column_count: column_count.unwrap_or(0),
    })
}

fn row_digits(row: &[Bit]) -> String {
    row.iter().map(|bit| if bit.is_one() { '1' } else { '0' }).collect()
}

/// One row of `0`/`1` digits per line; the alternate form `{:#}` writes `[row|row]`.
impl std::fmt::Display for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            write!(f, "[{}]", self.rows().map(row_digits).join("|"))
        } else {
            for row in self.rows() {
                writeln!(f, "{}", row_digits(row))?;
            }
            Ok(())
        }
    }
}

impl std::fmt::Debug for BitMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitMatrix(shape={:?},value={:#})", self.shape(), self)
    }
}

impl FromStr for BitMatrix {
    type Err = Gf2Error;

    /// Parses rows of `0`/`1` (or `.`/`_` for zero) separated by `|`, `;` or newlines.
    ///
    /// Spaces, commas and dashes inside a row are ignored, and surrounding brackets are
    /// accepted so that the alternate `Display` form parses back.
    fn from_str(s: &str) -> Result<Self> {
        let mut rows = Vec::<Vec<Bit>>::new();
        for row_string in s.split(['|', '[', ']', '(', ')', ';', '\n']) {
            let mut row = Vec::new();
            for symbol in row_string.chars() {
                match symbol {
                    '0' | '.' | '_' => row.push(Bit::ZERO),
                    '1' => row.push(Bit::ONE),
                    ' ' | '-' | ',' | '\r' | '\t' => {}
                    other => return Err(Gf2Error::InvalidCharacter(other)),
                }
            }
            if !row.is_empty() {
                rows.push(row);
            }
        }
        let column_count = rows.first().map_or(0, Vec::len);
        Self::from_rows(rows, column_count)
    }
}
