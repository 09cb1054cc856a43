//! Rank over GF(2) by Gaussian elimination on bit-packed rows.
//!
//! Each row of the input matrix is packed into words, least-significant bit first:
//! column `c` lives in word `c / WORD_BITS` at bit `c % WORD_BITS`. Elimination then
//! XORs whole words at a time. The packed representation stays inside this module;
//! [`rank`] and [`rank_tracked`] are the entry points.
//!
//! ```compile_fail
//! use gf2::rank::PackedRows;
//! ```

use crate::{BitMatrix, OperationTracker};
use tracing::{debug, trace};

type Word = u64;

/// Number of columns packed into one word.
pub const WORD_BITS: usize = Word::BITS as usize;

/// Computes the rank of `matrix` over GF(2).
///
/// ```
/// use gf2::{BitMatrix, rank};
///
/// let matrix: BitMatrix = "110|011|101".parse().unwrap();
/// assert_eq!(rank(&matrix), 2);
/// ```
#[must_use]
pub fn rank(matrix: &BitMatrix) -> usize {
    PackedRows::from_matrix(matrix).rank()
}

/// Like [`rank`], incrementing `tracker` once per row addition performed.
#[must_use]
pub fn rank_tracked(matrix: &BitMatrix, tracker: &OperationTracker) -> usize {
    PackedRows::from_matrix(matrix).rank_tracked(tracker)
}

/// Working copy of a binary matrix with rows packed into words, reduced in place by a
/// single elimination.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct PackedRows {
    words: Vec<Word>,
    row_count: usize,
    column_count: usize,
    rowstride: usize,
}

impl PackedRows {
    fn zeros(row_count: usize, column_count: usize) -> Self {
        let rowstride = column_count.div_ceil(WORD_BITS);
        Self {
            words: vec![0; row_count * rowstride],
            row_count,
            column_count,
            rowstride,
        }
    }

    pub(crate) fn from_matrix(matrix: &BitMatrix) -> Self {
        let mut packed = Self::zeros(matrix.row_count(), matrix.column_count());
        for (row_index, row) in matrix.rows().enumerate() {
            let words = packed.row_mut(row_index);
            for (column, bit) in row.iter().enumerate() {
                if bit.is_one() {
                    words[column / WORD_BITS] |= 1 << (column % WORD_BITS);
                }
            }
        }
        packed
    }

    fn row(&self, index: usize) -> &[Word] {
        &self.words[index * self.rowstride..(index + 1) * self.rowstride]
    }

    fn row_mut(&mut self, index: usize) -> &mut [Word] {
        &mut self.words[index * self.rowstride..(index + 1) * self.rowstride]
    }

    fn swap_rows(&mut self, left_row_index: usize, right_row_index: usize) {
        if left_row_index != right_row_index {
            let (left, right) = self.row_pair_mut(left_row_index, right_row_index);
            left.swap_with_slice(right);
        }
    }

    /// Performs `row[to_index] ^= row[from_index]` on the words from `first_word` on.
    fn add_into_row_from_word(&mut self, to_index: usize, from_index: usize, first_word: usize) {
        assert_ne!(to_index, from_index);
        let (to, from) = self.row_pair_mut(to_index, from_index);
        for (to_word, from_word) in to[first_word..].iter_mut().zip(&from[first_word..]) {
            *to_word ^= *from_word;
        }
    }

    fn row_pair_mut(&mut self, first: usize, second: usize) -> (&mut [Word], &mut [Word]) {
        debug_assert_ne!(first, second);
        let stride = self.rowstride;
        let (low, high) = (first.min(second), first.max(second));
        let (head, tail) = self.words.split_at_mut(high * stride);
        let low_row = &mut head[low * stride..(low + 1) * stride];
        let high_row = &mut tail[..stride];
        if first < second {
            (low_row, high_row)
        } else {
            (high_row, low_row)
        }
    }

    /// Reduces the rows below each pivot and returns the number of pivots found.
    ///
    /// Rows above a pivot are left untouched, so the result is a row echelon form that
    /// is not reduced. Calling it again on the reduced rows returns the same rank.
    pub(crate) fn rank(&mut self) -> usize {
        self.eliminate(None)
    }

    pub(crate) fn rank_tracked(&mut self, tracker: &OperationTracker) -> usize {
        self.eliminate(Some(tracker))
    }

    fn eliminate(&mut self, tracker: Option<&OperationTracker>) -> usize {
        let mut pivot_row = 0;
        for column in 0..self.column_count {
            if pivot_row == self.row_count {
                break;
            }
            let word = column / WORD_BITS;
            let mask: Word = 1 << (column % WORD_BITS);
            let Some(pivot) = (pivot_row..self.row_count).find(|&row| self.row(row)[word] & mask != 0) else {
                continue;
            };
            trace!(column, pivot, pivot_row, "pivot found");
            self.swap_rows(pivot, pivot_row);
            for row in pivot_row + 1..self.row_count {
                if self.row(row)[word] & mask != 0 {
                    // Rows at or below the pivot are zero left of `column`.
                    self.add_into_row_from_word(row, pivot_row, word);
                    if let Some(tracker) = tracker {
                        tracker.increment(1);
                    }
                }
            }
            pivot_row += 1;
        }
        debug!(
            rows = self.row_count,
            columns = self.column_count,
            rank = pivot_row,
            "gf2 rank computed"
        );
        pivot_row
    }
}

impl std::fmt::Debug for PackedRows {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PackedRows(shape=({}, {}),words=[", self.row_count, self.column_count)?;
        for row_index in 0..self.row_count {
            if row_index > 0 {
                write!(f, "|")?;
            }
            for word in self.row(row_index) {
                write!(f, "{word:016x}")?;
            }
        }
        write!(f, "])")
    }
}
