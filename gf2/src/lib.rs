//! Linear algebra over the binary field GF(2).
//!
//! [`Bit`] is the field element, [`BitMatrix`] a dense row-major matrix of bits,
//! and [`rank`] computes the GF(2) rank of a matrix by Gaussian elimination over
//! rows packed into machine words. [`OperationTracker`] is an explicit counter that
//! callers may thread through the rank engine to count row operations.

pub mod bit;
pub use bit::Bit;

pub mod error;
pub use error::{Gf2Error, Result};

pub mod matrix;
pub use matrix::{BitMatrix, row_stacked};

pub mod rank;
pub use rank::{WORD_BITS, rank, rank_tracked};

pub mod tracker;
pub use tracker::OperationTracker;

#[cfg(feature = "serde")]
mod serde;
