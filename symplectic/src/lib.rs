//! Symplectic representation of Pauli operators over GF(2).
//!
//! A Pauli operator on `n` qubits is a [`SymplecticVector`] of `2n` bits: the X-part
//! followed by the Z-part. Parity-check matrices are [`gf2::BitMatrix`] values whose
//! rows are such vectors, either in block layout (`XX..ZZ..`) or interleaved layout
//! (`XZXZ..`). On top of this sit the [`matching`] routines that compare two stabilizer
//! components along the legs joining them.

pub mod error;
pub use error::{Result, SymplecticError};

pub mod vector;
pub use vector::{
    QubitSelection, SymplecticVector, commutes, concat, omega, replace_at, slice, symplectic_product,
    to_pauli_index_tuple, to_pauli_label, weight,
};

pub mod matrix;
pub use matrix::{
    interleaved_to_symplectic, print_block, row_vector, symplectic_to_interleaved, to_block_string, write_block,
};

pub mod matching;
pub use matching::{
    StabilizerComponent, joined_legs_matrix, matching_stabilizers_ratio, matching_stabilizers_ratio_tracked,
    stacked_join_matrix,
};

#[cfg(feature = "serde")]
mod serde;
