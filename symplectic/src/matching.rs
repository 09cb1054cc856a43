//! Compatibility of two stabilizer components joined along shared legs.
//!
//! Restricting each component's parity-check matrix to the joined legs gives the
//! constraints that component places on those legs. Stacking both restrictions, the GF(2)
//! rank `r` of the result counts the independent constraints imposed jointly, and `2^-r`
//! is the fraction of Pauli configurations on the legs that satisfies both components.
//! Contraction planners use this ratio to estimate how selective a join will be before
//! performing it.

use crate::{Result, SymplecticError, interleaved_to_symplectic};
use gf2::{BitMatrix, OperationTracker, row_stacked};
use tracing::debug;

/// A piece of a tensor network that carries a stabilizer parity-check matrix.
///
/// Implemented by the contraction engine that owns legs and indices.
pub trait StabilizerComponent {
    type Leg;

    /// The parity-check matrix in interleaved layout (`X0 Z0 X1 Z1 ..`).
    fn parity_check_matrix(&self) -> &BitMatrix;

    /// Interleaved column indices of `legs`, in the order the legs are given.
    fn column_indices(&self, legs: &[Self::Leg]) -> Vec<usize>;
}

/// The columns of `component` belonging to `legs`, converted to block layout.
///
/// Legs are resolved one at a time and their columns concatenated in leg order.
///
/// # Errors
///
/// Fails if a resolved column is outside the parity-check matrix or if the legs resolve
/// to an odd number of columns.
pub fn joined_legs_matrix<Component>(component: &Component, legs: &[Component::Leg]) -> Result<BitMatrix>
where
    Component: StabilizerComponent + ?Sized,
{
    let columns: Vec<usize> = legs
        .iter()
        .flat_map(|leg| component.column_indices(std::slice::from_ref(leg)))
        .collect();
    let joined = component.parity_check_matrix().select_columns(&columns)?;
    interleaved_to_symplectic(&joined)
}

/// The joined-leg matrices of both components stacked, `first` on top.
///
/// # Errors
///
/// Returns [`SymplecticError::ColumnCountMismatch`] if the two restrictions do not have
/// the same number of columns, plus anything [`joined_legs_matrix`] returns.
pub fn stacked_join_matrix<First, Second>(
    first: &First,
    second: &Second,
    first_legs: &[First::Leg],
    second_legs: &[Second::Leg],
) -> Result<BitMatrix>
where
    First: StabilizerComponent + ?Sized,
    Second: StabilizerComponent + ?Sized,
{
    let first_matrix = joined_legs_matrix(first, first_legs)?;
    let second_matrix = joined_legs_matrix(second, second_legs)?;
    if first_matrix.column_count() != second_matrix.column_count() {
        return Err(SymplecticError::ColumnCountMismatch {
            first: first_matrix.column_count(),
            second: second_matrix.column_count(),
        });
    }
    Ok(row_stacked([&first_matrix, &second_matrix])?)
}

/// Fraction `2^-rank` of joint configurations on the joined legs consistent with both
/// components' stabilizers.
///
/// The two leg lists must name corresponding join points in the same order.
///
/// # Errors
///
/// Fails as [`stacked_join_matrix`] does.
pub fn matching_stabilizers_ratio<First, Second>(
    first: &First,
    second: &Second,
    first_legs: &[First::Leg],
    second_legs: &[Second::Leg],
) -> Result<f64>
where
    First: StabilizerComponent + ?Sized,
    Second: StabilizerComponent + ?Sized,
{
    let stacked = stacked_join_matrix(first, second, first_legs, second_legs)?;
    Ok(ratio_of(&stacked, gf2::rank(&stacked)))
}

/// Like [`matching_stabilizers_ratio`], counting the rank engine's row operations on
/// `tracker`.
///
/// # Errors
///
/// Fails as [`stacked_join_matrix`] does.
pub fn matching_stabilizers_ratio_tracked<First, Second>(
    first: &First,
    second: &Second,
    first_legs: &[First::Leg],
    second_legs: &[Second::Leg],
    tracker: &OperationTracker,
) -> Result<f64>
where
    First: StabilizerComponent + ?Sized,
    Second: StabilizerComponent + ?Sized,
{
    let stacked = stacked_join_matrix(first, second, first_legs, second_legs)?;
    Ok(ratio_of(&stacked, gf2::rank_tracked(&stacked, tracker)))
}

#[allow(clippy::cast_precision_loss)]
fn ratio_of(stacked: &BitMatrix, rank: usize) -> f64 {
    let ratio = (-(rank as f64)).exp2();
    debug!(
        rows = stacked.row_count(),
        columns = stacked.column_count(),
        rank,
        ratio,
        "matching stabilizers ratio"
    );
    ratio
}
