use gf2::Gf2Error;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SymplecticError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymplecticError {
    /// A symplectic vector or matrix row must hold an X-half and a Z-half of equal length.
    #[error("symplectic data must have even length, got {0}")]
    OddLength(usize),

    #[error("qubit index {index} is out of range for {qubit_count} qubits")]
    InvalidIndex { index: usize, qubit_count: usize },

    #[error("qubit range {start}..{stop} is invalid for {qubit_count} qubits")]
    InvalidRange {
        start: usize,
        stop: usize,
        qubit_count: usize,
    },

    #[error("operand has {actual} bits but {required} are required")]
    OperandTooShort { required: usize, actual: usize },

    #[error("qubit count mismatch: {left} != {right}")]
    QubitCountMismatch { left: usize, right: usize },

    /// The joined columns of two components cannot be stacked.
    #[error("joined column count mismatch: first component has {first}, second has {second}")]
    ColumnCountMismatch { first: usize, second: usize },

    #[error("invalid Pauli character {0:?}")]
    InvalidPauliCharacter(char),

    #[error(transparent)]
    Matrix(#[from] Gf2Error),
}
