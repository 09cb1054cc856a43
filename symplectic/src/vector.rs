use crate::{Result, SymplecticError};
use gf2::{Bit, BitMatrix};
use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};
use std::str::FromStr;

const PAULI_LABELS: [char; 4] = ['I', 'X', 'Z', 'Y'];
const SWAPPED_PAULI_LABELS: [char; 4] = ['I', 'Z', 'X', 'Y'];

/// A Pauli operator on `n` qubits in symplectic form.
///
/// The vector holds `2n` bits over GF(2): bit `i` is the X-component on qubit `i` and
/// bit `n + i` the Z-component. A qubit with bits `(x, z)` carries
///
/// | `(x, z)` | Pauli |
/// |----------|-------|
/// | `(0, 0)` | I     |
/// | `(1, 0)` | X     |
/// | `(0, 1)` | Z     |
/// | `(1, 1)` | Y     |
///
/// Phases are not tracked. The length is always even.
///
/// # Examples
///
/// ```
/// use symplectic::{SymplecticVector, weight};
///
/// let pauli: SymplecticVector = "XIZY".parse().unwrap();
/// assert_eq!(pauli.qubit_count(), 4);
/// assert_eq!(weight(&pauli, &[]), 3);
/// assert_eq!(pauli.to_string(), "XIZY");
///
/// let from_bits = SymplecticVector::from_bits([1u8, 0, 0, 1, 0, 0, 1, 1]).unwrap();
/// assert_eq!(from_bits, pauli);
/// ```
#[must_use]
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct SymplecticVector {
    bits: Vec<Bit>,
}

impl SymplecticVector {
    /// The identity operator on `qubit_count` qubits.
    pub fn zeros(qubit_count: usize) -> Self {
        Self {
            bits: vec![Bit::ZERO; 2 * qubit_count],
        }
    }

    /// Creates a vector from its `2n` bits, X-part first. Integers are reduced modulo 2.
    ///
    /// # Errors
    ///
    /// Returns [`SymplecticError::OddLength`] if the number of bits is odd.
    pub fn from_bits<Bits>(bits: Bits) -> Result<Self>
    where
        Bits: IntoIterator,
        Bits::Item: Into<Bit>,
    {
        let bits: Vec<Bit> = bits.into_iter().map(Into::into).collect();
        if bits.len() % 2 == 1 {
            return Err(SymplecticError::OddLength(bits.len()));
        }
        Ok(Self { bits })
    }

    /// # Errors
    ///
    /// Returns [`SymplecticError::QubitCountMismatch`] if the halves differ in length.
    pub fn from_parts<XBits, ZBits>(x_bits: XBits, z_bits: ZBits) -> Result<Self>
    where
        XBits: IntoIterator,
        XBits::Item: Into<Bit>,
        ZBits: IntoIterator,
        ZBits::Item: Into<Bit>,
    {
        let mut bits: Vec<Bit> = x_bits.into_iter().map(Into::into).collect();
        let left = bits.len();
        bits.extend(z_bits.into_iter().map(Into::into));
        let right = bits.len() - left;
        if left != right {
            return Err(SymplecticError::QubitCountMismatch { left, right });
        }
        Ok(Self { bits })
    }

    #[must_use]
    pub fn qubit_count(&self) -> usize {
        self.bits.len() / 2
    }

    /// Number of bits, `2 * qubit_count()`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    #[must_use]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    #[must_use]
    pub fn x_part(&self) -> &[Bit] {
        &self.bits[..self.qubit_count()]
    }

    #[must_use]
    pub fn z_part(&self) -> &[Bit] {
        &self.bits[self.qubit_count()..]
    }

    /// # Panics
    ///
    /// Panics if `qubit >= self.qubit_count()`.
    pub fn x(&self, qubit: usize) -> Bit {
        self.x_part()[qubit]
    }

    /// # Panics
    ///
    /// Panics if `qubit >= self.qubit_count()`.
    pub fn z(&self, qubit: usize) -> Bit {
        self.z_part()[qubit]
    }

    /// The Pauli on `qubit` as `2 * z + x`, i.e. I=0, X=1, Z=2, Y=3.
    ///
    /// # Panics
    ///
    /// Panics if `qubit >= self.qubit_count()`.
    #[must_use]
    pub fn pauli_index(&self, qubit: usize) -> u8 {
        2 * self.z(qubit).as_u8() + self.x(qubit).as_u8()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.bits.iter().all(|bit| bit.is_zero())
    }
}

impl Index<usize> for SymplecticVector {
    type Output = Bit;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bits[index]
    }
}

impl TryFrom<Vec<Bit>> for SymplecticVector {
    type Error = SymplecticError;

    fn try_from(bits: Vec<Bit>) -> Result<Self> {
        if bits.len() % 2 == 1 {
            return Err(SymplecticError::OddLength(bits.len()));
        }
        Ok(Self { bits })
    }
}

impl From<SymplecticVector> for Vec<Bit> {
    fn from(vector: SymplecticVector) -> Self {
        vector.bits
    }
}

impl std::fmt::Display for SymplecticVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_pauli_label(self, false))
    }
}

impl std::fmt::Debug for SymplecticVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SymplecticVector({self})")
    }
}

impl FromStr for SymplecticVector {
    type Err = SymplecticError;

    /// Parses a Pauli label such as `"XIZY"`, one character per qubit.
    fn from_str(s: &str) -> Result<Self> {
        let qubit_count = s.chars().count();
        let mut vector = Self::zeros(qubit_count);
        for (qubit, symbol) in s.chars().enumerate() {
            let (x, z) = match symbol {
                'I' => (false, false),
                'X' => (true, false),
                'Z' => (false, true),
                'Y' => (true, true),
                other => return Err(SymplecticError::InvalidPauliCharacter(other)),
            };
            vector.bits[qubit] = x.into();
            vector.bits[qubit_count + qubit] = z.into();
        }
        Ok(vector)
    }
}

/// Which qubits [`slice`] keeps.
///
/// `Indices` keeps the listed qubits in the order listed; `Range` keeps the half-open
/// range `start..stop` in ascending order, with `start` defaulting to `0` and `stop` to
/// the qubit count. Standard ranges and index collections convert into a selection:
///
/// ```
/// use symplectic::QubitSelection;
///
/// assert_eq!(QubitSelection::from(1..3), QubitSelection::Range { start: Some(1), stop: Some(3) });
/// assert_eq!(QubitSelection::from(..), QubitSelection::all());
/// assert_eq!(QubitSelection::from(vec![2, 0]), QubitSelection::Indices(vec![2, 0]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QubitSelection {
    Indices(Vec<usize>),
    Range { start: Option<usize>, stop: Option<usize> },
}

impl QubitSelection {
    #[must_use]
    pub fn all() -> Self {
        QubitSelection::Range { start: None, stop: None }
    }

    /// The selected qubit indices for a vector on `qubit_count` qubits.
    ///
    /// # Errors
    ///
    /// Returns [`SymplecticError::InvalidIndex`] for a listed index outside the qubit
    /// range and [`SymplecticError::InvalidRange`] for a range that is reversed or runs
    /// past the last qubit.
    pub fn resolve(&self, qubit_count: usize) -> Result<Vec<usize>> {
        match self {
            QubitSelection::Indices(indices) => {
                if let Some(&index) = indices.iter().find(|&&index| index >= qubit_count) {
                    return Err(SymplecticError::InvalidIndex { index, qubit_count });
                }
                Ok(indices.clone())
            }
            QubitSelection::Range { start, stop } => {
                let (start, stop) = (start.unwrap_or(0), stop.unwrap_or(qubit_count));
                if start > stop || stop > qubit_count {
                    return Err(SymplecticError::InvalidRange {
                        start,
                        stop,
                        qubit_count,
                    });
                }
                Ok((start..stop).collect())
            }
        }
    }
}

impl From<Vec<usize>> for QubitSelection {
    fn from(indices: Vec<usize>) -> Self {
        QubitSelection::Indices(indices)
    }
}

impl From<&[usize]> for QubitSelection {
    fn from(indices: &[usize]) -> Self {
        QubitSelection::Indices(indices.to_vec())
    }
}

impl<const LENGTH: usize> From<[usize; LENGTH]> for QubitSelection {
    fn from(indices: [usize; LENGTH]) -> Self {
        QubitSelection::Indices(indices.to_vec())
    }
}

impl From<Range<usize>> for QubitSelection {
    fn from(range: Range<usize>) -> Self {
        QubitSelection::Range {
            start: Some(range.start),
            stop: Some(range.end),
        }
    }
}

impl From<RangeFrom<usize>> for QubitSelection {
    fn from(range: RangeFrom<usize>) -> Self {
        QubitSelection::Range {
            start: Some(range.start),
            stop: None,
        }
    }
}

impl From<RangeTo<usize>> for QubitSelection {
    fn from(range: RangeTo<usize>) -> Self {
        QubitSelection::Range {
            start: None,
            stop: Some(range.end),
        }
    }
}

impl From<RangeFull> for QubitSelection {
    fn from(_: RangeFull) -> Self {
        QubitSelection::all()
    }
}

/// Number of qubits on which `op` acts non-trivially, ignoring the qubits in
/// `skip_indices`.
///
/// Skipped indices outside `0..n` have no effect; skipping every qubit gives `0`.
///
/// ```
/// use symplectic::{SymplecticVector, weight};
///
/// let pauli: SymplecticVector = "XYIZ".parse().unwrap();
/// assert_eq!(weight(&pauli, &[]), 3);
/// assert_eq!(weight(&pauli, &[1, 2]), 2);
/// assert_eq!(weight(&pauli, &[0, 1, 2, 3]), 0);
/// ```
#[must_use]
pub fn weight(op: &SymplecticVector, skip_indices: &[usize]) -> usize {
    (0..op.qubit_count())
        .filter(|qubit| !skip_indices.contains(qubit))
        .filter(|&qubit| op.x(qubit).is_one() || op.z(qubit).is_one())
        .count()
}

/// One character per qubit from `{I, X, Z, Y}`; `swap_x_z` exchanges the X and Z
/// characters and leaves I and Y alone.
///
/// ```
/// use symplectic::{SymplecticVector, to_pauli_label};
///
/// let pauli = SymplecticVector::from_bits([1u8, 0, 1, 0, 1, 1]).unwrap();
/// assert_eq!(to_pauli_label(&pauli, false), "XZY");
/// assert_eq!(to_pauli_label(&pauli, true), "ZXY");
/// ```
#[must_use]
pub fn to_pauli_label(op: &SymplecticVector, swap_x_z: bool) -> String {
    let labels = if swap_x_z { SWAPPED_PAULI_LABELS } else { PAULI_LABELS };
    (0..op.qubit_count())
        .map(|qubit| labels[usize::from(op.pauli_index(qubit))])
        .collect()
}

/// Per-qubit Pauli indices `2 * z + x` (I=0, X=1, Z=2, Y=3).
#[must_use]
pub fn to_pauli_index_tuple(op: &SymplecticVector) -> Vec<u8> {
    (0..op.qubit_count()).map(|qubit| op.pauli_index(qubit)).collect()
}

/// The symplectic form on `n` qubits, the `2n x 2n` block matrix `[[0, I], [I, 0]]`.
///
/// ```
/// use gf2::BitMatrix;
/// use symplectic::omega;
///
/// assert_eq!(omega(2), "0010|0001|1000|0100".parse::<BitMatrix>().unwrap());
/// ```
pub fn omega(qubit_count: usize) -> BitMatrix {
    let mut matrix = BitMatrix::zeros(2 * qubit_count, 2 * qubit_count);
    for qubit in 0..qubit_count {
        matrix.set((qubit, qubit_count + qubit), Bit::ONE);
        matrix.set((qubit_count + qubit, qubit), Bit::ONE);
    }
    matrix
}

/// Restricts `op` to the selected qubits: their X-bits followed by their Z-bits.
///
/// ```
/// use symplectic::{SymplecticVector, slice};
///
/// let pauli: SymplecticVector = "XYZI".parse().unwrap();
/// assert_eq!(slice(&pauli, 1..3).unwrap().to_string(), "YZ");
/// assert_eq!(slice(&pauli, vec![2, 0]).unwrap().to_string(), "ZX");
/// assert_eq!(slice(&pauli, 2..).unwrap().to_string(), "ZI");
/// assert!(slice(&pauli, Vec::<usize>::new()).unwrap().is_empty());
/// ```
///
/// # Errors
///
/// Fails as [`QubitSelection::resolve`] does.
pub fn slice(op: &SymplecticVector, selection: impl Into<QubitSelection>) -> Result<SymplecticVector> {
    let qubits = selection.into().resolve(op.qubit_count())?;
    let x_bits = qubits.iter().map(|&qubit| op.x(qubit));
    let z_bits = qubits.iter().map(|&qubit| op.z(qubit));
    Ok(SymplecticVector {
        bits: x_bits.chain(z_bits).collect(),
    })
}

/// Copies `target` and overwrites the qubits in `indices` with the bits of `op`.
///
/// With `m = indices.len()`, bits `0..m` of `op` become the X-bits and bits `m..2m` the
/// Z-bits of the listed qubits, in order. This inverts [`slice`] for duplicate-free
/// indices.
///
/// ```
/// use symplectic::{SymplecticVector, replace_at};
///
/// let target: SymplecticVector = "IIII".parse().unwrap();
/// let op: SymplecticVector = "XY".parse().unwrap();
/// assert_eq!(replace_at(&[3, 1], &op, &target).unwrap().to_string(), "IYIX");
/// ```
///
/// # Errors
///
/// Returns [`SymplecticError::OperandTooShort`] if `op` has fewer than `2m` bits and
/// [`SymplecticError::InvalidIndex`] if an index is not a qubit of `target`.
pub fn replace_at(indices: &[usize], op: &SymplecticVector, target: &SymplecticVector) -> Result<SymplecticVector> {
    let m = indices.len();
    if op.len() < 2 * m {
        return Err(SymplecticError::OperandTooShort {
            required: 2 * m,
            actual: op.len(),
        });
    }
    let qubit_count = target.qubit_count();
    if let Some(&index) = indices.iter().find(|&&index| index >= qubit_count) {
        return Err(SymplecticError::InvalidIndex { index, qubit_count });
    }
    let mut result = target.clone();
    for (position, &qubit) in indices.iter().enumerate() {
        result.bits[qubit] = op.bits[position];
        result.bits[qubit_count + qubit] = op.bits[m + position];
    }
    Ok(result)
}

/// Tensor product of operators: all X-parts in order, then all Z-parts in order.
///
/// ```
/// use symplectic::{SymplecticVector, concat};
///
/// let left: SymplecticVector = "XZ".parse().unwrap();
/// let right: SymplecticVector = "Y".parse().unwrap();
/// assert_eq!(concat([&left, &right]).to_string(), "XZY");
/// ```
pub fn concat<'t, Operators>(ops: Operators) -> SymplecticVector
where
    Operators: IntoIterator<Item = &'t SymplecticVector>,
{
    let ops: Vec<&SymplecticVector> = ops.into_iter().collect();
    let x_bits = ops.iter().flat_map(|op| op.x_part().iter().copied());
    let z_bits = ops.iter().flat_map(|op| op.z_part().iter().copied());
    SymplecticVector {
        bits: x_bits.chain(z_bits).collect(),
    }
}

/// The symplectic inner product `x_l · z_r + z_l · x_r`, i.e. `left · omega · right`.
///
/// # Errors
///
/// Returns [`SymplecticError::QubitCountMismatch`] for operators of different sizes.
pub fn symplectic_product(left: &SymplecticVector, right: &SymplecticVector) -> Result<Bit> {
    if left.qubit_count() != right.qubit_count() {
        return Err(SymplecticError::QubitCountMismatch {
            left: left.qubit_count(),
            right: right.qubit_count(),
        });
    }
    let xz: Bit = left.x_part().iter().zip(right.z_part()).map(|(&x, &z)| x * z).sum();
    let zx: Bit = left.z_part().iter().zip(right.x_part()).map(|(&z, &x)| z * x).sum();
    Ok(xz + zx)
}

/// Whether the two Pauli operators commute.
///
/// ```
/// use symplectic::{SymplecticVector, commutes};
///
/// let xx: SymplecticVector = "XX".parse().unwrap();
/// let zz: SymplecticVector = "ZZ".parse().unwrap();
/// let zi: SymplecticVector = "ZI".parse().unwrap();
/// assert!(commutes(&xx, &zz).unwrap());
/// assert!(!commutes(&xx, &zi).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`SymplecticError::QubitCountMismatch`] for operators of different sizes.
pub fn commutes(left: &SymplecticVector, right: &SymplecticVector) -> Result<bool> {
    Ok(symplectic_product(left, right)?.is_zero())
}
