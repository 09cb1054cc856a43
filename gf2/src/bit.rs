use derive_more::{From, Into};
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Not, Sub, SubAssign};

/// An element of the binary field GF(2).
///
/// `Bit` is a thin wrapper over `bool` with field arithmetic spelled out as operators:
/// addition and subtraction are XOR, multiplication is AND, and every element is its
/// own additive inverse.
///
/// Conversions from integers keep only the lowest bit, so values coming from a
/// non-binary representation are reduced modulo 2 on the way in.
///
/// # Example
///
/// ```
/// use gf2::Bit;
///
/// assert_eq!(Bit::ONE + Bit::ONE, Bit::ZERO);
/// assert_eq!(Bit::ONE * Bit::ZERO, Bit::ZERO);
/// assert_eq!(Bit::from(3u8), Bit::ONE);
/// assert_eq!(Bit::from(-2i32), Bit::ZERO);
/// ```
#[must_use]
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
pub struct Bit(bool);

impl Bit {
    pub const ZERO: Bit = Bit(false);
    pub const ONE: Bit = Bit(true);

    pub const fn new(value: bool) -> Self {
        Bit(value)
    }

    #[must_use]
    pub const fn is_one(self) -> bool {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        !self.0
    }

    /// The bit as `0` or `1`.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0 as u8
    }
}

macro_rules! bit_from_integers {
    ($($integer:ty),*) => {
        $(
            impl From<$integer> for Bit {
                #[inline]
                fn from(value: $integer) -> Self {
                    Bit(value & 1 == 1)
                }
            }
        )*
    };
}

bit_from_integers!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl From<Bit> for u8 {
    fn from(value: Bit) -> Self {
        value.as_u8()
    }
}

impl Add for Bit {
    type Output = Bit;

    #[inline]
    fn add(self, other: Bit) -> Bit {
        Bit(self.0 ^ other.0)
    }
}

impl AddAssign for Bit {
    #[inline]
    fn add_assign(&mut self, other: Bit) {
        self.0 ^= other.0;
    }
}

impl Sub for Bit {
    type Output = Bit;

    #[inline]
    fn sub(self, other: Bit) -> Bit {
        self + other
    }
}

impl SubAssign for Bit {
    #[inline]
    fn sub_assign(&mut self, other: Bit) {
        *self += other;
    }
}

impl Mul for Bit {
    type Output = Bit;

    #[inline]
    fn mul(self, other: Bit) -> Bit {
        Bit(self.0 & other.0)
    }
}

impl MulAssign for Bit {
    #[inline]
    fn mul_assign(&mut self, other: Bit) {
        self.0 &= other.0;
    }
}

impl Neg for Bit {
    type Output = Bit;

    #[inline]
    fn neg(self) -> Bit {
        self
    }
}

impl Not for Bit {
    type Output = Bit;

    #[inline]
    fn not(self) -> Bit {
        Bit(!self.0)
    }
}

impl Sum for Bit {
    fn sum<I: Iterator<Item = Bit>>(iter: I) -> Bit {
        iter.fold(Bit::ZERO, Add::add)
    }
}

impl Product for Bit {
    fn product<I: Iterator<Item = Bit>>(iter: I) -> Bit {
        iter.fold(Bit::ONE, Mul::mul)
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl std::fmt::Debug for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Bit({})", self.as_u8())
    }
}
