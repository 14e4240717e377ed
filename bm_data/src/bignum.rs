use core::cmp::Ordering;
use core::convert::TryFrom;
use core::fmt;
use core::ops::{Add, BitAnd, BitOr, BitXor, Neg, Not, Sub};

use dashu_int::ops::BitTest;
use dashu_int::{IBig, Sign, UBig};
use num_traits::Zero;

/// Arbitrary precision signed integer backing every [`Data`](crate::Data).
///
/// A thin adapter over `dashu_int::IBig` exposing the primitive set a field
/// value forwards to: construction, byte import, negation, addition, bitwise
/// logic, ordering, truncating casts and text rendering.
#[derive(Clone, Debug, Default)]
pub struct Bignum {
    inner: IBig,
}

impl Bignum {
    pub fn new() -> Self {
        Self::zero()
    }

    /// Lowercase hex digits, with a leading `-` for negative values.
    pub fn to_hex_digits(&self) -> String {
        self.inner.in_radix(16).to_string()
    }

    pub fn sign(&self) -> Sign {
        self.inner.sign()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.sign() == Sign::Negative
    }

    /// Number of bits in the absolute value, zero for zero.
    pub fn bit_length(&self) -> usize {
        self.inner.bit_len()
    }

    /// The low `bits` bits of the two's complement representation, as a
    /// non-negative number.
    pub fn low_bits(&self, bits: usize) -> UBig {
        let mask = (IBig::ONE << bits) - IBig::ONE;
        let (_, low) = (&self.inner & &mask).into_parts();
        low
    }
}

// Truncating casts to native integers
//
// These mirror a C-style cast: only the low bits of the two's complement
// representation survive, no range check is made.
impl Bignum {
    pub fn to_u64_wrapping(&self) -> u64 {
        // the masked value is below 2^64 so the conversion cannot fail
        u64::try_from(self.low_bits(64)).unwrap_or_default()
    }

    pub fn to_i64_wrapping(&self) -> i64 {
        self.to_u64_wrapping() as i64
    }

    pub fn to_u32_wrapping(&self) -> u32 {
        self.to_u64_wrapping() as u32
    }

    pub fn to_i32_wrapping(&self) -> i32 {
        self.to_u64_wrapping() as u32 as i32
    }
}

impl From<UBig> for Bignum {
    fn from(magnitude: UBig) -> Self {
        Bignum {
            inner: IBig::from(magnitude),
        }
    }
}

macro_rules! impl_from_native {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Bignum {
                fn from(n: $t) -> Self {
                    Bignum {
                        inner: IBig::from(n),
                    }
                }
            }
        )*
    };
}

impl_from_native!(i8, u8, i16, u16, i32, u32, i64, u64, i128, u128);

impl Zero for Bignum {
    fn zero() -> Self {
        Bignum::new()
    }

}

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for Bignum {}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

// Arithmetic operators
impl Add for &Bignum {
    type Output = Bignum;

    fn add(self, other: &Bignum) -> Bignum {
        Bignum {
            inner: &self.inner + &other.inner,
        }
    }
}

impl Sub for &Bignum {
    type Output = Bignum;

    fn sub(self, other: &Bignum) -> Bignum {
        Bignum {
            inner: &self.inner - &other.inner,
        }
    }
}

impl Neg for Bignum {
    type Output = Bignum;

    fn neg(self) -> Bignum {
        Bignum { inner: -self.inner }
    }
}

impl Neg for &Bignum {
    type Output = Bignum;

    fn neg(self) -> Bignum {
        Bignum {
            inner: -&self.inner,
        }
    }
}

// Bitwise operators, two's complement semantics on negative values
impl BitAnd for &Bignum {
    type Output = Bignum;

    fn bitand(self, other: &Bignum) -> Bignum {
        Bignum {
            inner: &self.inner & &other.inner,
        }
    }
}

impl BitOr for &Bignum {
    type Output = Bignum;

    fn bitor(self, other: &Bignum) -> Bignum {
        Bignum {
            inner: &self.inner | &other.inner,
        }
    }
}

impl BitXor for &Bignum {
    type Output = Bignum;

    fn bitxor(self, other: &Bignum) -> Bignum {
        Bignum {
            inner: &self.inner ^ &other.inner,
        }
    }
}

impl Not for &Bignum {
    type Output = Bignum;

    fn not(self) -> Bignum {
        Bignum {
            inner: !&self.inner,
        }
    }
}
