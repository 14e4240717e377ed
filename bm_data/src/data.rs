use core::cmp::Ordering;
use core::fmt;
use core::ops::{AddAssign, BitAndAssign, BitOrAssign, BitXorAssign, SubAssign};
use core::str::FromStr;

use num_traits::Zero;

use crate::bignum::Bignum;
use crate::bignum_ops::{export_bytes, import_bytes};
use crate::error::{DataError, Result};
use crate::hex;
use crate::sync::{ByteSync, NoSync};

/// An arbitrary-width signed integer holding protocol field data.
///
/// A `Data` owns its magnitude and an `arith` flag telling whether the
/// magnitude currently means anything.  Every read of the magnitude goes
/// through [`Data::magnitude`], which refuses invalid values with
/// [`DataError::InvalidOperand`].
///
/// The `S` parameter is the byte-export hook: it sees the new magnitude after
/// construction and after every mutation.  The default, [`NoSync`], does
/// nothing.
///
/// # Panics
///
/// The comparison operators and the `*Assign` operators cannot report errors
/// and panic when an operand is invalid.  Use [`Data::try_eq`],
/// [`Data::try_cmp`] and the named methods to get a `Result` instead.
pub struct Data<S = NoSync> {
    value: Bignum,
    arith: bool,
    sync: S,
}

// Constructors
impl<S: ByteSync + Default> Data<S> {
    pub fn new() -> Self {
        Self::from_parts(Bignum::new(), S::default())
    }

    pub fn from_int<T: Into<Bignum>>(n: T) -> Self {
        Self::from_parts(n.into(), S::default())
    }

    /// Builds a value from a big-endian unsigned byte buffer.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut value = Bignum::new();
        import_bytes(&mut value, bytes);
        Self::from_parts(value, S::default())
    }

    /// Parses `[-][0x]digits`.
    ///
    /// An odd number of digits makes the first digit a byte of its own.  The
    /// resulting bytes are imported as an unsigned magnitude, which is then
    /// negated if the text started with `-`.
    pub fn from_hex(text: &str) -> Result<Self> {
        let decoded = hex::decode(text)?;
        let mut value = Bignum::new();
        import_bytes(&mut value, &decoded.bytes);
        if decoded.negative {
            value = -value;
        }
        Ok(Self::from_parts(value, S::default()))
    }
}

impl<S: ByteSync> Data<S> {
    /// Builds a value around an existing hook state, running the hook once.
    pub fn from_parts(value: Bignum, mut sync: S) -> Self {
        sync.export_bytes(&value);
        Data {
            value,
            arith: true,
            sync,
        }
    }

    pub fn arith(&self) -> bool {
        self.arith
    }

    /// Marks whether the magnitude holds meaningful numeric content.
    ///
    /// Clearing the flag does not touch the magnitude.
    pub fn set_arith(&mut self, arith: bool) {
        self.arith = arith;
    }

    /// The magnitude, if this value is arithmetic.
    pub fn magnitude(&self) -> Result<&Bignum> {
        if self.arith {
            Ok(&self.value)
        } else {
            log::debug!("rejected read of a non-arithmetic value");
            Err(DataError::InvalidOperand)
        }
    }

    pub fn sync(&self) -> &S {
        &self.sync
    }

    pub fn is_zero(&self) -> Result<bool> {
        Ok(self.magnitude()?.is_zero())
    }

    pub fn is_negative(&self) -> Result<bool> {
        Ok(self.magnitude()?.is_negative())
    }

    fn assign(&mut self, value: Bignum) {
        self.value = value;
        self.sync.export_bytes(&self.value);
    }
}

// Mutation
impl<S: ByteSync> Data<S> {
    pub fn set<T: Into<Bignum>>(&mut self, n: T) {
        self.assign(n.into());
    }

    pub fn set_bytes(&mut self, bytes: &[u8]) {
        let mut value = Bignum::new();
        import_bytes(&mut value, bytes);
        self.assign(value);
    }

    /// Copies `other`'s magnitude into `self`.
    ///
    /// The copy happens even when `other` is not arithmetic, and `self.arith`
    /// is left as it was.
    pub fn set_from<T>(&mut self, other: &Data<T>) {
        self.assign(other.value.clone());
    }

    pub fn add<A: ByteSync, B: ByteSync>(&mut self, src1: &Data<A>, src2: &Data<B>) -> Result<()> {
        let result = src1.magnitude()? + src2.magnitude()?;
        self.assign(result);
        Ok(())
    }

    pub fn sub<A: ByteSync, B: ByteSync>(&mut self, src1: &Data<A>, src2: &Data<B>) -> Result<()> {
        let result = src1.magnitude()? - src2.magnitude()?;
        self.assign(result);
        Ok(())
    }

    pub fn bit_and<A: ByteSync, B: ByteSync>(&mut self, src1: &Data<A>, src2: &Data<B>) -> Result<()> {
        let result = src1.magnitude()? & src2.magnitude()?;
        self.assign(result);
        Ok(())
    }

    pub fn bit_or<A: ByteSync, B: ByteSync>(&mut self, src1: &Data<A>, src2: &Data<B>) -> Result<()> {
        let result = src1.magnitude()? | src2.magnitude()?;
        self.assign(result);
        Ok(())
    }

    pub fn bit_xor<A: ByteSync, B: ByteSync>(&mut self, src1: &Data<A>, src2: &Data<B>) -> Result<()> {
        let result = src1.magnitude()? ^ src2.magnitude()?;
        self.assign(result);
        Ok(())
    }

    pub fn bit_neg<A: ByteSync>(&mut self, src: &Data<A>) -> Result<()> {
        let result = !src.magnitude()?;
        self.assign(result);
        Ok(())
    }

    /// `self = !self`.
    pub fn bit_neg_in_place(&mut self) -> Result<()> {
        let result = !self.magnitude()?;
        self.assign(result);
        Ok(())
    }

    fn combine_in_place<T: ByteSync>(
        &mut self,
        rhs: &Data<T>,
        op: fn(&Bignum, &Bignum) -> Bignum,
    ) -> Result<()> {
        let result = op(self.magnitude()?, rhs.magnitude()?);
        self.assign(result);
        Ok(())
    }
}

// Accessors
//
// The native getters truncate: only the low bits of the 2's complement
// representation are kept, without any range check.
impl<S: ByteSync> Data<S> {
    pub fn get_uint(&self) -> Result<u32> {
        let value = self.magnitude()?;
        let n = value.to_u32_wrapping();
        trace_lossy(value, Bignum::from(n));
        Ok(n)
    }

    pub fn get_int(&self) -> Result<i32> {
        let value = self.magnitude()?;
        let n = value.to_i32_wrapping();
        trace_lossy(value, Bignum::from(n));
        Ok(n)
    }

    pub fn get_u64(&self) -> Result<u64> {
        let value = self.magnitude()?;
        let n = value.to_u64_wrapping();
        trace_lossy(value, Bignum::from(n));
        Ok(n)
    }

    pub fn get_i64(&self) -> Result<i64> {
        let value = self.magnitude()?;
        let n = value.to_i64_wrapping();
        trace_lossy(value, Bignum::from(n));
        Ok(n)
    }

    pub fn try_eq<T: ByteSync>(&self, other: &Data<T>) -> Result<bool> {
        Ok(self.magnitude()? == other.magnitude()?)
    }

    pub fn try_cmp<T: ByteSync>(&self, other: &Data<T>) -> Result<Ordering> {
        Ok(self.magnitude()?.cmp(other.magnitude()?))
    }

    pub fn to_dec_string(&self) -> Result<String> {
        Ok(self.magnitude()?.to_string())
    }

    /// Renders as `[-]0x` followed by lowercase hex digits.
    pub fn to_hex_string(&self) -> Result<String> {
        Ok(hex::encode(self.magnitude()?))
    }

    /// Writes the value to `buf` as big-endian 2's complement bytes, sign
    /// extended to the full buffer.
    ///
    /// Fails with `DataError::BufferTooSmall` when the value does not fit,
    /// leaving `buf` untouched.
    pub fn export_to(&self, buf: &mut [u8]) -> Result<()> {
        export_bytes(self.magnitude()?, buf)
    }
}

fn trace_lossy(value: &Bignum, truncated: Bignum) {
    if *value != truncated {
        log::trace!("native cast truncated {} to {}", value, truncated);
    }
}

fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{}", e),
    }
}

impl<S: ByteSync + Default> Default for Data<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ByteSync + Clone> Clone for Data<S> {
    /// The magnitude is only copied when `self` is arithmetic; a copy of an
    /// invalid value is invalid too and holds zero.
    fn clone(&self) -> Self {
        let value = if self.arith {
            self.value.clone()
        } else {
            Bignum::new()
        };
        Data {
            value,
            arith: self.arith,
            sync: self.sync.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        let tmp = source.clone();
        *self = tmp;
    }
}

impl<S: fmt::Debug> fmt::Debug for Data<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut s = f.debug_struct("Data");
        if self.arith {
            s.field("value", &self.value);
        }
        s.field("arith", &self.arith).field("sync", &self.sync).finish()
    }
}

/// Decimal rendering.  A non-arithmetic value fails with `fmt::Error`.
impl<S: ByteSync> fmt::Display for Data<S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.magnitude() {
            Ok(value) => fmt::Display::fmt(value, f),
            Err(_) => Err(fmt::Error),
        }
    }
}

impl<S: ByteSync + Default> FromStr for Data<S> {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

macro_rules! impl_from_native {
    ($($t:ty),*) => {
        $(
            impl<S: ByteSync + Default> From<$t> for Data<S> {
                fn from(n: $t) -> Self {
                    Self::from_int(n)
                }
            }
        )*
    };
}

impl_from_native!(i32, u32, i64, u64);

impl<S: ByteSync, T: ByteSync> PartialEq<Data<T>> for Data<S> {
    fn eq(&self, other: &Data<T>) -> bool {
        or_panic(self.try_eq(other))
    }
}

impl<S: ByteSync, T: ByteSync> PartialOrd<Data<T>> for Data<S> {
    fn partial_cmp(&self, other: &Data<T>) -> Option<Ordering> {
        Some(or_panic(self.try_cmp(other)))
    }
}

impl<S: ByteSync, T: ByteSync> AddAssign<&Data<T>> for Data<S> {
    fn add_assign(&mut self, rhs: &Data<T>) {
        or_panic(self.combine_in_place(rhs, |a, b| a + b))
    }
}

impl<S: ByteSync, T: ByteSync> SubAssign<&Data<T>> for Data<S> {
    fn sub_assign(&mut self, rhs: &Data<T>) {
        or_panic(self.combine_in_place(rhs, |a, b| a - b))
    }
}

impl<S: ByteSync, T: ByteSync> BitAndAssign<&Data<T>> for Data<S> {
    fn bitand_assign(&mut self, rhs: &Data<T>) {
        or_panic(self.combine_in_place(rhs, |a, b| a & b))
    }
}

impl<S: ByteSync, T: ByteSync> BitOrAssign<&Data<T>> for Data<S> {
    fn bitor_assign(&mut self, rhs: &Data<T>) {
        or_panic(self.combine_in_place(rhs, |a, b| a | b))
    }
}

impl<S: ByteSync, T: ByteSync> BitXorAssign<&Data<T>> for Data<S> {
    fn bitxor_assign(&mut self, rhs: &Data<T>) {
        or_panic(self.combine_in_place(rhs, |a, b| a ^ b))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Data;
    use crate::sync::ByteSync;
    use core::fmt;
    use core::marker::PhantomData;
    use serde::de::{self, Visitor};
    use serde::ser::{self, Serialize, Serializer};
    use serde::{Deserialize, Deserializer};

    /// Serialized as signed `0x` hex text; non-arithmetic values refuse to
    /// serialize.
    impl<S: ByteSync> Serialize for Data<S> {
        fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
        where
            Z: Serializer,
        {
            match self.to_hex_string() {
                Ok(text) => serializer.serialize_str(&text),
                Err(e) => Err(ser::Error::custom(e)),
            }
        }
    }

    struct DataVisitor<S>(PhantomData<S>);

    impl<'de, S: ByteSync + Default> Deserialize<'de> for Data<S> {
        fn deserialize<D>(deserializer: D) -> Result<Data<S>, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(DataVisitor(PhantomData))
        }
    }

    impl<'de, S: ByteSync + Default> Visitor<'de> for DataVisitor<S> {
        type Value = Data<S>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string representing a signed hexadecimal number")
        }

        fn visit_str<E>(self, value: &str) -> Result<Data<S>, E>
        where
            E: de::Error,
        {
            Data::from_hex(value).map_err(de::Error::custom)
        }
    }
}
