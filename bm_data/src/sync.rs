use crate::bignum::Bignum;
use crate::bignum_ops::export_bytes_wrapping;

/// Keeps a derived representation in step with a [`Data`](crate::Data)
/// value.
///
/// `export_bytes` runs after construction and after every mutation, with the
/// freshly assigned magnitude.  Implementors typically refresh a cached
/// fixed-width byte encoding from it.
pub trait ByteSync {
    fn export_bytes(&mut self, value: &Bignum);
}

/// The plain value: nothing to keep in sync.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoSync;

impl ByteSync for NoSync {
    #[inline(always)]
    fn export_bytes(&mut self, _value: &Bignum) {}
}

/// A cached `N`-byte big-endian 2's complement encoding of the value.
///
/// Values wider than `8 * N` bits keep their low bits only, the same
/// wraparound a fixed-width header field applies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FixedBytes<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FixedBytes<N> {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_array(self) -> [u8; N] {
        self.bytes
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        FixedBytes { bytes: [0; N] }
    }
}

impl<const N: usize> ByteSync for FixedBytes<N> {
    fn export_bytes(&mut self, value: &Bignum) {
        export_bytes_wrapping(value, &mut self.bytes);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_fixed_bytes() {
        let mut cache = FixedBytes::<3>::default();
        assert_eq!(cache.as_bytes(), &[0, 0, 0]);

        cache.export_bytes(&Bignum::from(0x0a0b));
        assert_eq!(cache.to_array(), [0x00, 0x0a, 0x0b]);

        cache.export_bytes(&Bignum::from(-2));
        assert_eq!(cache.to_array(), [0xff, 0xff, 0xfe]);

        cache.export_bytes(&Bignum::from(0x1_02_03_04));
        assert_eq!(cache.to_array(), [0x02, 0x03, 0x04]);
    }
}
