pub use crate::bignum::Bignum;
use crate::error::{DataError, Result};
use dashu_int::UBig;
use num_traits::Zero;

/// Sets `rop` from `buf`, read as a big-endian unsigned magnitude.  An empty
/// buffer imports as zero.
#[inline]
pub fn import_bytes(rop: &mut Bignum, buf: &[u8]) {
    *rop = Bignum::from(UBig::from_be_bytes(buf));
}

/// Exports `obj` to `v` as 2's complement, big-endian bytes.  If `v` is too
/// small to hold the result (sign bit included), returns
/// `DataError::BufferTooSmall` with the size needed.
pub fn export_bytes(obj: &Bignum, v: &mut [u8]) -> Result<()> {
    let size = obj.bit_length();
    if obj.is_zero() {
        for i in v.iter_mut() {
            *i = 0;
        }
        return Ok(());
    }

    // One additional bit is needed for the sign bit, except for -2^k which
    // fits exactly in k + 1 bits.
    let exact_negative_power = obj.is_negative() && obj.low_bits(size - 1) == UBig::ZERO;
    let bits_needed = if exact_negative_power { size } else { size + 1 };
    let byte_len_needed = (bits_needed + 7) >> 3;
    if v.len() < byte_len_needed {
        return Err(DataError::BufferTooSmall {
            needed: byte_len_needed,
        });
    }

    export_bytes_wrapping(obj, v);
    Ok(())
}

/// Exports the low `8 * v.len()` bits of `obj` to `v` as 2's complement,
/// big-endian bytes.  Higher bits are dropped.
pub fn export_bytes_wrapping(obj: &Bignum, v: &mut [u8]) {
    let low = obj.low_bits(v.len() * 8);
    let bytes = low.to_be_bytes();
    let offset = v.len() - bytes.len();

    for i in &mut v[..offset] {
        *i = 0;
    }
    v[offset..].copy_from_slice(&bytes);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_import() {
        let mut n = Bignum::new();
        import_bytes(&mut n, &[0x01, 0x00]);
        assert_eq!(n, Bignum::from(0x100));
        import_bytes(&mut n, &[0xff]);
        assert_eq!(n, Bignum::from(0xff));
        import_bytes(&mut n, &[]);
        assert_eq!(n, Bignum::new());
    }

    #[test]
    fn check_export() {
        let s: Bignum = !&Bignum::from(0x100);
        let mut buf = [0, 0, 0];
        export_bytes(&s, &mut buf).expect("buffer should be large enough");
        assert_eq!(buf, [0xFF, 0xFE, 0xFF]);
        export_bytes(&Bignum::new(), &mut []).unwrap();

        let mut buf = [0xAA; 2];
        export_bytes(&Bignum::from(0x7f), &mut buf).unwrap();
        assert_eq!(buf, [0x00, 0x7f]);
    }

    #[test]
    fn check_export_size() {
        let mut one = [0u8];
        assert_eq!(
            export_bytes(&Bignum::from(0x80), &mut one),
            Err(DataError::BufferTooSmall { needed: 2 })
        );
        export_bytes(&Bignum::from(-0x80), &mut one).unwrap();
        assert_eq!(one, [0x80]);
        assert_eq!(
            export_bytes(&Bignum::from(-0x81), &mut one),
            Err(DataError::BufferTooSmall { needed: 2 })
        );
    }

    #[test]
    fn check_export_wrapping() {
        let mut buf = [0u8; 2];
        export_bytes_wrapping(&Bignum::from(0x12345), &mut buf);
        assert_eq!(buf, [0x23, 0x45]);
        export_bytes_wrapping(&Bignum::from(-1), &mut buf);
        assert_eq!(buf, [0xff, 0xff]);
        export_bytes_wrapping(&Bignum::from(0x12345), &mut []);
    }
}
