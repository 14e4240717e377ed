//! Signed hexadecimal text, as accepted by [`Data::from_hex`](crate::Data::from_hex).
//!
//! The accepted form is `[-][0x]digits`.  Digits are packed two per byte,
//! most significant first.  When the digit count is odd the first digit is
//! emitted alone as a one-nibble byte.

use crate::bignum::Bignum;
use crate::error::{DataError, Result};

/// Maps one hex digit to its nibble value.
pub fn char_to_digit(c: char) -> Result<u8> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(DataError::InvalidHexDigit(c)),
    }
}

/// Hex text split into its sign and big-endian magnitude bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HexBytes {
    pub negative: bool,
    pub bytes: Vec<u8>,
}

/// Decodes `[-][0x]digits` into a sign and a byte sequence.
pub fn decode(text: &str) -> Result<HexBytes> {
    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let digits = rest.strip_prefix("0x").unwrap_or(rest);
    if digits.is_empty() {
        return Err(DataError::EmptyDigits);
    }

    let mut chars = digits.chars();
    let count = digits.chars().count();
    let mut bytes = Vec::with_capacity((count + 1) / 2);

    if count % 2 != 0 {
        if let Some(c) = chars.next() {
            bytes.push(char_to_digit(c)?);
        }
    }

    while let (Some(high), Some(low)) = (chars.next(), chars.next()) {
        bytes.push(char_to_digit(high)? << 4 | char_to_digit(low)?);
    }

    log::trace!(
        "decoded {} hex digits into {} bytes (negative: {})",
        count,
        bytes.len(),
        negative
    );
    Ok(HexBytes { negative, bytes })
}

/// Renders `value` as `[-]0x` followed by lowercase digits.
pub fn encode(value: &Bignum) -> String {
    let digits = value.to_hex_digits();
    match digits.strip_prefix('-') {
        Some(magnitude) => format!("-0x{}", magnitude),
        None => format!("0x{}", digits),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn check_digits() {
        assert_eq!(char_to_digit('0'), Ok(0));
        assert_eq!(char_to_digit('9'), Ok(9));
        assert_eq!(char_to_digit('a'), Ok(10));
        assert_eq!(char_to_digit('F'), Ok(15));
        assert_eq!(char_to_digit('g'), Err(DataError::InvalidHexDigit('g')));
        assert_eq!(char_to_digit('x'), Err(DataError::InvalidHexDigit('x')));
    }

    #[test]
    fn check_lone_leading_nibble() {
        let decoded = decode("A").unwrap();
        assert_eq!(decoded.bytes, vec![0x0a]);

        let decoded = decode("0xABC").unwrap();
        assert_eq!(decoded.bytes, vec![0x0a, 0xbc]);
        assert!(!decoded.negative);

        let decoded = decode("-1234").unwrap();
        assert_eq!(decoded.bytes, vec![0x12, 0x34]);
        assert!(decoded.negative);

        let decoded = decode("-0xA").unwrap();
        assert_eq!(decoded.bytes, vec![0x0a]);
        assert!(decoded.negative);
    }

    #[test]
    fn check_empty() {
        assert_eq!(decode(""), Err(DataError::EmptyDigits));
        assert_eq!(decode("-"), Err(DataError::EmptyDigits));
        assert_eq!(decode("0x"), Err(DataError::EmptyDigits));
        assert_eq!(decode("-0x"), Err(DataError::EmptyDigits));
    }

    #[test]
    fn check_invalid() {
        assert_eq!(decode("0xG1"), Err(DataError::InvalidHexDigit('G')));
        assert_eq!(decode("0X1A"), Err(DataError::InvalidHexDigit('X')));
        assert_eq!(decode("--1"), Err(DataError::InvalidHexDigit('-')));
        assert_eq!(decode("1 2"), Err(DataError::InvalidHexDigit(' ')));
    }

    #[test]
    fn check_encode() {
        assert_eq!(encode(&Bignum::from(26)), "0x1a");
        assert_eq!(encode(&Bignum::from(-26)), "-0x1a");
        assert_eq!(encode(&Bignum::new()), "0x0");
    }
}
