use thiserror::Error;

/// Failure kinds raised by [`Data`](crate::Data) and its helpers.
///
/// Every variant is a contract violation by the caller; none of them is
/// retried or recovered from inside this crate.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DataError {
    /// An operand does not hold a meaningful numeric value.
    #[error("invalid operand: value is not arithmetic")]
    InvalidOperand,
    /// A character outside `0-9A-Fa-f` was found in hex text.
    #[error("invalid hex digit {0:?}")]
    InvalidHexDigit(char),
    /// No hex digits were left after stripping the sign and `0x` prefix.
    #[error("hex string has no digits")]
    EmptyDigits,
    /// The destination buffer cannot hold the exported value.
    #[error("buffer too small: {needed} bytes needed")]
    BufferTooSmall { needed: usize },
}

pub type Result<T> = std::result::Result<T, DataError>;
