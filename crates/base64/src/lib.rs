//! Base64 encoding and decoding over caller-owned buffers.
//!
//! The buffer functions ([`encode_into`], [`decode_into`]) never allocate;
//! the caller sizes the output with [`encoded_capacity`] or [`decoded_len`].
//! [`encode`] and [`decode`] are owned conveniences built on the same
//! routines.
//!
//! # Example
//!
//! ```
//! use base64_buf::{decode, encode};
//!
//! let data = b"hello world";
//! let encoded = encode(data);
//! assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
//! assert_eq!(decode(&encoded).unwrap(), data);
//! ```

pub mod cli;
mod constants;
mod decode;
mod encode;

pub use constants::{ALPHABET, DECODE_TABLE, FIRST_SYMBOL, INVALID, LAST_SYMBOL, PAD};
pub use decode::{decode, decode_into, decoded_len};
pub use encode::{encode, encode_into};

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base64Error {
    /// The base64 text length is not a multiple of 4.
    #[error("INVALID_BASE64_LENGTH: {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// A byte outside `'+'..='z'` or outside the alphabet.
    #[error("INVALID_BASE64_STRING: byte 0x{byte:02x} at position {position}")]
    InvalidCharacter { position: usize, byte: u8 },
    /// The caller's output buffer cannot hold the result.
    #[error("output buffer too small: {required} bytes required, {available} available")]
    OutputTooSmall { required: usize, available: usize },
}

impl Base64Error {
    /// True for every error caused by the input text itself.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Base64Error::InvalidLength { .. } | Base64Error::InvalidCharacter { .. }
        )
    }
}

/// Number of base64 characters produced for `n` input bytes: `4 * ceil(n / 3)`.
pub const fn encoded_len(n: usize) -> usize {
    n.div_ceil(3) * 4
}

/// Output capacity [`encode_into`] requires for `n` input bytes, including
/// the NUL terminator.
pub const fn encoded_capacity(n: usize) -> usize {
    encoded_len(n) + 1
}
