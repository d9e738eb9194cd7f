//! Base64 decoding with input validation.

use log::debug;

use crate::constants::{DECODE_TABLE, FIRST_SYMBOL, LAST_SYMBOL, PAD};
use crate::Base64Error;

/// Looks up the 6-bit value of the byte at `position`.
fn sextet(byte: u8, position: usize) -> Result<u8, Base64Error> {
    if !(FIRST_SYMBOL..=LAST_SYMBOL).contains(&byte) {
        debug!("base64 byte 0x{byte:02x} at {position} is out of range");
        return Err(Base64Error::InvalidCharacter { position, byte });
    }
    let value = DECODE_TABLE[(byte - FIRST_SYMBOL) as usize];
    if value < 0 {
        debug!("base64 byte 0x{byte:02x} at {position} is not in the alphabet");
        return Err(Base64Error::InvalidCharacter { position, byte });
    }
    Ok(value as u8)
}

/// Returns the number of bytes `ascii` decodes to.
///
/// Checks only the length; characters are validated by [`decode_into`].
/// One byte is subtracted for a trailing `'='` and one more if the
/// second-to-last character is `'='` as well.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidLength`] if the length is not a multiple
/// of 4.
///
/// # Example
///
/// ```
/// use base64_buf::decoded_len;
///
/// assert_eq!(decoded_len(b"QUJDREU="), Ok(5));
/// assert_eq!(decoded_len(b"TQ=="), Ok(1));
/// assert!(decoded_len(b"TQ=").is_err());
/// ```
pub fn decoded_len(ascii: &[u8]) -> Result<usize, Base64Error> {
    let length = ascii.len();
    if length % 4 != 0 {
        debug!("base64 input length {length} is not a multiple of 4");
        return Err(Base64Error::InvalidLength { length });
    }
    if length == 0 {
        return Ok(0);
    }

    let mut size = length / 4 * 3;
    if ascii[length - 1] == PAD {
        size -= 1;
    }
    if ascii[length - 2] == PAD {
        size -= 1;
    }
    Ok(size)
}

/// Decodes base64 text from `ascii` into `bin`.
///
/// `bin` must hold at least [`decoded_len`]`(ascii)` bytes. Returns the
/// number of bytes written.
///
/// # Errors
///
/// * [`Base64Error::InvalidLength`] if the length is not a multiple of 4.
/// * [`Base64Error::InvalidCharacter`] for any byte outside `'+'..='z'` or
///   outside the alphabet. The contents of `bin` are unspecified then.
/// * [`Base64Error::OutputTooSmall`] if `bin` is too short and every
///   character is valid. Malformed input is reported first.
///
/// # Example
///
/// ```
/// use base64_buf::decode_into;
///
/// let mut bin = [0u8; 6];
/// let len = decode_into(b"QUJDREU=", &mut bin).unwrap();
/// assert_eq!(&bin[..len], b"ABCDE");
///
/// assert!(decode_into(b"QUJDRE-=", &mut bin).is_err());
/// ```
pub fn decode_into(ascii: &[u8], bin: &mut [u8]) -> Result<usize, Base64Error> {
    let size = decoded_len(ascii)?;
    if bin.len() < size {
        for (position, &byte) in ascii.iter().enumerate() {
            sextet(byte, position)?;
        }
        debug!(
            "base64 decode of {} characters needs {} output bytes, got {}",
            ascii.len(),
            size,
            bin.len()
        );
        return Err(Base64Error::OutputTooSmall {
            required: size,
            available: bin.len(),
        });
    }

    for (group, quad) in ascii.chunks_exact(4).enumerate() {
        let position = group * 4;
        let sextet0 = sextet(quad[0], position)?;
        let sextet1 = sextet(quad[1], position + 1)?;
        let sextet2 = sextet(quad[2], position + 2)?;
        let sextet3 = sextet(quad[3], position + 3)?;

        let octets = [
            (sextet0 << 2) | (sextet1 >> 4),
            (sextet1 << 4) | (sextet2 >> 2),
            (sextet2 << 6) | sextet3,
        ];

        // Only the final group can be cut short by padding.
        let start = group * 3;
        let end = (start + 3).min(size);
        bin[start..end].copy_from_slice(&octets[..end - start]);
    }

    Ok(size)
}

/// Decodes base64 text into a freshly allocated buffer.
///
/// # Errors
///
/// Same as [`decode_into`], minus [`Base64Error::OutputTooSmall`].
///
/// # Example
///
/// ```
/// use base64_buf::decode;
///
/// assert_eq!(decode("aGVsbG8gd29ybGQ=").unwrap(), b"hello world");
/// assert!(decode("aGVsbG8").is_err());
/// ```
pub fn decode(ascii: impl AsRef<[u8]>) -> Result<Vec<u8>, Base64Error> {
    let ascii = ascii.as_ref();
    let mut bin = vec![0u8; decoded_len(ascii)?];
    decode_into(ascii, &mut bin)?;
    Ok(bin)
}
