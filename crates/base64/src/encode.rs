//! Base64 encoding.

use log::debug;

use crate::constants::{ALPHABET, PAD};
use crate::{encoded_capacity, encoded_len, Base64Error};

/// Runs the bit accumulator over `bin`, handing every output character
/// (padding included) to `emit`. Returns the number of characters emitted.
fn pack(bin: &[u8], mut emit: impl FnMut(u8)) -> usize {
    let mut acc: u16 = 0;
    let mut bits: u32 = 0;
    let mut written = 0;

    for &byte in bin {
        // At most 4 bits are pending here, so 12 fit in the accumulator.
        acc = (acc << 8) | byte as u16;
        bits += 8;
        while bits >= 6 {
            bits -= 6;
            emit(ALPHABET[((acc >> bits) & 0x3f) as usize]);
            written += 1;
        }
    }

    if bits > 0 {
        emit(ALPHABET[((acc << (6 - bits)) & 0x3f) as usize]);
        written += 1;
    }

    while written % 4 != 0 {
        emit(PAD);
        written += 1;
    }

    written
}

/// Encodes `bin` into `ascii`, followed by a NUL terminator.
///
/// `ascii` must hold at least [`encoded_capacity`]`(bin.len())` bytes, i.e.
/// `4 * ceil(bin.len() / 3) + 1`. Returns the number of base64 characters
/// written, not counting the terminator.
///
/// # Errors
///
/// Returns [`Base64Error::OutputTooSmall`] if `ascii` is shorter than
/// required. Nothing is written in that case.
///
/// # Example
///
/// ```
/// use base64_buf::encode_into;
///
/// let mut ascii = [0u8; 9];
/// let len = encode_into(b"ABCDE", &mut ascii).unwrap();
/// assert_eq!(len, 8);
/// assert_eq!(&ascii[..len], b"QUJDREU=");
/// assert_eq!(ascii[len], 0);
/// ```
pub fn encode_into(bin: &[u8], ascii: &mut [u8]) -> Result<usize, Base64Error> {
    let required = encoded_capacity(bin.len());
    if ascii.len() < required {
        debug!(
            "base64 encode of {} bytes needs {} output bytes, got {}",
            bin.len(),
            required,
            ascii.len()
        );
        return Err(Base64Error::OutputTooSmall {
            required,
            available: ascii.len(),
        });
    }

    let mut offset = 0;
    let written = pack(bin, |c| {
        ascii[offset] = c;
        offset += 1;
    });
    ascii[written] = 0;

    Ok(written)
}

/// Encodes `bin` to a standard, padded base64 string.
///
/// # Example
///
/// ```
/// use base64_buf::encode;
///
/// assert_eq!(encode(b"M"), "TQ==");
/// assert_eq!(encode("hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn encode(bin: impl AsRef<[u8]>) -> String {
    let bin = bin.as_ref();
    let mut out = String::with_capacity(encoded_len(bin.len()));
    pack(bin, |c| out.push(c as char));
    out
}
