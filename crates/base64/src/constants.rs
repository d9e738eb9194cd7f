/// Standard base64 alphabet, indexed by 6-bit value.
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Lowest byte the decoder will look up (`'+'`).
pub const FIRST_SYMBOL: u8 = b'+';

/// Highest byte the decoder will look up (`'z'`).
pub const LAST_SYMBOL: u8 = b'z';

/// Decode table entry for bytes that are not base64 symbols.
pub const INVALID: i8 = -1;

const DECODE_TABLE_LEN: usize = (LAST_SYMBOL - FIRST_SYMBOL) as usize + 1;

/// Reverse lookup keyed by `byte - FIRST_SYMBOL`.
///
/// Holds the 6-bit value for every alphabet symbol, `0` for [`PAD`] and
/// [`INVALID`] for the punctuation gaps in between.
pub const DECODE_TABLE: [i8; DECODE_TABLE_LEN] = {
    let mut table = [INVALID; DECODE_TABLE_LEN];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[(ALPHABET[i] - FIRST_SYMBOL) as usize] = i as i8;
        i += 1;
    }
    // Padding must survive the lookup; its bytes are dropped afterwards.
    table[(PAD - FIRST_SYMBOL) as usize] = 0;
    table
};
