/// Standard base64 alphabet.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Standard base64 alphabet as a byte array (used for byte-level operations and const evaluation).
pub const ALPHABET_BYTES: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character.
pub const PAD: u8 = b'=';

/// Maximum line length of chunked output (RFC 2045, section 6.8).
pub const CHUNK_SIZE: usize = 76;

/// Line separator appended after every chunk.
pub const CHUNK_SEPARATOR: &[u8] = b"\n";

/// Marks bytes outside the alphabet in [`DECODE_TABLE`].
pub(crate) const INVALID: u8 = 0xff;

/// Reverse lookup: byte value to its 6-bit alphabet index, or [`INVALID`].
///
/// `=` maps to [`INVALID`] as well; callers check for [`PAD`] first.
pub(crate) static DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET_BYTES[i] as usize] = i as u8;
        i += 1;
    }
    table
};

// Separators must never split a 4-character quantum.
const _: () = assert!(CHUNK_SIZE % 4 == 0);
