//! RFC 2045 base64 encoding, optionally chunked into 76-character lines.

use crate::constants::{ALPHABET_BYTES, CHUNK_SEPARATOR, CHUNK_SIZE, PAD};

/// Pre-computed two-character lookup table for base64 encoding.
/// Each entry holds the two alphabet characters for a 12-bit value.
static TABLE2: [[u8; 2]; 4096] = {
    let mut table = [[0u8; 2]; 4096];
    let mut i = 0;
    while i < 64 {
        let mut j = 0;
        while j < 64 {
            let idx = i * 64 + j;
            table[idx][0] = ALPHABET_BYTES[i];
            table[idx][1] = ALPHABET_BYTES[j];
            j += 1;
        }
        i += 1;
    }
    table
};

/// Returns the exact number of bytes [`encode_base64`] produces for `length`
/// input bytes.
///
/// Chunked output carries one separator per started 76-character line.
///
/// ```
/// use mime_base64::encoded_len;
///
/// assert_eq!(encoded_len(0, true), 0);
/// assert_eq!(encoded_len(3, false), 4);
/// assert_eq!(encoded_len(57, true), 77);
/// ```
pub fn encoded_len(length: usize, chunked: bool) -> usize {
    let plain = length.div_ceil(3) * 4;
    if !chunked {
        return plain;
    }
    plain + plain.div_ceil(CHUNK_SIZE) * CHUNK_SEPARATOR.len()
}

/// Encodes binary data as base64 bytes.
///
/// With `chunked` set, a line feed follows every 76 output characters and the
/// final (possibly shorter) line, so non-empty chunked output always ends in
/// a separator. Empty input yields empty output.
///
/// # Example
///
/// ```
/// use mime_base64::encode_base64;
///
/// assert_eq!(encode_base64(b"Man", false), b"TWFu");
/// assert_eq!(encode_base64(b"Man", true), b"TWFu\n");
/// ```
pub fn encode_base64(binary: &[u8], chunked: bool) -> Vec<u8> {
    let length = binary.len();
    let mut out = Vec::with_capacity(encoded_len(length, chunked));

    let extra_length = length % 3;
    let base_length = length - extra_length;
    let mut line = 0;

    let mut i = 0;
    while i < base_length {
        let o1 = binary[i];
        let o2 = binary[i + 1];
        let o3 = binary[i + 2];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = (((o2 & 0b1111) as usize) << 8) | (o3 as usize);

        out.extend_from_slice(&TABLE2[v1]);
        out.extend_from_slice(&TABLE2[v2]);
        i += 3;

        line += 4;
        if chunked && line == CHUNK_SIZE {
            out.extend_from_slice(CHUNK_SEPARATOR);
            line = 0;
        }
    }

    if extra_length == 1 {
        let o1 = binary[base_length];
        let v1 = (o1 as usize) << 4;
        out.extend_from_slice(&TABLE2[v1]);
        out.push(PAD);
        out.push(PAD);
        line += 4;
    } else if extra_length == 2 {
        let o1 = binary[base_length];
        let o2 = binary[base_length + 1];
        let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
        let v2 = ((o2 & 0b1111) as usize) << 2;
        out.extend_from_slice(&TABLE2[v1]);
        out.push(ALPHABET_BYTES[v2]);
        out.push(PAD);
        line += 4;
    }

    if chunked && line > 0 {
        out.extend_from_slice(CHUNK_SEPARATOR);
    }

    debug_assert_eq!(out.len(), encoded_len(length, chunked));
    out
}

/// Encodes binary data as base64 split into 76-character lines.
///
/// Shorthand for `encode_base64(binary, true)`.
pub fn encode_base64_chunked(binary: &[u8]) -> Vec<u8> {
    encode_base64(binary, true)
}

/// Encodes a byte slice to an unchunked base64 string.
///
/// ```
/// use mime_base64::to_base64;
///
/// assert_eq!(to_base64(b"hello world"), "aGVsbG8gd29ybGQ=");
/// ```
pub fn to_base64(binary: &[u8]) -> String {
    encode_base64(binary, false)
        .into_iter()
        .map(|b| b as char)
        .collect()
}
