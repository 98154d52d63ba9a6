//! RFC 2045 base64 decoding.

use crate::constants::{DECODE_TABLE, PAD};
use crate::discard_whitespace::discard_whitespace;
use crate::is_base64::is_base64;
use crate::{Base64Error, EncodingFault};

fn reject(fault: EncodingFault) -> Base64Error {
    tracing::debug!(%fault, "rejected base64 input");
    Base64Error::InvalidEncoding(fault)
}

/// Decodes base64 bytes, ignoring embedded whitespace.
///
/// Space, tab, CR and LF are dropped first, so chunked output decodes as-is.
/// The remaining input must be a multiple of 4 characters long, drawn from
/// the alphabet, with `=` only in the last one or two positions. Input that
/// is empty, or consists only of `=`, decodes to nothing.
///
/// # Errors
///
/// Returns [`Base64Error::InvalidEncoding`] describing the first problem
/// found. Offsets refer to the input with whitespace removed.
///
/// # Example
///
/// ```
/// use mime_base64::decode_base64;
///
/// assert_eq!(decode_base64(b"TW\nFu").unwrap(), b"Man");
/// assert!(decode_base64(b"T@Fu").is_err());
/// ```
pub fn decode_base64(encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
    let data = discard_whitespace(encoded);
    let length = data.len();

    if length == 0 {
        return Ok(Vec::new());
    }

    if let Some(offset) = data.iter().position(|&b| !is_base64(b)) {
        return Err(reject(EncodingFault::InvalidByte {
            byte: data[offset],
            offset,
        }));
    }

    if !length.is_multiple_of(4) {
        return Err(reject(EncodingFault::InvalidLength { length }));
    }

    let padding = data.iter().rev().take_while(|&&b| b == PAD).count();
    if padding == length {
        return Ok(Vec::new());
    }
    if padding > 2 {
        return Err(reject(EncodingFault::MisplacedPadding {
            offset: length - padding,
        }));
    }
    if let Some(offset) = data[..length - padding].iter().position(|&b| b == PAD) {
        return Err(reject(EncodingFault::MisplacedPadding { offset }));
    }

    // Start of the last quartet when it carries padding.
    let main_length = if padding > 0 { length - 4 } else { length };
    let mut buf = Vec::with_capacity((length >> 2) * 3 - padding);

    let mut i = 0;
    while i < main_length {
        let sextet0 = DECODE_TABLE[data[i] as usize];
        let sextet1 = DECODE_TABLE[data[i + 1] as usize];
        let sextet2 = DECODE_TABLE[data[i + 2] as usize];
        let sextet3 = DECODE_TABLE[data[i + 3] as usize];

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push(((sextet1 & 0xf) << 4) | ((sextet2 >> 2) & 0xf));
        buf.push((sextet2 << 6) | sextet3);
        i += 4;
    }

    if padding == 2 {
        let sextet0 = DECODE_TABLE[data[main_length] as usize];
        let sextet1 = DECODE_TABLE[data[main_length + 1] as usize];

        buf.push((sextet0 << 2) | (sextet1 >> 4));
    } else if padding == 1 {
        let sextet0 = DECODE_TABLE[data[main_length] as usize];
        let sextet1 = DECODE_TABLE[data[main_length + 1] as usize];
        let sextet2 = DECODE_TABLE[data[main_length + 2] as usize];

        buf.push((sextet0 << 2) | (sextet1 >> 4));
        buf.push(((sextet1 & 0xf) << 4) | ((sextet2 >> 2) & 0xf));
    }

    Ok(buf)
}

/// Decodes a base64 string. See [`decode_base64`].
///
/// ```
/// use mime_base64::from_base64;
///
/// assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, Base64Error> {
    decode_base64(encoded.as_bytes())
}
