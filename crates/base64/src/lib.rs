//! RFC 2045 (MIME) base64 encoding and decoding.
//!
//! This crate provides:
//! - Standard base64 with `=` padding
//! - Optional chunking into 76-character lines, as MIME bodies require
//! - Whitespace-tolerant decoding, so chunked text decodes unchanged
//!
//! # Example
//!
//! ```
//! use mime_base64::{decode_base64, encode_base64};
//!
//! let data = b"hello world";
//! let encoded = encode_base64(data, true);
//! assert_eq!(encoded, b"aGVsbG8gd29ybGQ=\n");
//! let decoded = decode_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

pub mod cli;
mod codec;
mod constants;
mod discard_whitespace;
mod from_base64;
mod is_base64;
mod to_base64;

pub use codec::{Base64, BinaryDecoder, BinaryEncoder};
pub use constants::{ALPHABET, ALPHABET_BYTES, CHUNK_SEPARATOR, CHUNK_SIZE, PAD};
pub use discard_whitespace::discard_whitespace;
pub use from_base64::{decode_base64, from_base64};
pub use is_base64::{is_array_byte_base64, is_base64};
pub use to_base64::{encode_base64, encode_base64_chunked, encoded_len, to_base64};

use thiserror::Error;

/// Error type for base64 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base64Error {
    /// The input is not well-formed RFC 2045 base64.
    #[error("invalid base64 encoding: {0}")]
    InvalidEncoding(EncodingFault),
}

/// Why decoding rejected its input.
///
/// Offsets and lengths are measured after whitespace removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodingFault {
    /// A byte outside the alphabet that is neither `=` nor whitespace.
    #[error("byte 0x{byte:02x} at offset {offset} is not in the base64 alphabet")]
    InvalidByte { byte: u8, offset: usize },
    /// The encoded length is not a multiple of 4.
    #[error("length {length} is not a multiple of 4")]
    InvalidLength { length: usize },
    /// `=` appears before the final quantum's last two positions.
    #[error("unexpected padding at offset {offset}")]
    MisplacedPadding { offset: usize },
}
