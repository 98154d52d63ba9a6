//! Object-style codec over the free functions.

use crate::from_base64::decode_base64;
use crate::to_base64::encode_base64;
use crate::Base64Error;

/// Converts binary data into an encoded byte form.
pub trait BinaryEncoder {
    fn encode(&self, binary: &[u8]) -> Vec<u8>;
}

/// Converts encoded bytes back into binary data.
pub trait BinaryDecoder {
    type Error;

    fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

/// RFC 2045 base64 codec.
///
/// The default codec writes a single unbroken line; [`Base64::chunked`]
/// wraps output at 76 characters. Decoding accepts either form.
///
/// ```
/// use mime_base64::{Base64, BinaryDecoder, BinaryEncoder};
///
/// let codec = Base64::new();
/// let encoded = codec.encode(b"Man");
/// assert_eq!(encoded, b"TWFu");
/// assert_eq!(codec.decode(&encoded).unwrap(), b"Man");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Base64 {
    chunked: bool,
}

impl Base64 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Codec whose output is split into 76-character lines.
    pub fn chunked() -> Self {
        Self { chunked: true }
    }

    pub fn is_chunked(&self) -> bool {
        self.chunked
    }
}

impl BinaryEncoder for Base64 {
    fn encode(&self, binary: &[u8]) -> Vec<u8> {
        encode_base64(binary, self.chunked)
    }
}

impl BinaryDecoder for Base64 {
    type Error = Base64Error;

    fn decode(&self, encoded: &[u8]) -> Result<Vec<u8>, Base64Error> {
        decode_base64(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EncodingFault;

    #[test]
    fn default_codec_is_unchunked() {
        let codec = Base64::new();
        assert!(!codec.is_chunked());
        let data = vec![0xabu8; 120];
        assert!(!codec.encode(&data).contains(&b'\n'));
    }

    #[test]
    fn chunked_codec_round_trips() {
        let codec = Base64::chunked();
        let data: Vec<u8> = (0..=255).collect();
        let encoded = codec.encode(&data);
        assert!(encoded.ends_with(b"\n"));
        assert_eq!(codec.decode(&encoded).unwrap(), data);
    }

    #[test]
    fn decode_rejects_foreign_bytes() {
        let err = Base64::new().decode(b"TW Fu!").unwrap_err();
        assert_eq!(
            err,
            Base64Error::InvalidEncoding(EncodingFault::InvalidByte {
                byte: b'!',
                offset: 4
            })
        );
    }

    #[test]
    fn usable_as_trait_objects() {
        let encoder: &dyn BinaryEncoder = &Base64::new();
        let decoder: &dyn BinaryDecoder<Error = Base64Error> = &Base64::chunked();
        assert_eq!(decoder.decode(&encoder.encode(b"Man")).unwrap(), b"Man");
    }
}
