//! Core logic of the `base64-hex` demonstration binary.
//!
//! Takes a hex string, encodes its bytes as base64 and decodes them back,
//! reporting each stage.

use std::fmt;

use thiserror::Error;

use crate::codec::{Base64, BinaryDecoder, BinaryEncoder};
use crate::Base64Error;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid hex input: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error(transparent)]
    Base64(#[from] Base64Error),
}

// ── Round trip ────────────────────────────────────────────────────────────

/// Every stage of a hex → base64 → hex round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTrip {
    pub original: String,
    pub hex: String,
    pub base64: String,
    pub decoded_hex: String,
}

impl fmt::Display for RoundTrip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    Original: {}", self.original)?;
        writeln!(f, " Back to hex: {}", self.hex)?;
        writeln!(f, "   To Base64: {}", self.base64.trim_end())?;
        write!(f, " Back to hex: {}", self.decoded_hex)
    }
}

/// Parses `input` as hex and runs its bytes through `codec` and back.
///
/// Hex output is upper-case.
pub fn round_trip_hex(input: &str, codec: &Base64) -> Result<RoundTrip, CliError> {
    let bytes = hex::decode(input.trim())?;
    tracing::debug!(len = bytes.len(), chunked = codec.is_chunked(), "encoding");

    let encoded = codec.encode(&bytes);
    let decoded = codec.decode(&encoded)?;

    Ok(RoundTrip {
        original: input.to_string(),
        hex: hex::encode_upper(&bytes),
        base64: encoded.iter().map(|&b| b as char).collect(),
        decoded_hex: hex::encode_upper(&decoded),
    })
}
