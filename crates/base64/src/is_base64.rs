//! Alphabet membership checks.

use crate::constants::{DECODE_TABLE, INVALID, PAD};
use crate::discard_whitespace::is_whitespace;

/// Returns `true` if `byte` is the pad character or a base64 alphabet member.
#[inline]
pub fn is_base64(byte: u8) -> bool {
    byte == PAD || DECODE_TABLE[byte as usize] != INVALID
}

/// Returns `true` if every non-whitespace byte of `data` is valid base64.
///
/// Only alphabet membership is checked, not length or padding placement.
/// Empty input, or input made only of whitespace, is valid.
///
/// ```
/// use mime_base64::is_array_byte_base64;
///
/// assert!(is_array_byte_base64(b""));
/// assert!(is_array_byte_base64(b"TWFu\nTQ=="));
/// assert!(!is_array_byte_base64(b"T@Fu"));
/// ```
pub fn is_array_byte_base64(data: &[u8]) -> bool {
    data.iter()
        .filter(|&&b| !is_whitespace(b))
        .all(|&b| is_base64(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALPHABET_BYTES;

    #[test]
    fn alphabet_and_pad_are_valid() {
        for &c in ALPHABET_BYTES.iter() {
            assert!(is_base64(c));
        }
        assert!(is_base64(b'='));
    }

    #[test]
    fn everything_else_is_invalid() {
        let valid = (0..=255u8).filter(|&b| is_base64(b)).count();
        assert_eq!(valid, 65);
        assert!(!is_base64(b'-'));
        assert!(!is_base64(b'_'));
        assert!(!is_base64(b' '));
        assert!(!is_base64(0x80));
    }

    #[test]
    fn padding_placement_is_not_checked() {
        assert!(is_array_byte_base64(b"=A=B"));
        assert!(is_array_byte_base64(b"ABC"));
    }

    #[test]
    fn whitespace_only_is_valid() {
        assert!(is_array_byte_base64(b" \r\n\t"));
    }
}
