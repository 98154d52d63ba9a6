//! Whitespace removal for line-wrapped base64 input.

/// Returns `true` for the bytes RFC 2045 decoders skip: space, tab, CR and LF.
#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Copies `data` without space, tab, carriage-return and line-feed bytes.
///
/// All other bytes keep their relative order.
///
/// ```
/// use mime_base64::discard_whitespace;
///
/// assert_eq!(discard_whitespace(b" TW\r\nF u\t"), b"TWFu");
/// ```
pub fn discard_whitespace(data: &[u8]) -> Vec<u8> {
    data.iter().copied().filter(|&b| !is_whitespace(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_non_whitespace_in_order() {
        assert_eq!(discard_whitespace(b"a b\tc\rd\ne"), b"abcde");
    }

    #[test]
    fn only_whitespace() {
        assert!(discard_whitespace(b" \t\r\n\n ").is_empty());
    }

    #[test]
    fn other_control_bytes_survive() {
        assert_eq!(discard_whitespace(b"\x0b\x0c\0"), b"\x0b\x0c\0");
    }
}
