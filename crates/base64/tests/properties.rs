//! Property tests across the public API.

use mime_base64::{
    decode_base64, discard_whitespace, encode_base64, encoded_len, is_array_byte_base64,
    ALPHABET_BYTES, CHUNK_SIZE,
};
use proptest::prelude::*;

fn base64_byte() -> impl Strategy<Value = u8> {
    prop::sample::select(
        ALPHABET_BYTES
            .iter()
            .copied()
            .chain(std::iter::once(b'='))
            .collect::<Vec<u8>>(),
    )
}

proptest! {
    #[test]
    fn round_trip(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode_base64(&encode_base64(&data, false)).unwrap(), data);
    }

    #[test]
    fn round_trip_chunked(data in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(decode_base64(&encode_base64(&data, true)).unwrap(), data);
    }

    #[test]
    fn chunked_adds_one_separator_per_line(data in prop::collection::vec(any::<u8>(), 0..512)) {
        let plain = encode_base64(&data, false);
        let chunked = encode_base64(&data, true);
        prop_assert_eq!(chunked.len(), plain.len() + plain.len().div_ceil(CHUNK_SIZE));
        prop_assert_eq!(chunked.len(), encoded_len(data.len(), true));
        prop_assert_eq!(discard_whitespace(&chunked), plain);
    }

    #[test]
    fn alphabet_and_pad_are_valid(data in prop::collection::vec(base64_byte(), 0..64)) {
        prop_assert!(is_array_byte_base64(&data));
    }

    #[test]
    fn foreign_byte_is_invalid(
        data in prop::collection::vec(base64_byte(), 0..64),
        at in any::<prop::sample::Index>(),
        byte in any::<u8>().prop_filter("outside alphabet", |b| {
            !ALPHABET_BYTES.contains(b) && !b" \t\r\n=".contains(b)
        }),
    ) {
        let mut data = data;
        let pos = at.index(data.len() + 1);
        data.insert(pos, byte);
        prop_assert!(!is_array_byte_base64(&data));
        prop_assert!(decode_base64(&data).is_err());
    }

    #[test]
    fn decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let _ = decode_base64(&data);
    }
}
