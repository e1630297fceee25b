//! Hexadecimal boundary decoding.
//!
//! The core only operates on fixed-width byte arrays. Text input is turned
//! into bytes here, once, at the edge of the API.

use crate::error::Error;

pub fn decode_hex(hex: &str) -> Result<Vec<u8>, Error> {
    Ok(hex::decode(hex)?)
}

/// Decodes exactly `N` bytes of hexadecimal.
pub fn decode_hex_array<const N: usize>(hex: &str) -> Result<[u8; N], Error> {
    let bytes = decode_hex(hex)?;

    to_array(&bytes)
}

pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Copies a slice into an array, failing on a length mismatch.
pub fn to_array<const N: usize>(bytes: &[u8]) -> Result<[u8; N], Error> {
    bytes.try_into().map_err(|_| Error::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_odd_length_and_bad_digits() {
        assert_eq!(decode_hex("abc"), Err(Error::InvalidHex));
        assert_eq!(decode_hex("zz"), Err(Error::InvalidHex));
    }

    #[test]
    fn array_length_is_checked() {
        assert_eq!(decode_hex_array::<2>("0102"), Ok([1, 2]));
        assert_eq!(
            decode_hex_array::<3>("0102"),
            Err(Error::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
    }
}
