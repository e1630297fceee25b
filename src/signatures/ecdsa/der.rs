//! Strict DER for ECDSA signatures.
//!
//! ```text
//! 0x30 len  0x02 len(r) r  0x02 len(s) s
//! ```
//!
//! Only short-form lengths are accepted (a signature never exceeds 72
//! bytes). Integers must be minimally encoded: no leading zero unless the
//! next byte has its high bit set, and never negative. Trailing bytes after
//! the sequence are rejected.

use crate::error::Error;

const SEQUENCE: u8 = 0x30;
const INTEGER: u8 = 0x02;

/// Encodes two 32-byte big-endian integers as a DER sequence.
pub(crate) fn encode(r: &[u8; 32], s: &[u8; 32]) -> Vec<u8> {
    let r = encode_integer(r);
    let s = encode_integer(s);

    let mut out = Vec::with_capacity(2 + r.len() + s.len());
    out.push(SEQUENCE);
    out.push((r.len() + s.len()) as u8);
    out.extend_from_slice(&r);
    out.extend_from_slice(&s);

    out
}

/// Decodes a DER sequence into two 32-byte big-endian integers.
pub(crate) fn decode(bytes: &[u8]) -> Result<([u8; 32], [u8; 32]), Error> {
    let (&tag, rest) = bytes.split_first().ok_or(Error::InvalidSignature)?;
    if tag != SEQUENCE {
        return Err(Error::InvalidSignature);
    }

    let (&len, body) = rest.split_first().ok_or(Error::InvalidSignature)?;
    if len & 0x80 != 0 || len as usize != body.len() {
        return Err(Error::InvalidSignature);
    }

    let (r, rest) = decode_integer(body)?;
    let (s, rest) = decode_integer(rest)?;

    if !rest.is_empty() {
        return Err(Error::InvalidSignature);
    }

    Ok((r, s))
}

fn encode_integer(value: &[u8; 32]) -> Vec<u8> {
    let start = value.iter().position(|&b| b != 0).unwrap_or(31);
    let digits = &value[start..];

    let mut out = Vec::with_capacity(35);
    out.push(INTEGER);

    if digits[0] & 0x80 != 0 {
        out.push(digits.len() as u8 + 1);
        out.push(0);
    } else {
        out.push(digits.len() as u8);
    }

    out.extend_from_slice(digits);
    out
}

fn decode_integer(bytes: &[u8]) -> Result<([u8; 32], &[u8]), Error> {
    let [tag, len, rest @ ..] = bytes else {
        return Err(Error::InvalidSignature);
    };

    let len = *len as usize;

    if *tag != INTEGER || len == 0 || len & 0x80 != 0 || len > rest.len() {
        return Err(Error::InvalidSignature);
    }

    let (digits, rest) = rest.split_at(len);

    if digits[0] & 0x80 != 0 {
        return Err(Error::InvalidSignature);
    }
    if digits.len() > 1 && digits[0] == 0 && digits[1] & 0x80 == 0 {
        return Err(Error::InvalidSignature);
    }

    let digits = if digits[0] == 0 && digits.len() > 1 {
        &digits[1..]
    } else {
        digits
    };

    if digits.len() > 32 {
        return Err(Error::InvalidSignature);
    }

    let mut out = [0u8; 32];
    out[32 - digits.len()..].copy_from_slice(digits);

    Ok((out, rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(hex: &str) -> [u8; 32] {
        let mut out = [0u8; 32];
        let bytes = hex::decode(hex).unwrap();
        out[32 - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    #[test]
    fn high_bit_gets_a_zero_pad() {
        let der = encode(&int("80"), &int("01"));

        assert_eq!(der, [0x30, 0x07, 0x02, 0x02, 0x00, 0x80, 0x02, 0x01, 0x01]);
        assert_eq!(decode(&der), Ok((int("80"), int("01"))));
    }

    #[test]
    fn full_width_components() {
        let r = int("ff".repeat(32).as_str());
        let s = int("7f".repeat(32).as_str());
        let der = encode(&r, &s);

        assert_eq!(der.len(), 2 + 35 + 34);
        assert_eq!(decode(&der), Ok((r, s)));
    }

    #[test]
    fn rejects_non_minimal_encodings() {
        // superfluous leading zero
        assert!(decode(&[0x30, 0x07, 0x02, 0x02, 0x00, 0x01, 0x02, 0x01, 0x01]).is_err());
        // negative integer
        assert!(decode(&[0x30, 0x06, 0x02, 0x01, 0x80, 0x02, 0x01, 0x01]).is_err());
        // zero-length integer
        assert!(decode(&[0x30, 0x05, 0x02, 0x00, 0x02, 0x01, 0x01]).is_err());
    }

    #[test]
    fn rejects_bad_framing() {
        let good = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01];
        assert!(decode(&good).is_ok());

        // wrong sequence tag
        let mut bad = good;
        bad[0] = 0x31;
        assert!(decode(&bad).is_err());

        // length does not cover the body
        let mut bad = good;
        bad[1] = 0x07;
        assert!(decode(&bad).is_err());

        // trailing byte inside the sequence
        assert!(decode(&[0x30, 0x07, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x00]).is_err());

        // trailing byte after the sequence
        assert!(decode(&[0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x01, 0x00]).is_err());

        assert!(decode(&[]).is_err());
    }
}
