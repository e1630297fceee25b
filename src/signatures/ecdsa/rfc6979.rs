//! Deterministic nonce generation (RFC 6979, section 3.2) over HMAC-SHA256.
//!
//! [`NonceGenerator`] is an endless iterator of 32-byte candidates. The
//! caller decides whether a candidate is usable (in `[1, n)` and giving
//! non-zero `r` and `s`) and simply pulls the next one otherwise; the
//! generator performs the `K = HMAC(K, V ‖ 0x00)` re-seeding step between
//! candidates as the RFC requires.
//!
//! For secp256k1 with SHA-256, `qlen = hlen = 256`, so `bits2int` is the
//! identity on 32 bytes and `bits2octets(h)` is `h mod n`.

use crate::curve::Scalar;
use crate::hash::hmac_sha256;

/// HMAC-DRBG state producing nonce candidates.
pub struct NonceGenerator {
    k: [u8; 32],
    v: [u8; 32],
    started: bool,
}

impl NonceGenerator {
    /// Seeds the generator from a private key and a message digest.
    pub fn new(private_key: &[u8; 32], digest: &[u8; 32]) -> Self {
        let h1 = Scalar::from_be_bytes_reduced(digest).to_be_bytes();

        let mut k = [0x00u8; 32];
        let mut v = [0x01u8; 32];

        k = hmac_sha256(&k, &[&v, &[0x00], private_key, &h1]);
        v = hmac_sha256(&k, &[&v]);
        k = hmac_sha256(&k, &[&v, &[0x01], private_key, &h1]);
        v = hmac_sha256(&k, &[&v]);

        Self {
            k,
            v,
            started: false,
        }
    }
}

impl Iterator for NonceGenerator {
    type Item = [u8; 32];

    fn next(&mut self) -> Option<Self::Item> {
        if self.started {
            self.k = hmac_sha256(&self.k, &[&self.v, &[0x00]]);
            self.v = hmac_sha256(&self.k, &[&self.v]);
        }
        self.started = true;

        self.v = hmac_sha256(&self.k, &[&self.v]);

        Some(self.v)
    }
}

impl Drop for NonceGenerator {
    fn drop(&mut self) {
        self.k.fill(0);
        self.v.fill(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(last: u8) -> [u8; 32] {
        let mut out = [0u8; 32];
        out[31] = last;
        out
    }

    #[test]
    fn first_candidate_for_key_one_and_zero_digest() {
        let mut nonces = NonceGenerator::new(&key(1), &[0u8; 32]);

        assert_eq!(
            hex::encode(nonces.next().unwrap()),
            "010497d369b3d525ca15ec29c104a694210bb59ff6cabfc10afe6df0283896df"
        );
    }

    #[test]
    fn first_candidate_for_key_one_and_satoshi_digest() {
        let digest = crate::hash::sha256(b"Satoshi Nakamoto");
        let mut nonces = NonceGenerator::new(&key(1), &digest);

        assert_eq!(
            hex::encode(nonces.next().unwrap()),
            "8f8a276c19f4149656b280621e358cce24f5f52542772691ee69063b74f15d15"
        );
    }

    #[test]
    fn candidates_differ() {
        let mut nonces = NonceGenerator::new(&key(1), &[0u8; 32]);
        let first = nonces.next().unwrap();
        let second = nonces.next().unwrap();

        assert_ne!(first, second);
    }
}
