//! HMAC-SHA256 (RFC 2104).
//!
//! ```text
//! HMAC(K, m) = H((K' ⊕ opad) ‖ H((K' ⊕ ipad) ‖ m))
//! ```
//!
//! where `K'` is the key zero-padded to the 64-byte SHA-256 block size, or
//! `H(K)` zero-padded if the key is longer than one block.

use sha2::{Digest, Sha256};

const BLOCK_LEN: usize = 64;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Computes HMAC-SHA256 of the concatenation of `messages` under `key`.
pub fn hmac_sha256(key: &[u8], messages: &[&[u8]]) -> [u8; 32] {
    let mut block = [0u8; BLOCK_LEN];

    if key.len() > BLOCK_LEN {
        block[..32].copy_from_slice(&Sha256::digest(key));
    } else {
        block[..key.len()].copy_from_slice(key);
    }

    let mut inner = Sha256::new();
    inner.update(block.map(|b| b ^ IPAD));
    for message in messages {
        inner.update(message);
    }
    let inner = inner.finalize();

    let mut outer = Sha256::new();
    outer.update(block.map(|b| b ^ OPAD));
    outer.update(inner);

    block.fill(0);

    outer.finalize().into()
}
