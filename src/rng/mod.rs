//! Random number generation.
//!
//! Key generation, Schnorr auxiliary randomness and random private keys all
//! draw from here. ECDSA signing never does: its nonces are deterministic.

mod csprng;

pub use csprng::Csprng;

/// Fills `out` with bytes from the operating system generator.
pub fn fill_bytes(out: &mut [u8]) {
    Csprng::new().fill_bytes(out);
}

/// Returns `N` bytes from the operating system generator.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut out = [0u8; N];
    fill_bytes(&mut out);
    out
}

/// Returns `len` bytes from the operating system generator.
pub fn random_vec(len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    fill_bytes(&mut out);
    out
}
