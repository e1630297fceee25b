//! BIP340 Schnorr on encoded keys and signatures.
//!
//! Thin byte-level wrappers over [`crate::signatures::schnorr`].

use crate::encoding;
use crate::error::Error;
use crate::keys::{PrivateKey, PublicKey};
use crate::rng;
use crate::signatures::schnorr::{self as bip340, SIGNATURE_LEN, SchnorrSignature};

pub use crate::signatures::schnorr::SchnorrSignature as Signature;

/// The 32-byte x-only public key of a private key.
pub fn get_public_key(private_key: &[u8]) -> Result<[u8; 32], Error> {
    Ok(PrivateKey::from_slice(private_key)?.public_key().to_x_only())
}

/// Signs with 32 bytes of fresh auxiliary randomness.
pub fn sign(message: &[u8], private_key: &[u8]) -> Result<[u8; SIGNATURE_LEN], Error> {
    sign_with_aux(message, private_key, &rng::random_bytes::<32>())
}

/// Signs with caller-provided auxiliary randomness (deterministic).
pub fn sign_with_aux(
    message: &[u8],
    private_key: &[u8],
    aux_rand: &[u8; 32],
) -> Result<[u8; SIGNATURE_LEN], Error> {
    let key = PrivateKey::from_slice(private_key)?;

    Ok(bip340::sign(message, &key, aux_rand)?.to_bytes())
}

/// Verifies a 64-byte signature against a 32-byte x-only key.
///
/// Any malformed input is reported as `false`.
pub fn verify(signature: &[u8], message: &[u8], public_key: &[u8]) -> bool {
    let Ok(signature) = SchnorrSignature::from_bytes(signature) else {
        return false;
    };
    let Ok(x_only) = encoding::to_array::<32>(public_key) else {
        return false;
    };
    let Ok(public_key) = PublicKey::from_x_only(&x_only) else {
        return false;
    };

    bip340::verify(&signature, message, &public_key)
}
