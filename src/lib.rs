//! secp256k1 elliptic-curve cryptography
//!
//! This crate implements the secp256k1 group from the integer level up,
//! together with the two signature schemes built on it: deterministic
//! ECDSA with public-key recovery and BIP340 Schnorr.
//!
//! The focus is on **clarity, predictability, and auditability**. Curve
//! arithmetic is written out explicitly; the SHA-256 primitive and the
//! operating-system random source come from well-known crates.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size integers `U256` and `U512` with explicit carry handling.
//!   Everything above is built on these.
//!
//! - `curve`
//!   Field and scalar arithmetic, the curve constants, the group law in
//!   affine and Jacobian coordinates, windowed multiplication with
//!   precomputed tables and the GLV endomorphism.
//!
//! - `keys`
//!   Private and public key types and ECDH. No signing logic lives here,
//!   only key structure, encodings and validation.
//!
//! - `signatures`
//!   ECDSA (RFC 6979 nonces, low-s, recovery, DER) and BIP340 Schnorr,
//!   operating on the typed keys.
//!
//! - `hash` / `rng`
//!   SHA-256, HMAC-SHA256, BIP340 tagged hashes and random bytes.
//!
//! - `encoding`
//!   Hexadecimal decoding at the API edge.
//!
//! The crate root, [`schnorr`] and [`utils`] form the byte-oriented API:
//! keys, digests and signatures go in and out as byte slices, are decoded
//! once into the typed representation, and every decode failure is an
//! [`Error`]. Verification is the exception and reports malformed input as
//! `false`.
//!
//! # Example
//!
//! ```
//! use cryptal_secp256k1::{SignOptions, get_public_key, sign, verify};
//!
//! let mut private_key = [0u8; 32];
//! private_key[31] = 1;
//!
//! let digest = cryptal_secp256k1::utils::sha256(b"hello");
//! let public_key = get_public_key(&private_key, true).unwrap();
//!
//! let output = sign(&digest, &private_key, SignOptions::default()).unwrap();
//! let signature = output.signature.to_compact();
//!
//! assert!(verify(&signature, &digest, &public_key));
//! ```
//!
//! # Design goals
//!
//! - A single canonical in-memory form for every value
//! - Fixed group-operation count when the scalar is secret
//! - No global mutable state besides the lazily built base-point table
//!
//! This crate is not intended to replace externally audited libraries such
//! as libsecp256k1.

pub mod curve;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod keys;
pub mod primitives;
pub mod rng;
pub mod schnorr;
pub mod signatures;
pub mod utils;

pub use curve::{CURVE, CurveParameters, Point};
pub use error::Error;
pub use keys::{PrivateKey, PublicKey};
pub use signatures::ecdsa::{RecoveryId, SignOptions, SignOutput, Signature};

use signatures::ecdsa;

/// SEC1 public key of a 32-byte private key.
pub fn get_public_key(private_key: &[u8], compressed: bool) -> Result<Vec<u8>, Error> {
    Ok(PrivateKey::from_slice(private_key)?
        .public_key()
        .to_bytes(compressed))
}

/// Deterministic ECDSA signature of a 32-byte digest.
///
/// See [`ecdsa::sign`] for the algorithm and [`SignOptions`] for the
/// defaults (low-s, no recovery id).
pub fn sign(
    digest: &[u8; 32],
    private_key: &[u8],
    options: SignOptions,
) -> Result<SignOutput, Error> {
    let key = PrivateKey::from_slice(private_key)?;

    ecdsa::sign(digest, &key, options)
}

/// Verifies a compact or DER signature against a SEC1 public key.
///
/// Any malformed signature or key is reported as `false`.
pub fn verify(signature: &[u8], digest: &[u8; 32], public_key: &[u8]) -> bool {
    let Ok(signature) = Signature::from_bytes(signature) else {
        return false;
    };
    let Ok(public_key) = PublicKey::from_bytes(public_key) else {
        return false;
    };

    ecdsa::verify(&signature, digest, &public_key)
}

/// Recovers the SEC1 public key that signed `digest`.
pub fn recover_public_key(
    digest: &[u8; 32],
    signature: &[u8],
    recovery_id: u8,
    compressed: bool,
) -> Result<Vec<u8>, Error> {
    let recovery_id = RecoveryId::new(recovery_id)?;
    let signature = Signature::from_bytes(signature)?;

    Ok(ecdsa::recover(digest, &signature, recovery_id)?.to_bytes(compressed))
}

/// ECDH: SEC1 encoding of `private_a · public_b`.
pub fn get_shared_secret(
    private_a: &[u8],
    public_b: &[u8],
    compressed: bool,
) -> Result<Vec<u8>, Error> {
    keys::exchange::shared_secret(private_a, public_b, compressed)
}
