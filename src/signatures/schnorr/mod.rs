//! BIP340 Schnorr signatures over x-only public keys.
//!
//! Public keys are 32-byte x coordinates with an implied even `y`. Every
//! hash is a tagged hash, domain-separated by the tags below.

mod sign;
mod signature;
mod verify;

pub use sign::sign;
pub use signature::{SIGNATURE_LEN, SchnorrSignature};
pub use verify::verify;

pub const TAG_AUX: &str = "BIP0340/aux";
pub const TAG_NONCE: &str = "BIP0340/nonce";
pub const TAG_CHALLENGE: &str = "BIP0340/challenge";
