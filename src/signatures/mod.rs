//! Digital signature schemes over secp256k1.
//!
//! Each submodule is a self-contained scheme with its own signature type,
//! signing and verification. Both consume the key types from
//! [`crate::keys`] and the group from [`crate::curve`]; they share no
//! protocol code.
//!
//! - [`ecdsa`]: deterministic ECDSA with recovery
//! - [`schnorr`]: BIP340 Schnorr

pub mod ecdsa;
pub mod schnorr;
