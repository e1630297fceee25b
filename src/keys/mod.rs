//! secp256k1 key material.
//!
//! This module defines the two key types and Diffie–Hellman key
//! agreement. No signing or verification lives here: the signature
//! schemes under [`crate::signatures`] consume these types.
//!
//! - [`PrivateKey`]: a scalar in `[1, n)`. Construction validates and
//!   never reduces.
//! - [`PublicKey`]: a curve point that is guaranteed valid and non-identity,
//!   with SEC1 and x-only encodings.
//! - [`exchange`]: ECDH returning the shared point or its encoding.

pub mod exchange;
mod private;
mod public;

pub use private::{PRIVATE_KEY_LEN, PrivateKey};
pub use public::PublicKey;
