//! Hash functions used by the signature schemes.
//!
//! The curve code never hashes directly. Everything goes through the three
//! entry points below, so the digest primitive can be swapped without
//! touching protocol logic:
//!
//! - [`sha256`] / [`sha256_concat`]: plain SHA-256 (the `sha2` crate)
//! - [`hmac_sha256`]: HMAC-SHA256 as used by RFC 6979 nonce derivation
//! - [`tagged_hash`]: the BIP340 domain-separated hash
//!
//! All functions take their message as a list of slices. This replaces
//! variadic arguments and avoids building concatenation buffers on the
//! hot path.

mod hmac;
mod sha256;
mod tagged;

pub use hmac::hmac_sha256;
pub use sha256::{sha256, sha256_concat};
pub use tagged::tagged_hash;

/// Size in bytes of every digest produced by this module.
pub const DIGEST_LEN: usize = 32;
