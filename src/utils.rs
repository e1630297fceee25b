//! Key utilities exposed at the crate boundary.

use crate::curve::params::N;
use crate::curve::{Point, PrecomputedPoint, WindowConfig, base_table};
use crate::error::Error;
use crate::keys::{PRIVATE_KEY_LEN, PrivateKey};
use crate::primitives::U256;
use crate::rng;

pub use crate::hash::{hmac_sha256, sha256};

/// Shortest input accepted by [`hash_to_private_key`]: 40 bytes, so the
/// reduction bias is below `2⁻⁶⁴`.
pub const MIN_HASH_TO_KEY_LEN: usize = 40;

/// Longest input accepted by [`hash_to_private_key`].
pub const MAX_HASH_TO_KEY_LEN: usize = 1024;

/// `true` if `key` is 32 bytes encoding an integer in `[1, n)`.
pub fn is_valid_private_key(key: &[u8]) -> bool {
    PrivateKey::from_slice(key).is_ok()
}

/// Maps uniformly random bytes to a private key (FIPS 186-4, B.4.1):
/// `int(bytes) mod (n − 1) + 1`.
///
/// Fails with [`Error::InvalidLength`] outside
/// [`MIN_HASH_TO_KEY_LEN`]`..=`[`MAX_HASH_TO_KEY_LEN`] bytes.
pub fn hash_to_private_key(bytes: &[u8]) -> Result<[u8; PRIVATE_KEY_LEN], Error> {
    if bytes.len() < MIN_HASH_TO_KEY_LEN {
        return Err(Error::InvalidLength {
            expected: MIN_HASH_TO_KEY_LEN,
            actual: bytes.len(),
        });
    }
    if bytes.len() > MAX_HASH_TO_KEY_LEN {
        return Err(Error::InvalidLength {
            expected: MAX_HASH_TO_KEY_LEN,
            actual: bytes.len(),
        });
    }

    Ok(reduce_to_key(bytes))
}

/// A fresh private key from [`MIN_HASH_TO_KEY_LEN`] random bytes.
pub fn random_private_key() -> [u8; PRIVATE_KEY_LEN] {
    let mut seed = [0u8; MIN_HASH_TO_KEY_LEN];
    rng::fill_bytes(&mut seed);

    let key = reduce_to_key(&seed);
    seed.fill(0);

    key
}

/// A fresh private key from `len` random bytes.
pub fn random_private_key_with_len(len: usize) -> Result<[u8; PRIVATE_KEY_LEN], Error> {
    let mut seed = rng::random_vec(len);
    let key = hash_to_private_key(&seed);
    seed.fill(0);

    key
}

/// Builds a multiplication table eagerly.
///
/// `None` selects the base point. The process-wide base table is cached
/// separately (see [`precompute_base`]); this always returns a new
/// table owned by the caller.
pub fn precompute(window: usize, point: Option<Point>) -> Result<PrecomputedPoint, Error> {
    let config = WindowConfig::new(window)?;

    PrecomputedPoint::new(point.unwrap_or(Point::BASE), config)
}

/// Forces construction of the cached base-point table.
pub fn precompute_base() -> &'static PrecomputedPoint {
    base_table()
}

fn reduce_to_key(bytes: &[u8]) -> [u8; PRIVATE_KEY_LEN] {
    let reduced = U256::rem_be_bytes(bytes, &(N - U256::ONE));

    (reduced + U256::ONE).to_be_bytes()
}
