//! secp256k1 private keys.

use crate::curve::{Point, Scalar};
use crate::encoding;
use crate::error::Error;
use crate::keys::PublicKey;
use crate::primitives::U256;
use crate::rng::Csprng;

use std::fmt::{self, Debug, Formatter};

/// Length in bytes of an encoded private key.
pub const PRIVATE_KEY_LEN: usize = 32;

/// A scalar in `[1, n)`.
///
/// Out-of-range input is rejected, never reduced: a key `≥ n` fails with
/// [`Error::InvalidPrivateKey`] instead of silently aliasing another key.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct PrivateKey(Scalar);

impl PrivateKey {
    /// Validates an integer key.
    pub fn new(value: U256) -> Result<Self, Error> {
        let scalar = Scalar::new(value).map_err(|_| Error::InvalidPrivateKey)?;

        Self::from_scalar(scalar)
    }

    pub fn from_scalar(scalar: Scalar) -> Result<Self, Error> {
        if scalar.is_zero() {
            return Err(Error::InvalidPrivateKey);
        }

        Ok(Self(scalar))
    }

    pub fn from_bytes(bytes: &[u8; PRIVATE_KEY_LEN]) -> Result<Self, Error> {
        Self::new(U256::from_be_bytes(*bytes))
    }

    /// Decodes a key that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: &[u8; PRIVATE_KEY_LEN] =
            bytes.try_into().map_err(|_| Error::InvalidPrivateKey)?;

        Self::from_bytes(bytes)
    }

    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Self::from_slice(&encoding::decode_hex(hex)?)
    }

    /// Samples a uniformly random key by rejection.
    pub fn random() -> Self {
        let mut rng = Csprng::new();
        let mut bytes = [0u8; PRIVATE_KEY_LEN];

        loop {
            rng.fill_bytes(&mut bytes);

            if let Ok(key) = Self::from_bytes(&bytes) {
                bytes.fill(0);
                return key;
            }
        }
    }

    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_LEN] {
        self.0.to_be_bytes()
    }

    pub fn scalar(&self) -> &Scalar {
        &self.0
    }

    /// `d·G`
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_private_key(self)
    }

    pub(crate) fn public_point(&self) -> Point {
        Point::BASE.multiply(&self.0)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}
