//! ECDSA signature values and recovery ids.

use crate::curve::Scalar;
use crate::encoding;
use crate::error::Error;
use crate::primitives::U256;
use crate::signatures::ecdsa::der;

/// Length of the compact `r ‖ s` encoding.
pub const COMPACT_LEN: usize = 64;

/// An ECDSA signature `(r, s)` with both components in `[1, n)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    r: Scalar,
    s: Scalar,
}

impl Signature {
    /// Fails with [`Error::InvalidSignature`] if either component is zero.
    pub fn new(r: Scalar, s: Scalar) -> Result<Self, Error> {
        if r.is_zero() || s.is_zero() {
            return Err(Error::InvalidSignature);
        }

        Ok(Self { r, s })
    }

    /// Builds a signature from raw integers, rejecting values outside
    /// `[1, n)`.
    pub fn from_integers(r: U256, s: U256) -> Result<Self, Error> {
        let r = Scalar::new(r).map_err(|_| Error::InvalidSignature)?;
        let s = Scalar::new(s).map_err(|_| Error::InvalidSignature)?;

        Self::new(r, s)
    }

    pub fn r(&self) -> &Scalar {
        &self.r
    }

    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Decodes the 64-byte `r ‖ s` form.
    pub fn from_compact(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != COMPACT_LEN {
            return Err(Error::InvalidSignature);
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Self::from_integers(U256::from_be_bytes(r), U256::from_be_bytes(s))
    }

    pub fn to_compact(&self) -> [u8; COMPACT_LEN] {
        let mut out = [0u8; COMPACT_LEN];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    /// Decodes a strict DER `SEQUENCE { INTEGER r, INTEGER s }`.
    pub fn from_der(bytes: &[u8]) -> Result<Self, Error> {
        let (r, s) = der::decode(bytes)?;

        Self::from_integers(U256::from_be_bytes(r), U256::from_be_bytes(s))
    }

    pub fn to_der(&self) -> Vec<u8> {
        der::encode(&self.r.to_be_bytes(), &self.s.to_be_bytes())
    }

    /// Accepts either encoding: exactly 64 bytes is compact, anything else
    /// is parsed as DER.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() == COMPACT_LEN {
            Self::from_compact(bytes)
        } else {
            Self::from_der(bytes)
        }
    }

    /// Encodes as compact `r ‖ s` or as DER.
    pub fn to_bytes(&self, compact: bool) -> Vec<u8> {
        if compact {
            self.to_compact().to_vec()
        } else {
            self.to_der()
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Self::from_bytes(&encoding::decode_hex(hex)?)
    }

    /// Hex of the compact encoding.
    pub fn to_hex(&self) -> String {
        encoding::encode_hex(self.to_compact())
    }

    pub fn to_der_hex(&self) -> String {
        encoding::encode_hex(self.to_der())
    }

    /// `true` when `s > n/2`.
    pub fn has_high_s(&self) -> bool {
        self.s.is_high()
    }

    /// Returns the equivalent signature with `s ≤ n/2`.
    pub fn normalize_s(&self) -> Self {
        if self.has_high_s() {
            Self {
                r: self.r,
                s: -self.s,
            }
        } else {
            *self
        }
    }
}

/// Public-key recovery selector in `0..=3`.
///
/// - bit 0: the nonce point `R` has odd `y`
/// - bit 1: `R.x ≥ n`, so `r` is `R.x − n`
///
/// This is the layout used by libsecp256k1 and by Ethereum's `v − 27`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecoveryId(u8);

impl RecoveryId {
    pub fn new(id: u8) -> Result<Self, Error> {
        if id > 3 {
            return Err(Error::InvalidRecoveryId(id));
        }

        Ok(Self(id))
    }

    pub fn from_parts(y_is_odd: bool, x_is_reduced: bool) -> Self {
        Self(y_is_odd as u8 | (x_is_reduced as u8) << 1)
    }

    pub fn is_y_odd(&self) -> bool {
        self.0 & 1 == 1
    }

    pub fn is_x_reduced(&self) -> bool {
        self.0 & 2 == 2
    }

    pub fn to_byte(&self) -> u8 {
        self.0
    }

    /// The id matching the signature with `s` negated.
    pub fn flip_parity(&self) -> Self {
        Self(self.0 ^ 1)
    }
}

impl TryFrom<u8> for RecoveryId {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<RecoveryId> for u8 {
    fn from(id: RecoveryId) -> Self {
        id.0
    }
}
