//! secp256k1 public keys.

use crate::curve::point::{TAG_EVEN, TAG_ODD, TAG_UNCOMPRESSED, UNCOMPRESSED_LEN};
use crate::curve::{FieldElement, Point};
use crate::encoding;
use crate::error::Error;
use crate::keys::PrivateKey;

/// A validated, non-identity curve point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey(Point);

impl PublicKey {
    /// Wraps a point after checking it is on the curve.
    pub fn from_point(point: Point) -> Result<Self, Error> {
        point.assert_validity().map_err(|_| Error::InvalidPublicKey)?;

        Ok(Self(point))
    }

    pub fn from_private_key(key: &PrivateKey) -> Self {
        Self(key.public_point())
    }

    /// Decodes a SEC1 compressed or uncompressed key, or a 32-byte
    /// x-only key with even `y`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let point = Point::from_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;

        Self::from_point(point)
    }

    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Self::from_bytes(&encoding::decode_hex(hex)?)
    }

    /// Decodes a BIP340 x-only key.
    pub fn from_x_only(bytes: &[u8; 32]) -> Result<Self, Error> {
        let x = FieldElement::from_be_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        let point = Point::lift_x(&x).map_err(|_| Error::InvalidPublicKey)?;

        Ok(Self(point))
    }

    pub fn point(&self) -> Point {
        self.0
    }

    /// SEC1 encoding: 33 bytes compressed, 65 bytes uncompressed.
    pub fn to_bytes(&self, compressed: bool) -> Vec<u8> {
        let (x, y) = self.coordinates();
        let mut out = Vec::with_capacity(UNCOMPRESSED_LEN);

        if compressed {
            out.push(if y.is_odd() { TAG_ODD } else { TAG_EVEN });
            out.extend_from_slice(&x.to_be_bytes());
        } else {
            out.push(TAG_UNCOMPRESSED);
            out.extend_from_slice(&x.to_be_bytes());
            out.extend_from_slice(&y.to_be_bytes());
        }

        out
    }

    pub fn to_hex(&self, compressed: bool) -> String {
        encoding::encode_hex(self.to_bytes(compressed))
    }

    /// The 32-byte x coordinate, as used for BIP340 keys.
    pub fn to_x_only(&self) -> [u8; 32] {
        self.coordinates().0.to_be_bytes()
    }

    pub fn has_even_y(&self) -> bool {
        self.coordinates().1.is_even()
    }

    fn coordinates(&self) -> (FieldElement, FieldElement) {
        match self.0 {
            Point::Affine { x, y } => (x, y),
            // every constructor rejects the identity
            Point::Identity => unreachable!("public key is never the identity"),
        }
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl From<PublicKey> for Point {
    fn from(key: PublicKey) -> Self {
        key.0
    }
}
