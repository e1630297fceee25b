//! Affine curve points and the group law.
//!
//! [`Point`] is the public value type: either the identity or a pair of
//! coordinates. Construction through [`Point::new`] does not check the
//! curve equation, so internal arithmetic can build points freely;
//! anything decoded from outside goes through [`Point::from_coordinates`]
//! or [`Point::from_bytes`], which do.
//!
//! The affine `add`/`double` here cost one inversion each and are meant
//! for occasional use. Scalar multiplication works in
//! [`JacobianPoint`] and only converts back at the end.

use crate::curve::endomorphism;
use crate::curve::field::{FieldElement, Scalar};
use crate::curve::jacobian::JacobianPoint;
use crate::curve::params::{GX, GY};
use crate::curve::window::{self, DEFAULT_WINDOW, PrecomputedPoint};
use crate::encoding;
use crate::error::Error;
use crate::keys::PrivateKey;
use crate::primitives::U256;
use crate::signatures::ecdsa::{self, RecoveryId, Signature};

use std::ops::Neg;

/// SEC1 prefix for a compressed point with even `y`.
pub const TAG_EVEN: u8 = 0x02;
/// SEC1 prefix for a compressed point with odd `y`.
pub const TAG_ODD: u8 = 0x03;
/// SEC1 prefix for an uncompressed point.
pub const TAG_UNCOMPRESSED: u8 = 0x04;

pub const COMPRESSED_LEN: usize = 33;
pub const UNCOMPRESSED_LEN: usize = 65;
pub const X_ONLY_LEN: usize = 32;

/// A point on secp256k1, or the point at infinity.
///
/// Coordinates are canonical field elements, so the derived equality is
/// exactly "both identity, or equal `x` and equal `y`".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Point {
    Identity,
    Affine { x: FieldElement, y: FieldElement },
}

impl Point {
    /// The generator `G`.
    pub const BASE: Self = Self::Affine {
        x: FieldElement::from_canonical(GX),
        y: FieldElement::from_canonical(GY),
    };

    /// Builds a point without checking the curve equation.
    ///
    /// Call [`Point::assert_validity`] before trusting the result.
    pub const fn new(x: FieldElement, y: FieldElement) -> Self {
        Self::Affine { x, y }
    }

    /// Builds a point from raw integers, rejecting coordinates outside
    /// `[0, P)` and points off the curve.
    pub fn from_coordinates(x: U256, y: U256) -> Result<Self, Error> {
        let x = FieldElement::new(x).map_err(|_| Error::InvalidPoint)?;
        let y = FieldElement::new(y).map_err(|_| Error::InvalidPoint)?;

        let point = Self::new(x, y);
        point.assert_validity()?;

        Ok(point)
    }

    #[inline]
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity)
    }

    pub fn x(&self) -> Option<FieldElement> {
        match self {
            Self::Identity => None,
            Self::Affine { x, .. } => Some(*x),
        }
    }

    pub fn y(&self) -> Option<FieldElement> {
        match self {
            Self::Identity => None,
            Self::Affine { y, .. } => Some(*y),
        }
    }

    /// `y² = x³ + 7`. The identity is not "on the curve" in this sense.
    pub fn is_on_curve(&self) -> bool {
        match self {
            Self::Identity => false,
            Self::Affine { x, y } => y.square() == curve_rhs(x),
        }
    }

    /// Fails with [`Error::InvalidPoint`] for the identity or for
    /// coordinates that do not satisfy the curve equation.
    pub fn assert_validity(&self) -> Result<(), Error> {
        if !self.is_on_curve() {
            return Err(Error::InvalidPoint);
        }

        Ok(())
    }

    pub fn negate(&self) -> Self {
        match self {
            Self::Identity => Self::Identity,
            Self::Affine { x, y } => Self::new(*x, -*y),
        }
    }

    /// `λ = 3x² / 2y`, `x₃ = λ² − 2x`, `y₃ = λ(x − x₃) − y`.
    pub fn double(&self) -> Self {
        let Self::Affine { x, y } = *self else {
            return Self::Identity;
        };

        let Some(denominator) = y.double().invert() else {
            return Self::Identity;
        };

        let x2 = x.square();
        let lambda = (x2.double() + x2) * denominator;
        let x3 = lambda.square() - x.double();
        let y3 = lambda * (x - x3) - y;

        Self::new(x3, y3)
    }

    /// `λ = (y₂ − y₁) / (x₂ − x₁)`, `x₃ = λ² − x₁ − x₂`, `y₃ = λ(x₁ − x₃) − y₁`.
    pub fn add(&self, other: &Self) -> Self {
        let (x1, y1, x2, y2) = match (*self, *other) {
            (Self::Identity, _) => return *other,
            (_, Self::Identity) => return *self,
            (Self::Affine { x: x1, y: y1 }, Self::Affine { x: x2, y: y2 }) => (x1, y1, x2, y2),
        };

        if x1 == x2 {
            return if y1 == y2 {
                self.double()
            } else {
                Self::Identity
            };
        }

        let Some(denominator) = (x2 - x1).invert() else {
            return Self::Identity;
        };

        let lambda = (y2 - y1) * denominator;
        let x3 = lambda.square() - x1 - x2;
        let y3 = lambda * (x1 - x3) - y1;

        Self::new(x3, y3)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// Fixed-window multiplication with a constant number of group
    /// operations per scalar.
    ///
    /// The base point uses the cached table; any other point builds a
    /// [`DEFAULT_WINDOW`] table for this call only.
    pub fn multiply(&self, k: &Scalar) -> Self {
        if *self == Self::BASE {
            return window::base_table().multiply(k);
        }

        PrecomputedPoint::build(*self, DEFAULT_WINDOW).multiply(k)
    }

    /// Variable-time multiplication for public scalars only.
    ///
    /// `k` is reduced modulo `n` first, then split with the GLV
    /// endomorphism into two half-length scalars.
    pub fn multiply_unsafe(&self, k: &U256) -> Self {
        let k = Scalar::reduce(k);

        endomorphism::multiply_unsafe(&JacobianPoint::from_affine(self), &k).to_affine()
    }

    /// Reference double-and-add over the unreduced integer `k`.
    pub fn multiply_double_and_add(&self, k: &U256) -> Self {
        JacobianPoint::from_affine(self)
            .multiply_double_and_add(k)
            .to_affine()
    }

    /// `d·G` for a 32-byte private key.
    pub fn from_private_key(private_key: &[u8]) -> Result<Self, Error> {
        let key = PrivateKey::from_slice(private_key)?;

        Ok(Self::BASE.multiply(key.scalar()))
    }

    /// Recovers the signer's public point from an ECDSA signature.
    pub fn from_signature(
        digest: &[u8; 32],
        signature: &Signature,
        recovery_id: RecoveryId,
    ) -> Result<Self, Error> {
        Ok(ecdsa::recover(digest, signature, recovery_id)?.point())
    }

    /// Finds the point with the given `x` and `y` parity.
    pub fn decompress(x: &FieldElement, y_is_odd: bool) -> Result<Self, Error> {
        let y = curve_rhs(x).sqrt()?;
        let y = if y.is_odd() == y_is_odd { y } else { -y };

        Ok(Self::new(*x, y))
    }

    /// The even-`y` point with the given `x` (BIP340 `lift_x`).
    pub fn lift_x(x: &FieldElement) -> Result<Self, Error> {
        Self::decompress(x, false)
    }

    /// Decodes a SEC1 compressed (33 bytes) or uncompressed (65 bytes)
    /// point, or a 32-byte x-only key lifted to even `y`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match (bytes.len(), bytes.first()) {
            (X_ONLY_LEN, _) => {
                let x = FieldElement::from_slice(bytes).map_err(|_| Error::InvalidPoint)?;
                Self::lift_x(&x)
            }
            (COMPRESSED_LEN, Some(&tag)) if tag == TAG_EVEN || tag == TAG_ODD => {
                let x = FieldElement::from_slice(&bytes[1..]).map_err(|_| Error::InvalidPoint)?;
                Self::decompress(&x, tag == TAG_ODD)
            }
            (UNCOMPRESSED_LEN, Some(&TAG_UNCOMPRESSED)) => {
                let x = read_u256(&bytes[1..33]);
                let y = read_u256(&bytes[33..65]);
                Self::from_coordinates(x, y)
            }
            _ => Err(Error::InvalidPoint),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Self::from_bytes(&encoding::decode_hex(hex)?)
    }

    /// SEC1 encoding. The identity has no encoding.
    pub fn to_bytes(&self, compressed: bool) -> Result<Vec<u8>, Error> {
        let Self::Affine { x, y } = self else {
            return Err(Error::InvalidPoint);
        };

        let mut out = Vec::with_capacity(UNCOMPRESSED_LEN);

        if compressed {
            out.push(if y.is_odd() { TAG_ODD } else { TAG_EVEN });
            out.extend_from_slice(&x.to_be_bytes());
        } else {
            out.push(TAG_UNCOMPRESSED);
            out.extend_from_slice(&x.to_be_bytes());
            out.extend_from_slice(&y.to_be_bytes());
        }

        Ok(out)
    }

    pub fn to_hex(&self, compressed: bool) -> Result<String, Error> {
        Ok(encoding::encode_hex(self.to_bytes(compressed)?))
    }

    /// The 32-byte big-endian `x` coordinate.
    pub fn to_raw_x(&self) -> Result<[u8; 32], Error> {
        self.x()
            .map(|x| x.to_be_bytes())
            .ok_or(Error::InvalidPoint)
    }

    pub fn to_hex_x(&self) -> Result<String, Error> {
        Ok(encoding::encode_hex(self.to_raw_x()?))
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::Identity
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        self.negate()
    }
}

/// `x³ + 7`
fn curve_rhs(x: &FieldElement) -> FieldElement {
    x.square() * *x + FieldElement::from_u64(7)
}

fn read_u256(bytes: &[u8]) -> U256 {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(bytes);
    U256::from_be_bytes(buf)
}
