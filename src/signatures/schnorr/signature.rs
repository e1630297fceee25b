use crate::curve::{FieldElement, Scalar};
use crate::encoding;
use crate::error::Error;

pub const SIGNATURE_LEN: usize = 64;

/// A BIP340 signature: the x coordinate of the nonce point and `s`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SchnorrSignature {
    r: FieldElement,
    s: Scalar,
}

impl SchnorrSignature {
    pub fn new(r: FieldElement, s: Scalar) -> Self {
        Self { r, s }
    }

    pub fn r(&self) -> &FieldElement {
        &self.r
    }

    pub fn s(&self) -> &Scalar {
        &self.s
    }

    /// Decodes `r ‖ s`, rejecting `r ≥ P` and `s ≥ n`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() != SIGNATURE_LEN {
            return Err(Error::InvalidSignature);
        }

        let r = FieldElement::from_slice(&bytes[..32]).map_err(|_| Error::InvalidSignature)?;
        let s = Scalar::from_slice(&bytes[32..]).map_err(|_| Error::InvalidSignature)?;

        Ok(Self { r, s })
    }

    pub fn to_bytes(&self) -> [u8; SIGNATURE_LEN] {
        let mut out = [0u8; SIGNATURE_LEN];
        out[..32].copy_from_slice(&self.r.to_be_bytes());
        out[32..].copy_from_slice(&self.s.to_be_bytes());
        out
    }

    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        Self::from_bytes(&encoding::decode_hex(hex)?)
    }

    pub fn to_hex(&self) -> String {
        encoding::encode_hex(self.to_bytes())
    }
}
