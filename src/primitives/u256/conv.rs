//! Conversions between `U256` and byte or native-integer representations
//!
//! Byte conversions are big-endian in both directions. Narrowing
//! conversions into native integers are fallible.

use super::core::U256;

use std::fmt::{self, Display, Formatter, LowerHex};

impl U256 {
    /// Decodes 32 big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < 4 {
            let start = 32 - (i + 1) * 8;
            let mut word = 0u64;
            let mut j = 0;

            while j < 8 {
                word = (word << 8) | bytes[start + j] as u64;
                j += 1;
            }

            limbs[i] = word;
            i += 1;
        }

        Self(limbs)
    }

    /// Encodes the value as 32 big-endian bytes.
    pub fn to_be_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter().rev()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

impl From<[u8; 32]> for U256 {
    fn from(value: [u8; 32]) -> Self {
        U256::from_be_bytes(value)
    }
}

impl From<U256> for [u8; 32] {
    fn from(value: U256) -> Self {
        value.to_be_bytes()
    }
}

impl From<u64> for U256 {
    fn from(value: u64) -> Self {
        U256::from_u64(value)
    }
}

impl From<u128> for U256 {
    fn from(value: u128) -> Self {
        U256([value as u64, (value >> 64) as u64, 0, 0])
    }
}

/// Succeeds only if the upper 192 bits are zero.
impl TryFrom<U256> for u64 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[1..].iter().any(|&limb| limb != 0) {
            return Err(());
        }

        Ok(value.0[0])
    }
}

/// Succeeds only if the upper 128 bits are zero.
impl TryFrom<U256> for u128 {
    type Error = ();

    fn try_from(value: U256) -> Result<Self, Self::Error> {
        if value.0[2] != 0 || value.0[3] != 0 {
            return Err(());
        }

        Ok(((value.0[1] as u128) << 64) | value.0[0] as u128)
    }
}

impl LowerHex for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }

        Ok(())
    }
}

/// Formats the value as 64 lowercase hexadecimal digits.
impl Display for U256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(self, f)
    }
}
