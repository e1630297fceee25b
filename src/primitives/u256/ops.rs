//! Arithmetic and bitwise operators for `U256`
//!
//! Operators use **wrapping** semantics: a carry out of the top limb or a
//! borrow past zero is discarded. Code that needs to observe the carry
//! calls [`U256::overflowing_add`] / [`U256::overflowing_sub`] directly.

use super::core::U256;

use std::ops::{Add, BitAnd, BitOr, BitXor, Shl, Shr, Sub};

impl BitXor for U256 {
    type Output = U256;

    fn bitxor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l ^ r);

        U256(out)
    }
}

impl BitAnd for U256 {
    type Output = U256;

    fn bitand(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l & r);

        U256(out)
    }
}

impl BitOr for U256 {
    type Output = U256;

    fn bitor(self, rhs: U256) -> Self::Output {
        let mut out = [0u64; 4];

        out.iter_mut()
            .zip(self.0.iter().zip(rhs.0.iter()))
            .for_each(|(o, (l, r))| *o = l | r);

        U256(out)
    }
}

impl Add for U256 {
    type Output = U256;

    fn add(self, rhs: U256) -> Self::Output {
        self.overflowing_add(&rhs).0
    }
}

impl Sub for U256 {
    type Output = U256;

    fn sub(self, rhs: U256) -> Self::Output {
        self.overflowing_sub(&rhs).0
    }
}

/// Logical left shift. Shifts of 256 bits or more yield zero.
impl Shl<u32> for U256 {
    type Output = U256;

    fn shl(self, shift: u32) -> Self::Output {
        if shift >= 256 {
            return U256::ZERO;
        }

        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];

        for i in limb_shift..4 {
            out[i] = self.0[i - limb_shift] << bit_shift;

            if bit_shift != 0 && i > limb_shift {
                out[i] |= self.0[i - limb_shift - 1] >> (64 - bit_shift);
            }
        }

        U256(out)
    }
}

/// Logical right shift. Shifts of 256 bits or more yield zero.
impl Shr<u32> for U256 {
    type Output = U256;

    fn shr(self, shift: u32) -> Self::Output {
        if shift >= 256 {
            return U256::ZERO;
        }

        let limb_shift = (shift / 64) as usize;
        let bit_shift = shift % 64;
        let mut out = [0u64; 4];

        for i in 0..(4 - limb_shift) {
            out[i] = self.0[i + limb_shift] >> bit_shift;

            if bit_shift != 0 && i + limb_shift + 1 < 4 {
                out[i] |= self.0[i + limb_shift + 1] << (64 - bit_shift);
            }
        }

        U256(out)
    }
}
