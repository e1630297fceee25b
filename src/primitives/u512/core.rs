//! 512-bit unsigned integer primitive
//!
//! Stored as eight 64-bit limbs in little-endian limb order, mirroring
//! [`U256`].

use crate::primitives::U256;

/// Fixed-size 512-bit unsigned integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct U512(pub(crate) [u64; 8]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0; 8]);

    /// Builds a value from little-endian ordered limbs.
    pub const fn from_limbs(limbs: [u64; 8]) -> Self {
        Self(limbs)
    }

    /// Builds `hi · 2²⁵⁶ + lo`.
    pub fn from_halves(lo: U256, hi: U256) -> Self {
        let mut out = [0u64; 8];

        out[..4].copy_from_slice(&lo.limbs());
        out[4..].copy_from_slice(&hi.limbs());

        Self(out)
    }

    /// The least significant 256 bits.
    pub fn lo(&self) -> U256 {
        U256::from_limbs([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// The most significant 256 bits.
    pub fn hi(&self) -> U256 {
        U256::from_limbs([self.0[4], self.0[5], self.0[6], self.0[7]])
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    fn bit(&self, index: usize) -> bool {
        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Adds `rhs`, returning the wrapped sum and the outgoing carry.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 8];
        let mut carry = false;

        for (o, (&a, &b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(carry as u64);

            *o = sum;
            carry = c1 | c2;
        }

        (Self(out), carry)
    }

    /// Long division by a 256-bit divisor, returning `(quotient, remainder)`.
    ///
    /// Binary restoring division, one quotient bit per iteration. Only used
    /// on public values (scalar decomposition), so the data-dependent
    /// subtraction is acceptable.
    ///
    /// # Panics
    /// Panics if `divisor` is zero.
    pub fn div_rem(&self, divisor: &U256) -> (U512, U256) {
        assert!(!divisor.is_zero(), "division by zero");

        let mut quotient = [0u64; 8];
        let mut rem = U256::ZERO;

        for index in (0..512).rev() {
            let (shifted, carry) = rem.shl1();
            let mut next = shifted;

            if self.bit(index) {
                next = next | U256::ONE;
            }

            if carry || next >= *divisor {
                next = next - *divisor;
                quotient[index / 64] |= 1 << (index % 64);
            }

            rem = next;
        }

        (U512(quotient), rem)
    }
}

impl From<U256> for U512 {
    fn from(value: U256) -> Self {
        U512::from_halves(value, U256::ZERO)
    }
}
