//! 256-bit unsigned integer primitive
//!
//! `U256` is a simple, explicit value type rather than a general purpose
//! big-integer library. It offers exactly what modular arithmetic over the
//! secp256k1 field and group order needs:
//! - carry-propagating addition and borrow-propagating subtraction
//! - widening multiplication into a [`U512`]
//! - bit access and single-bit shifts for square-and-multiply loops
//! - reduction of arbitrary-length big-endian byte strings
//!
//! The value is stored as four 64-bit limbs in **little-endian** limb
//! order (`limbs[0]` is the least significant word). Byte conversions are
//! always big-endian, matching SEC1 and BIP340 encodings.

use crate::primitives::U512;

use std::cmp::Ordering;

/// Fixed-size 256-bit unsigned integer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U256(pub(crate) [u64; 4]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0; 4]);

    /// The value one.
    pub const ONE: Self = Self([1, 0, 0, 0]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Builds a value from little-endian ordered limbs.
    pub const fn from_limbs(limbs: [u64; 4]) -> Self {
        Self(limbs)
    }

    /// Builds a value from a native 64-bit integer.
    pub const fn from_u64(value: u64) -> Self {
        Self([value, 0, 0, 0])
    }

    /// Parses exactly 64 big-endian hexadecimal digits.
    ///
    /// This is a `const` constructor meant for curve constants. Malformed
    /// input panics, which turns into a compile error when evaluated in a
    /// constant context. Runtime input goes through [`crate::encoding`].
    pub const fn from_be_hex(hex: &str) -> Self {
        let bytes = hex.as_bytes();
        assert!(bytes.len() == 64, "expected 64 hexadecimal digits");

        let mut limbs = [0u64; 4];
        let mut i = 0;

        while i < 64 {
            let digit = match bytes[i] {
                b'0'..=b'9' => bytes[i] - b'0',
                b'a'..=b'f' => bytes[i] - b'a' + 10,
                b'A'..=b'F' => bytes[i] - b'A' + 10,
                _ => panic!("invalid hexadecimal digit"),
            };

            // nibble position counted from the least significant end
            let pos = 63 - i;
            limbs[pos / 16] |= (digit as u64) << ((pos % 16) * 4);

            i += 1;
        }

        Self(limbs)
    }

    /// Returns the limbs in little-endian order.
    #[inline]
    pub const fn limbs(&self) -> [u64; 4] {
        self.0
    }

    /// Returns the least significant 64 bits.
    #[inline]
    pub const fn low_u64(&self) -> u64 {
        self.0[0]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Returns bit `index`, counted from the least significant bit.
    ///
    /// Indices `>= 256` read as zero.
    #[inline]
    pub fn bit(&self, index: usize) -> bool {
        if index >= 256 {
            return false;
        }

        (self.0[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of leading zero bits, in `0..=256`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.0.iter().rev() {
            if limb == 0 {
                count += 64;
            } else {
                return count + limb.leading_zeros();
            }
        }

        count
    }

    /// Position of the highest set bit plus one (`0` for zero).
    #[inline]
    pub fn bits(&self) -> usize {
        256 - self.leading_zeros() as usize
    }

    /// Adds `rhs`, returning the wrapped sum and the outgoing carry.
    pub fn overflowing_add(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = false;

        for (o, (&a, &b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            let (sum, c1) = a.overflowing_add(b);
            let (sum, c2) = sum.overflowing_add(carry as u64);

            *o = sum;
            carry = c1 | c2;
        }

        (Self(out), carry)
    }

    /// Subtracts `rhs`, returning the wrapped difference and the outgoing
    /// borrow.
    pub fn overflowing_sub(&self, rhs: &Self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut borrow = false;

        for (o, (&a, &b)) in out.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            let (diff, b1) = a.overflowing_sub(b);
            let (diff, b2) = diff.overflowing_sub(borrow as u64);

            *o = diff;
            borrow = b1 | b2;
        }

        (Self(out), borrow)
    }

    /// Full 256×256 → 512-bit schoolbook multiplication.
    pub fn mul_wide(&self, rhs: &Self) -> U512 {
        let mut out = [0u64; 8];

        for i in 0..4 {
            let mut carry = 0u128;

            for j in 0..4 {
                // (2⁶⁴−1)² + 2·(2⁶⁴−1) still fits in a u128
                let t = (self.0[i] as u128) * (rhs.0[j] as u128) + (out[i + j] as u128) + carry;

                out[i + j] = t as u64;
                carry = t >> 64;
            }

            out[i + 4] = carry as u64;
        }

        U512::from_limbs(out)
    }

    /// Shifts left by one bit, returning the bit shifted out of the top.
    pub fn shl1(&self) -> (Self, bool) {
        let mut out = [0u64; 4];
        let mut carry = 0u64;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()) {
            *o = (limb << 1) | carry;
            carry = limb >> 63;
        }

        (Self(out), carry == 1)
    }

    /// Shifts right by one bit.
    pub fn shr1(&self) -> Self {
        let mut out = [0u64; 4];
        let mut carry = 0u64;

        for (o, &limb) in out.iter_mut().zip(self.0.iter()).rev() {
            *o = (limb >> 1) | carry;
            carry = limb << 63;
        }

        Self(out)
    }

    /// Extracts `width` bits (at most 64) starting at bit `offset`.
    ///
    /// Bits beyond the top of the integer read as zero, so the last
    /// window of a scan may be narrower than `width`.
    pub fn bits_at(&self, offset: usize, width: usize) -> u64 {
        debug_assert!(width <= 64);

        let mut out = 0u64;

        for i in 0..width {
            if self.bit(offset + i) {
                out |= 1 << i;
            }
        }

        out
    }

    /// Interprets `bytes` as a big-endian integer of any length and
    /// returns it modulo `modulus`.
    ///
    /// The reduction is a plain shift-and-subtract over every input bit,
    /// so the cost is linear in the input length. `modulus` must be
    /// non-zero.
    pub fn rem_be_bytes(bytes: &[u8], modulus: &Self) -> Self {
        assert!(!modulus.is_zero(), "modulus must be non-zero");

        let mut rem = Self::ZERO;

        for &byte in bytes {
            for shift in (0..8).rev() {
                let (doubled, carry) = rem.shl1();
                let mut next = doubled;
                next.0[0] |= ((byte >> shift) & 1) as u64;

                // rem < modulus before the shift, so one subtraction is
                // enough even when the doubling carried out of 256 bits
                if carry || next >= *modulus {
                    next = next.overflowing_sub(modulus).0;
                }

                rem = next;
            }
        }

        rem
    }
}

impl PartialOrd for U256 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for U256 {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        Ordering::Equal
    }
}
