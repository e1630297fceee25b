//! Modular arithmetic over the secp256k1 field prime and group order.
//!
//! Both moduli are "pseudo-Mersenne": they sit just below `2²⁵⁶`, so the
//! complement `c = 2²⁵⁶ − m` is small. A 512-bit product `hi·2²⁵⁶ + lo`
//! is reduced by folding:
//!
//! ```text
//! hi·2²⁵⁶ + lo ≡ hi·c + lo  (mod m)
//! ```
//!
//! which is repeated until the high half vanishes, followed by a single
//! conditional subtraction. For `P` the complement is 33 bits wide and two
//! folds suffice; for `n` it is 129 bits and a few more rounds are needed.
//!
//! [`Residue`] is generic over a zero-sized [`Modulus`] marker so that
//! [`FieldElement`] (mod `P`) and [`Scalar`] (mod `n`) share one
//! implementation but can never be mixed up.

use crate::curve::params::{HALF_N, N, N_COMPLEMENT, P, P_COMPLEMENT};
use crate::error::Error;
use crate::primitives::{U256, U512};

use std::fmt::{self, Debug, Formatter, LowerHex};
use std::hash::Hash;
use std::marker::PhantomData;
use std::ops::{Add, Mul, Neg, Sub};

/// A modulus just below `2²⁵⁶`.
pub trait Modulus: Copy + Clone + Debug + Default + PartialEq + Eq + Hash + 'static {
    /// The modulus `m`.
    const MODULUS: U256;

    /// `2²⁵⁶ − m`.
    const COMPLEMENT: U256;

    /// Short name used in debug output.
    const NAME: &'static str;
}

/// Marker for arithmetic modulo the field prime `P`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FieldModulus;

impl Modulus for FieldModulus {
    const MODULUS: U256 = P;
    const COMPLEMENT: U256 = P_COMPLEMENT;
    const NAME: &'static str = "FieldElement";
}

/// Marker for arithmetic modulo the group order `n`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrderModulus;

impl Modulus for OrderModulus {
    const MODULUS: U256 = N;
    const COMPLEMENT: U256 = N_COMPLEMENT;
    const NAME: &'static str = "Scalar";
}

/// An integer in `[0, m)`.
///
/// Every constructor and operation keeps the value fully reduced, so
/// equality and hashing compare canonical representatives.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Residue<M: Modulus> {
    value: U256,
    _modulus: PhantomData<M>,
}

/// Element of 𝔽ₚ, used for point coordinates.
pub type FieldElement = Residue<FieldModulus>;

/// Element of ℤ/nℤ, used for private keys, nonces and signature components.
pub type Scalar = Residue<OrderModulus>;

impl<M: Modulus> Residue<M> {
    pub const ZERO: Self = Self::from_canonical(U256::ZERO);
    pub const ONE: Self = Self::from_canonical(U256::ONE);

    /// Wraps a value already known to be below the modulus.
    pub(crate) const fn from_canonical(value: U256) -> Self {
        Self {
            value,
            _modulus: PhantomData,
        }
    }

    /// Accepts `value` only if it is already in `[0, m)`.
    pub fn new(value: U256) -> Result<Self, Error> {
        if value >= M::MODULUS {
            return Err(Error::OutOfRange);
        }

        Ok(Self::from_canonical(value))
    }

    pub fn from_u64(value: u64) -> Self {
        Self::reduce(&U256::from_u64(value))
    }

    /// Reduces any 256-bit integer modulo `m`.
    pub fn reduce(value: &U256) -> Self {
        // m > 2²⁵⁵, so one subtraction is enough
        if *value >= M::MODULUS {
            Self::from_canonical(*value - M::MODULUS)
        } else {
            Self::from_canonical(*value)
        }
    }

    /// Reduces a 512-bit integer modulo `m` by repeated folding.
    pub fn reduce_wide(value: &U512) -> Self {
        let mut lo = value.lo();
        let mut hi = value.hi();

        while !hi.is_zero() {
            let folded = hi.mul_wide(&M::COMPLEMENT);
            // hi·c < 2³⁸⁵, adding lo cannot overflow 512 bits
            let (sum, _) = folded.overflowing_add(&U512::from(lo));

            lo = sum.lo();
            hi = sum.hi();
        }

        Self::reduce(&lo)
    }

    /// Decodes 32 big-endian bytes, rejecting values `≥ m`.
    pub fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self, Error> {
        Self::new(U256::from_be_bytes(*bytes))
    }

    /// Decodes 32 big-endian bytes and reduces them modulo `m`.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::reduce(&U256::from_be_bytes(*bytes))
    }

    /// Decodes a slice that must be exactly 32 bytes long.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: &[u8; 32] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: 32,
            actual: bytes.len(),
        })?;

        Self::from_be_bytes(bytes)
    }

    pub fn to_be_bytes(&self) -> [u8; 32] {
        self.value.to_be_bytes()
    }

    /// The canonical integer representative.
    #[inline]
    pub fn value(&self) -> U256 {
        self.value
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.value.is_odd()
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.value.is_even()
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    pub fn double(&self) -> Self {
        *self + *self
    }

    /// Left-to-right square-and-multiply.
    ///
    /// Branches on the bits of `exponent`, which is always a public
    /// constant in this crate.
    pub fn pow(&self, exponent: &U256) -> Self {
        let mut acc = Self::ONE;

        for index in (0..exponent.bits()).rev() {
            acc = acc.square();

            if exponent.bit(index) {
                acc = acc * *self;
            }
        }

        acc
    }

    /// Multiplicative inverse via Fermat's little theorem, `a^(m−2)`.
    ///
    /// Returns `None` for zero.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        let exponent = M::MODULUS - U256::from_u64(2);
        Some(self.pow(&exponent))
    }
}

impl FieldElement {
    /// Square root for `P ≡ 3 (mod 4)`: `a^((P+1)/4)`, checked by squaring.
    ///
    /// Fails with [`Error::InvalidPoint`] when `self` is a quadratic
    /// non-residue, since the only caller is point decompression.
    pub fn sqrt(&self) -> Result<Self, Error> {
        // (P + 1) / 4 computed as (P >> 2) + 1, P ≡ 3 (mod 4)
        let exponent = (P >> 2) + U256::ONE;
        let root = self.pow(&exponent);

        if root.square() != *self {
            return Err(Error::InvalidPoint);
        }

        Ok(root)
    }
}

impl Scalar {
    /// `true` when the value exceeds `⌊n/2⌋`.
    pub fn is_high(&self) -> bool {
        self.value > HALF_N
    }

    /// Largest valid "low" scalar, `⌊n/2⌋`.
    pub fn half_order() -> U256 {
        HALF_N
    }
}

impl<M: Modulus> Add for Residue<M> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let (sum, carry) = self.value.overflowing_add(&rhs.value);

        if carry || sum >= M::MODULUS {
            // the true sum is below 2m, wrapping subtraction lands in range
            Self::from_canonical(sum - M::MODULUS)
        } else {
            Self::from_canonical(sum)
        }
    }
}

impl<M: Modulus> Sub for Residue<M> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let (diff, borrow) = self.value.overflowing_sub(&rhs.value);

        if borrow {
            Self::from_canonical(diff + M::MODULUS)
        } else {
            Self::from_canonical(diff)
        }
    }
}

impl<M: Modulus> Mul for Residue<M> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::reduce_wide(&self.value.mul_wide(&rhs.value))
    }
}

impl<M: Modulus> Neg for Residue<M> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<M: Modulus> Debug for Residue<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:x})", M::NAME, self.value)
    }
}

impl<M: Modulus> LowerHex for Residue<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        LowerHex::fmt(&self.value, f)
    }
}
