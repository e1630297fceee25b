//! secp256k1 domain parameters (SEC 2, section 2.4.1).
//!
//! The curve is the short Weierstrass curve
//!
//! ```text
//! y² = x³ + a·x + b  over 𝔽ₚ,  a = 0, b = 7
//! ```
//!
//! with a prime-order group (`h = 1`) generated by `G = (Gx, Gy)`.

use crate::primitives::U256;

/// Raw curve parameters as integers.
///
/// Exposed read-only for callers that need direct access to the constants.
/// Internal arithmetic uses the typed constants below.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CurveParameters {
    pub a: U256,
    pub b: U256,
    /// Field prime `2²⁵⁶ − 2³² − 977`.
    pub p: U256,
    /// Group order.
    pub n: U256,
    /// Cofactor.
    pub h: U256,
    pub gx: U256,
    pub gy: U256,
    /// Cube root of unity in 𝔽ₚ used by the GLV endomorphism
    /// `(x, y) ↦ (β·x, y)`.
    pub beta: U256,
}

pub(crate) const P: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f");

pub(crate) const N: U256 =
    U256::from_be_hex("fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141");

/// `2²⁵⁶ − P`
pub(crate) const P_COMPLEMENT: U256 =
    U256::from_be_hex("00000000000000000000000000000000000000000000000000000001000003d1");

/// `2²⁵⁶ − n`
pub(crate) const N_COMPLEMENT: U256 =
    U256::from_be_hex("000000000000000000000000000000014551231950b75fc4402da1732fc9bebf");

/// `⌊n / 2⌋`, the largest low-s value.
pub(crate) const HALF_N: U256 =
    U256::from_be_hex("7fffffffffffffffffffffffffffffff5d576e7357a4501ddfe92f46681b20a0");

pub(crate) const GX: U256 =
    U256::from_be_hex("79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798");

pub(crate) const GY: U256 =
    U256::from_be_hex("483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8");

pub(crate) const BETA: U256 =
    U256::from_be_hex("7ae96a2b657c07106e64479eac3434e99cf0497512f58995c1396c28719501ee");

/// The secp256k1 parameters.
pub const CURVE: CurveParameters = CurveParameters {
    a: U256::ZERO,
    b: U256::from_u64(7),
    p: P,
    n: N,
    h: U256::ONE,
    gx: GX,
    gy: GY,
    beta: BETA,
};
