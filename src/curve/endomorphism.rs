//! GLV endomorphism for variable-time multiplication.
//!
//! secp256k1 has an efficiently computable endomorphism
//!
//! ```text
//! φ(x, y) = (β·x, y) = λ·(x, y)
//! ```
//!
//! where `β` is a cube root of unity mod `P` and `λ` one mod `n`. Writing
//! `k = k₁ + k₂·λ (mod n)` with `|k₁|, |k₂| < 2¹²⁸` turns one 256-bit
//! multiplication into two 128-bit ones that share their doublings.
//!
//! The decomposition uses the short lattice basis `(a₁, b₁), (a₂, b₂)`
//! from "Guide to Elliptic Curve Cryptography", algorithm 3.74.
//!
//! Only used on public scalars: the loop branches on scalar bits.

use crate::curve::field::{FieldElement, Scalar};
use crate::curve::jacobian::JacobianPoint;
use crate::curve::params::{BETA, N};
use crate::primitives::U256;

const A1: U256 =
    U256::from_be_hex("000000000000000000000000000000003086d221a7d46bcde86c90e49284eb15");

/// `−b₁`
const MINUS_B1: U256 =
    U256::from_be_hex("00000000000000000000000000000000e4437ed6010e88286f547fa90abfe4c3");

const A2: U256 =
    U256::from_be_hex("0000000000000000000000000000000114ca50f7a8e2f3f657c1108d9d44cfd8");

/// `b₂ = a₁`
const B2: U256 = A1;

/// `λ`, a cube root of unity modulo `n` matching `β`.
pub const LAMBDA: U256 =
    U256::from_be_hex("5363ad4cc05c30e0a5261c028812645a122e22ea20816678df02967c1b23bd72");

const HALF_BITS: usize = 128;

/// `k = k₁ + k₂·λ`, with each half stored as a magnitude and a sign.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SplitScalar {
    pub k1: U256,
    pub k1_neg: bool,
    pub k2: U256,
    pub k2_neg: bool,
}

/// Splits `k` into two halves of at most 128 bits.
///
/// Returns `None` if either half does not fit, which the basis rules out
/// for every `k < n`.
pub fn split_scalar(k: &Scalar) -> Option<SplitScalar> {
    let value = k.value();

    let c1 = div_nearest(&B2, &value);
    let c2 = div_nearest(&MINUS_B1, &value);

    let a1 = Scalar::reduce(&A1);
    let a2 = Scalar::reduce(&A2);
    let minus_b1 = Scalar::reduce(&MINUS_B1);

    let k1 = *k - c1 * a1 - c2 * a2;
    let k2 = c1 * minus_b1 - c2 * a1;

    let (k1, k1_neg) = magnitude(k1);
    let (k2, k2_neg) = magnitude(k2);

    if k1.bits() > HALF_BITS || k2.bits() > HALF_BITS {
        return None;
    }

    Some(SplitScalar {
        k1,
        k1_neg,
        k2,
        k2_neg,
    })
}

/// Variable-time `k·P`.
///
/// Runs a simultaneous double-and-add over both halves, then combines
/// `k₁·P + φ(k₂·P)`. Falls back to plain double-and-add if the split
/// fails.
pub fn multiply_unsafe(point: &JacobianPoint, k: &Scalar) -> JacobianPoint {
    if point.is_identity() || k.is_zero() {
        return JacobianPoint::IDENTITY;
    }
    if *k == Scalar::ONE {
        return *point;
    }

    let Some(split) = split_scalar(k) else {
        return point.multiply_double_and_add(&k.value());
    };

    let mut k1p = JacobianPoint::IDENTITY;
    let mut k2p = JacobianPoint::IDENTITY;
    let mut d = *point;

    let bits = split.k1.bits().max(split.k2.bits());

    for index in 0..bits {
        if split.k1.bit(index) {
            k1p = k1p.add(&d);
        }
        if split.k2.bit(index) {
            k2p = k2p.add(&d);
        }
        d = d.double();
    }

    if split.k1_neg {
        k1p = k1p.negate();
    }
    if split.k2_neg {
        k2p = k2p.negate();
    }

    let beta = FieldElement::from_canonical(BETA);

    k1p.add(&k2p.mul_x(&beta))
}

/// `⌊(a·b + n/2) / n⌋`
fn div_nearest(a: &U256, b: &U256) -> Scalar {
    let product = a.mul_wide(b);
    let (rounded, _) = product.overflowing_add(&(N >> 1).into());
    let (quotient, _) = rounded.div_rem(&N);

    // a < 2¹²⁹ and b < n, so the quotient is below 2¹²⁹
    Scalar::reduce(&quotient.lo())
}

/// Interprets values above `2¹²⁸` as negative: returns `(n − v, true)`.
fn magnitude(value: Scalar) -> (U256, bool) {
    if value.value().bits() > HALF_BITS {
        ((-value).value(), true)
    } else {
        (value.value(), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed(value: U256, negative: bool) -> Scalar {
        let scalar = Scalar::reduce(&value);
        if negative { -scalar } else { scalar }
    }

    #[test]
    fn split_recombines() {
        let lambda = Scalar::reduce(&LAMBDA);
        let samples = [
            Scalar::ONE,
            Scalar::from_u64(0xdead_beef),
            -Scalar::ONE,
            Scalar::reduce(&U256::from_be_hex(
                "9d2ba55e1f3e3b8b7e1c0a3f4b5d6c7e8f90a1b2c3d4e5f60718293a4b5c6d7e",
            )),
        ];

        for k in samples {
            let split = split_scalar(&k).expect("split fits in 128 bits");
            let recombined = signed(split.k1, split.k1_neg) + signed(split.k2, split.k2_neg) * lambda;

            assert_eq!(recombined, k);
        }
    }

    #[test]
    fn beta_matches_lambda() {
        let g = JacobianPoint::from_affine(&crate::curve::Point::BASE);
        let beta = FieldElement::from_canonical(BETA);

        assert_eq!(g.mul_x(&beta), g.multiply_double_and_add(&LAMBDA));
    }
}
