use crate::curve::endomorphism;
use crate::curve::{JacobianPoint, Point, Scalar, base_table};
use crate::keys::PublicKey;
use crate::signatures::ecdsa::Signature;

/// Verifies an ECDSA signature over a 32-byte digest.
///
/// Computes `R' = (z·s⁻¹)·G + (r·s⁻¹)·Q` and accepts iff `R'` is not the
/// identity and `R'.x mod n = r`. Both high-s and low-s signatures are
/// accepted.
///
/// Never fails: a typed [`Signature`] and [`PublicKey`] are valid by
/// construction, and decoding failures at the byte boundary are mapped to
/// `false` by the caller.
pub fn verify(signature: &Signature, digest: &[u8; 32], public_key: &PublicKey) -> bool {
    let z = Scalar::from_be_bytes_reduced(digest);

    let Some(s_inv) = signature.s().invert() else {
        return false;
    };

    let u1 = z * s_inv;
    let u2 = *signature.r() * s_inv;

    let q = JacobianPoint::from_affine(&public_key.point());
    let r_point = base_table()
        .multiply_jacobian(&u1)
        .add(&endomorphism::multiply_unsafe(&q, &u2))
        .to_affine();

    match r_point {
        Point::Identity => false,
        Point::Affine { x, .. } => Scalar::reduce(&x.value()) == *signature.r(),
    }
}
