use crate::curve::endomorphism;
use crate::curve::{CURVE, FieldElement, JacobianPoint, Point, Scalar, base_table};
use crate::error::Error;
use crate::keys::PublicKey;
use crate::signatures::ecdsa::{RecoveryId, Signature};

/// Recovers the public key that produced `signature` over `digest`.
///
/// ## Algorithm
///
/// 1. Rebuild `R.x` as `r`, or `r + n` when the id says `R.x ≥ n`.
/// 2. Decompress `R` with the `y` parity from the id.
/// 3. `Q = r⁻¹·(s·R − z·G)`.
///
/// ## Errors
///
/// [`Error::InvalidSignature`] when `r + n ≥ P`, when `R.x` is not on the
/// curve, or when `Q` is the identity.
pub fn recover(
    digest: &[u8; 32],
    signature: &Signature,
    recovery_id: RecoveryId,
) -> Result<PublicKey, Error> {
    let r = *signature.r();
    let s = *signature.s();
    let z = Scalar::from_be_bytes_reduced(digest);

    let x = if recovery_id.is_x_reduced() {
        let (value, carry) = r.value().overflowing_add(&CURVE.n);
        if carry {
            return Err(Error::InvalidSignature);
        }
        value
    } else {
        r.value()
    };

    let x = FieldElement::new(x).map_err(|_| Error::InvalidSignature)?;
    let big_r = Point::decompress(&x, recovery_id.is_y_odd())
        .map_err(|_| Error::InvalidSignature)?;

    let r_inv = r.invert().ok_or(Error::InvalidSignature)?;
    let u1 = -(z * r_inv);
    let u2 = s * r_inv;

    let q = base_table()
        .multiply_jacobian(&u1)
        .add(&endomorphism::multiply_unsafe(
            &JacobianPoint::from_affine(&big_r),
            &u2,
        ))
        .to_affine();

    if q.is_identity() {
        return Err(Error::InvalidSignature);
    }

    PublicKey::from_point(q).map_err(|_| Error::InvalidSignature)
}
