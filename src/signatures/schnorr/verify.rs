use crate::curve::endomorphism;
use crate::curve::{JacobianPoint, Point, base_table};
use crate::keys::PublicKey;
use crate::signatures::schnorr::SchnorrSignature;
use crate::signatures::schnorr::sign::challenge;

/// BIP340 verification.
///
/// The key is used through its x coordinate only, so a key with odd `y`
/// verifies exactly like its even-`y` twin.
///
/// Computes `R' = s·G − e·P` and accepts iff `R'` is not the identity, has
/// even `y` and `R'.x = r`.
pub fn verify(signature: &SchnorrSignature, message: &[u8], public_key: &PublicKey) -> bool {
    let px = public_key.to_x_only();
    let Ok(public) = PublicKey::from_x_only(&px) else {
        return false;
    };

    let e = challenge(&signature.r().to_be_bytes(), &px, message);

    let p = JacobianPoint::from_affine(&public.point());
    let r_point = base_table()
        .multiply_jacobian(signature.s())
        .add(&endomorphism::multiply_unsafe(&p, &-e))
        .to_affine();

    match r_point {
        Point::Identity => false,
        Point::Affine { x, y } => y.is_even() && x == *signature.r(),
    }
}
