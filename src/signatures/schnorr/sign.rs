use crate::curve::{Point, Scalar, base_table};
use crate::error::Error;
use crate::hash::tagged_hash;
use crate::keys::{PrivateKey, PublicKey};
use crate::signatures::schnorr::{SchnorrSignature, TAG_AUX, TAG_CHALLENGE, TAG_NONCE, verify};

/// BIP340 signature over `message` with 32 bytes of auxiliary randomness.
///
/// ## Algorithm
///
/// 1. `P = d'·G`; use `d = d'` if `P.y` is even, otherwise `n − d'`.
/// 2. `t = d ⊕ H_aux(a)`, `k' = H_nonce(t ‖ P.x ‖ m) mod n`.
/// 3. `R = k'·G`; use `k = k'` if `R.y` is even, otherwise `n − k'`.
/// 4. `e = H_challenge(R.x ‖ P.x ‖ m) mod n`, `s = k + e·d`.
///
/// The signature is verified before being returned.
///
/// ## Errors
///
/// - [`Error::InvalidNonce`] if `k'` is zero.
/// - [`Error::InvalidSignature`] if the fresh signature does not verify.
pub fn sign(
    message: &[u8],
    private_key: &PrivateKey,
    aux_rand: &[u8; 32],
) -> Result<SchnorrSignature, Error> {
    let public = PublicKey::from_private_key(private_key);
    let px = public.to_x_only();

    let d = if public.has_even_y() {
        *private_key.scalar()
    } else {
        -*private_key.scalar()
    };

    let mask = tagged_hash(TAG_AUX, &[aux_rand]);
    let mut t = d.to_be_bytes();
    t.iter_mut().zip(mask.iter()).for_each(|(t, m)| *t ^= m);

    let nonce = tagged_hash(TAG_NONCE, &[&t, &px, message]);
    t.fill(0);

    let k_prime = Scalar::from_be_bytes_reduced(&nonce);
    if k_prime.is_zero() {
        return Err(Error::InvalidNonce);
    }

    let Point::Affine { x: rx, y: ry } = base_table().multiply(&k_prime) else {
        return Err(Error::InvalidNonce);
    };

    let k = if ry.is_even() { k_prime } else { -k_prime };

    let e = challenge(&rx.to_be_bytes(), &px, message);
    let signature = SchnorrSignature::new(rx, k + e * d);

    if !verify(&signature, message, &public) {
        return Err(Error::InvalidSignature);
    }

    Ok(signature)
}

/// `H_challenge(R.x ‖ P.x ‖ m) mod n`
pub(crate) fn challenge(rx: &[u8; 32], px: &[u8; 32], message: &[u8]) -> Scalar {
    Scalar::from_be_bytes_reduced(&tagged_hash(TAG_CHALLENGE, &[rx, px, message]))
}
