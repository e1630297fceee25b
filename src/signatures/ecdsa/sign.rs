use crate::curve::{Point, Scalar, base_table};
use crate::error::Error;
use crate::keys::PrivateKey;
use crate::signatures::ecdsa::rfc6979::NonceGenerator;
use crate::signatures::ecdsa::{RecoveryId, Signature};

use log::{trace, warn};

/// Upper bound on RFC 6979 candidates tried before giving up.
///
/// Each rejection has probability about `2⁻¹²⁸`, so reaching the bound
/// means the HMAC construction itself is broken.
pub const MAX_NONCE_ATTEMPTS: usize = 1000;

/// Signing options.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignOptions {
    /// Return the recovery id alongside the signature.
    pub recovered: bool,
    /// Normalise to low-s form (`s ≤ n/2`).
    pub canonical: bool,
}

impl Default for SignOptions {
    fn default() -> Self {
        Self {
            recovered: false,
            canonical: true,
        }
    }
}

/// Result of [`sign`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SignOutput {
    pub signature: Signature,
    /// Present only when [`SignOptions::recovered`] was set.
    pub recovery_id: Option<RecoveryId>,
}

/// Deterministic ECDSA signature of a 32-byte digest.
///
/// ## Algorithm
///
/// 1. Derive nonce candidates `k` with RFC 6979 from the key and digest.
/// 2. For each candidate compute `R = k·G`, `r = R.x mod n` and
///    `s = k⁻¹·(z + r·d) mod n`, where `z` is the digest reduced mod `n`.
/// 3. Skip candidates with `k ∉ [1, n)`, `r = 0` or `s = 0`.
/// 4. With `canonical`, replace a high `s` by `n − s` and flip the
///    parity bit of the recovery id.
///
/// ## Errors
///
/// [`Error::NonceExhausted`] if [`MAX_NONCE_ATTEMPTS`] candidates were all
/// rejected. Rejected candidates are never reported individually.
pub fn sign(
    digest: &[u8; 32],
    private_key: &PrivateKey,
    options: SignOptions,
) -> Result<SignOutput, Error> {
    let z = Scalar::from_be_bytes_reduced(digest);
    let nonces = NonceGenerator::new(&private_key.to_bytes(), digest);

    for candidate in nonces.take(MAX_NONCE_ATTEMPTS) {
        let attempt = sign_with_nonce(&z, private_key.scalar(), &candidate);

        let (signature, recovery_id) = match attempt {
            Ok(result) => result,
            Err(Error::InvalidNonce) => {
                trace!("rejected nonce candidate");
                continue;
            }
            Err(err) => return Err(err),
        };

        let (signature, recovery_id) = if options.canonical && signature.has_high_s() {
            trace!("normalising high s");
            (signature.normalize_s(), recovery_id.flip_parity())
        } else {
            (signature, recovery_id)
        };

        return Ok(SignOutput {
            signature,
            recovery_id: options.recovered.then_some(recovery_id),
        });
    }

    warn!(
        "nonce generation exhausted after {} candidates",
        MAX_NONCE_ATTEMPTS
    );

    Err(Error::NonceExhausted)
}

/// One signing attempt with a given nonce candidate.
///
/// Returns the raw (possibly high-s) signature and its recovery id, or
/// [`Error::InvalidNonce`] when the candidate is unusable.
pub(crate) fn sign_with_nonce(
    z: &Scalar,
    d: &Scalar,
    candidate: &[u8; 32],
) -> Result<(Signature, RecoveryId), Error> {
    let k = Scalar::from_be_bytes(candidate).map_err(|_| Error::InvalidNonce)?;
    let k_inv = k.invert().ok_or(Error::InvalidNonce)?;

    let Point::Affine { x, y } = base_table().multiply(&k) else {
        return Err(Error::InvalidNonce);
    };

    let r = Scalar::reduce(&x.value());
    if r.is_zero() {
        return Err(Error::InvalidNonce);
    }

    let s = k_inv * (*z + r * *d);
    if s.is_zero() {
        return Err(Error::InvalidNonce);
    }

    let recovery_id = RecoveryId::from_parts(y.is_odd(), x.value() != r.value());

    Ok((Signature::new(r, s)?, recovery_id))
}
