use crate::curve::Point;
use crate::error::Error;
use crate::keys::{PrivateKey, PublicKey};

/// Elliptic-curve Diffie–Hellman.
///
/// Computes the shared point `a·B` between a local private key and a peer
/// public key. Both parties obtain the same point since
/// `a·(b·G) = b·(a·G)`.
///
/// ## Inputs
///
/// - `private`: local private key, already validated to lie in `[1, n)`.
/// - `public`: peer public key, already validated to lie on the curve.
///
/// ## Return value
///
/// The full shared point. Callers usually hash its encoding, or its
/// x coordinate, into a symmetric key; no KDF is applied here.
///
/// ## Security
///
/// The multiplication uses the fixed-window path, so the sequence of
/// group operations does not depend on the private scalar.
pub fn shared_point(private: &PrivateKey, public: &PublicKey) -> Point {
    public.point().multiply(private.scalar())
}

/// ECDH on encoded keys, returning the SEC1 encoding of the shared point.
///
/// Fails with [`Error::InvalidPrivateKey`] for a zero, out-of-range or
/// wrongly sized private key, and with [`Error::InvalidPublicKey`] for a
/// peer key that is not a valid curve point.
pub fn shared_secret(private: &[u8], public: &[u8], compressed: bool) -> Result<Vec<u8>, Error> {
    let private = PrivateKey::from_slice(private)?;
    let public = PublicKey::from_bytes(public)?;

    let point = shared_point(&private, &public);

    // a ∈ [1, n) and B has prime order n, so a·B is never the identity
    point.to_bytes(compressed)
}
