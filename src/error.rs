use thiserror::Error;

/// Errors returned by key, point and signature operations.
///
/// Verification never produces an error: malformed inputs are reported as
/// a failed verification so callers cannot tell "malformed" from "wrong".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An integer is outside the range of its modulus.
    #[error("Value out of range")]
    OutOfRange,
    /// Private key is zero, not below the group order, or has the wrong length.
    #[error("Invalid private key")]
    InvalidPrivateKey,
    /// Public key bytes do not decode to a point on the curve.
    #[error("Invalid public key")]
    InvalidPublicKey,
    /// Coordinates are not a valid curve point, or an encoding is malformed.
    #[error("Invalid point")]
    InvalidPoint,
    /// Signature component out of range, malformed encoding, or no recovery solution.
    #[error("Invalid signature")]
    InvalidSignature,
    /// Recovery selector outside `0..=3`.
    #[error("Invalid recovery id {0}")]
    InvalidRecoveryId(u8),
    /// A nonce candidate produced a degenerate signature.
    #[error("Invalid nonce")]
    InvalidNonce,
    /// Deterministic nonce generation ran out of candidates.
    #[error("Nonce generation exhausted")]
    NonceExhausted,
    /// Precomputation window outside the supported range.
    #[error("Invalid window size {0}")]
    InvalidWindowSize(usize),
    /// Input is not valid hexadecimal.
    #[error("Invalid hex")]
    InvalidHex,
    /// Fixed-width input of the wrong length.
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Error::InvalidHex
    }
}
