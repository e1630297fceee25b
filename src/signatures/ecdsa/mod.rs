//! ECDSA over secp256k1.
//!
//! - deterministic signing with RFC 6979 nonces and optional low-s
//!   normalisation
//! - verification that reports every failure as `false`
//! - public-key recovery from `(r, s)` and a 2-bit recovery id
//! - compact (`r ‖ s`) and strict DER encodings
//!
//! Digests are fixed at 32 bytes; hashing the message is the caller's job.

mod der;
pub mod rfc6979;
mod recover;
mod sign;
mod signature;
mod verify;

pub use recover::recover;
pub use sign::{MAX_NONCE_ATTEMPTS, SignOptions, SignOutput, sign};
pub use signature::{COMPACT_LEN, RecoveryId, Signature};
pub use verify::verify;
