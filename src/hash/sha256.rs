use sha2::{Digest, Sha256};

/// SHA-256 of a single message.
pub fn sha256(input: &[u8]) -> [u8; 32] {
    Sha256::digest(input).into()
}

/// SHA-256 of the concatenation of `parts`, without allocating the
/// concatenation.
pub fn sha256_concat(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();

    for part in parts {
        hasher.update(part);
    }

    hasher.finalize().into()
}
