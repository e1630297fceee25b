//! Cryptographically secure pseudorandom number generator.
//!
//! A thin wrapper over `rand`'s `StdRng` (ChaCha12). The default instance is
//! seeded from the operating system; [`Csprng::from_seed`] exists for
//! reproducible tests and benchmarks.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Cryptographically secure pseudorandom number generator.
pub struct Csprng {
    inner: StdRng,
}

impl Csprng {
    /// Creates a new generator seeded from the operating system.
    pub fn new() -> Self {
        Self::from_os()
    }

    /// Creates a new generator seeded from the operating system.
    pub fn from_os() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }

    /// Creates a generator from a caller-provided seed.
    ///
    /// The seed must be uniformly random and unpredictable for the output to
    /// be usable as key material. The caller's copy is wiped.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let inner = StdRng::from_seed(seed);
        seed.fill(0);

        Self { inner }
    }

    /// Fills the provided buffer with random bytes.
    pub fn fill_bytes(&mut self, out: &mut [u8]) {
        self.inner.fill_bytes(out);
    }
}

impl Default for Csprng {
    fn default() -> Self {
        Self::new()
    }
}
