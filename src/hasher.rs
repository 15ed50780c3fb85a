//! Streaming SHA-1 accumulator.
//!
//! One use per instance: call [`Hasher::update`] any number of times, then
//! [`Hasher::finalize`] exactly once to consume it. The reader uses this to
//! verify self-consistency of a decoded object; the writer uses it to mint
//! a digest from a canonical pre-image.

use sha1::Digest as _;

use crate::digest::Digest;

/// A streaming SHA-1 accumulator.
pub struct Hasher(sha1::Sha1);

impl Hasher {
    /// Start a new, empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self(sha1::Sha1::new())
    }

    /// Feed more bytes into the accumulator.
    pub fn update(&mut self, bytes: &[u8]) {
        self.0.update(bytes);
    }

    /// Consume the accumulator, producing the final digest.
    #[must_use]
    pub fn finalize(self) -> Digest {
        let out = self.0.finalize();
        let mut bytes = [0u8; crate::digest::DIGEST_BYTES];
        bytes.copy_from_slice(&out);
        Digest::from_bytes(bytes)
    }

    /// Convenience: hash a single byte slice in one call.
    #[must_use]
    pub fn digest_of(bytes: &[u8]) -> Digest {
        let mut h = Self::new();
        h.update(bytes);
        h.finalize()
    }
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}
