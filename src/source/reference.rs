//! ChaCha20 keystream exposed as a bounded reader.

use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};
use std::io::{self, Read};

/// A [`Read`] yielding `len` bytes of ChaCha20 output, then end of stream.
pub struct ReferenceSource {
    inner: ChaCha20Rng,
    remaining: u64,
}

impl ReferenceSource {
    /// Seeds the keystream from the OS entropy source.
    pub fn from_os_entropy(len: u64) -> Self {
        let mut seed = [0u8; 32];
        rand_core::OsRng.fill_bytes(&mut seed);
        Self::from_seed(seed, len)
    }

    /// Creates a deterministic keystream from a fixed seed.
    pub fn from_seed(seed: [u8; 32], len: u64) -> Self {
        Self {
            inner: ChaCha20Rng::from_seed(seed),
            remaining: len,
        }
    }

    /// Bytes left before end of stream.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Read for ReferenceSource {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(usize::try_from(self.remaining).unwrap_or(usize::MAX));
        self.inner.fill_bytes(&mut buf[..n]);
        self.remaining -= n as u64;
        Ok(n)
    }
}

impl std::fmt::Debug for ReferenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Don't expose internal RNG state
        f.debug_struct("ReferenceSource")
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_length() {
        let mut src = ReferenceSource::from_seed([1u8; 32], 100);
        let mut out = Vec::new();
        src.read_to_end(&mut out).unwrap();
        assert_eq!(out.len(), 100);
        assert_eq!(src.remaining(), 0);
    }

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        ReferenceSource::from_seed([9u8; 32], 64).read_to_end(&mut a).unwrap();
        ReferenceSource::from_seed([9u8; 32], 64).read_to_end(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_os_seeded_streams_differ() {
        let mut a = [0u8; 32];
        let mut b = [0u8; 32];
        ReferenceSource::from_os_entropy(32).read_exact(&mut a).unwrap();
        ReferenceSource::from_os_entropy(32).read_exact(&mut b).unwrap();
        assert_ne!(a, b);
    }
}
