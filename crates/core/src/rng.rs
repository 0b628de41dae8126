//! RNG module - entropy sources for fruit placement and cosmetic colors
//!
//! The game only ever needs raw random bytes: a candidate fruit index and, in
//! the cosmetic mode, arbitrary pixel colors. [`EntropySource`] is the seam the
//! rest of the crate is written against.
//!
//! Two sources are provided:
//!
//! - [`OsEntropy`]: the operating system's CSPRNG (through `rand::rngs::OsRng`)
//! - [`SimpleRng`]: a seeded LCG for reproducible runs and deterministic tests

use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

/// Failure to obtain random bytes.
///
/// Callers must never treat a failed fill as valid data.
#[derive(Debug, Error)]
pub enum EntropyError {
    #[error("operating system entropy source failed: {0}")]
    Os(#[from] rand::Error),
    #[error("entropy source unavailable: {0}")]
    Unavailable(&'static str),
}

/// A source of random bytes.
pub trait EntropySource {
    /// Fill `buf` completely, or fail without promising anything about its contents.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError>;

    fn next_u32(&mut self) -> Result<u32, EntropyError> {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes)?;
        Ok(u32::from_le_bytes(bytes))
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        (**self).fill_bytes(buf)
    }
}

/// Operating-system entropy (`getrandom` under the hood).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        OsRng.try_fill_bytes(buf)?;
        Ok(())
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl EntropySource for SimpleRng {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> Result<(), EntropyError> {
        for chunk in buf.chunks_mut(4) {
            // High bits of an LCG are the well-mixed ones.
            let bytes = SimpleRng::next_u32(self).to_be_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
        Ok(())
    }
}

/// A source that always fails. Used to exercise fallback paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn fill_bytes(&mut self, _buf: &mut [u8]) -> Result<(), EntropyError> {
        Err(EntropyError::Unavailable("failing source"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_fill_bytes_handles_partial_chunks() {
        let mut rng = SimpleRng::new(7);
        let mut buf = [0u8; 7];
        EntropySource::fill_bytes(&mut rng, &mut buf).unwrap();

        let mut replay = SimpleRng::new(7);
        let a = replay.next_u32().to_be_bytes();
        let b = replay.next_u32().to_be_bytes();
        assert_eq!(&buf[..4], &a);
        assert_eq!(&buf[4..], &b[..3]);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(225) < 225);
        }
    }

    #[test]
    fn test_failing_source_reports_error() {
        let mut src = FailingEntropy;
        assert!(matches!(
            EntropySource::next_u32(&mut src),
            Err(EntropyError::Unavailable(_))
        ));
    }

    #[test]
    fn test_os_entropy_fills_buffer() {
        let mut src = OsEntropy;
        let mut buf = [0u8; 32];
        src.fill_bytes(&mut buf).unwrap();
        // 32 zero bytes from a CSPRNG is not a realistic outcome.
        assert!(buf.iter().any(|&b| b != 0));
    }
}
