// src/generators/random_source.rs
use rand::rngs::{OsRng, SmallRng};
use rand::{RngCore, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Uniform random source backed by the OS CSPRNG, with a non-cryptographic
/// fallback when the OS source is unavailable. The fallback is explicitly
/// weaker; it is logged once and never surfaced as an error.
pub struct RandomSource {
    fallback: Option<SmallRng>,
}

impl RandomSource {
    pub fn new() -> Self {
        Self { fallback: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.fallback.is_some()
    }

    fn next_u32(&mut self) -> u32 {
        if let Some(rng) = self.fallback.as_mut() {
            return rng.next_u32();
        }

        let mut buf = [0u8; 4];
        match OsRng.try_fill_bytes(&mut buf) {
            Ok(()) => u32::from_le_bytes(buf),
            Err(e) => {
                log::warn!("OS random source unavailable, falling back to weak PRNG: {}", e);
                let seed = SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .map(|d| d.as_nanos() as u64)
                    .unwrap_or(0);
                let mut rng = SmallRng::seed_from_u64(seed);
                let value = rng.next_u32();
                self.fallback = Some(rng);
                value
            }
        }
    }

    /// Uniform float in [0, 1).
    pub fn next_uniform(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }

    /// Uniform index in [0, bound). Uses modulo of a wide sample; the
    /// residual bias at small bounds is accepted.
    pub fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0);
        self.next_u32() as usize % bound
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}
