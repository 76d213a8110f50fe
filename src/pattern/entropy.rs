//! Seeded entropy for seed derivation and stroke jitter

use rand::{Rng, SeedableRng, rngs::StdRng};

/// The single randomness abstraction behind synthesis
///
/// All nondeterminism (per-request seed derivation and the sketcher's stroke
/// jitter) flows through one of these, so tests can inject a fixed-seed
/// source and reproduce every downstream byte.
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Entropy seeded from the operating system
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic entropy from a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform fraction in [0, 1)
    pub fn next_fraction(&mut self) -> f64 {
        self.rng.random()
    }

    /// Symmetric displacement in [-magnitude, magnitude]
    pub fn jitter(&mut self, magnitude: f64) -> f64 {
        self.rng.random::<f64>().mul_add(2.0, -1.0) * magnitude
    }

    /// Split off an independent source advancing this one by a single draw
    pub fn fork(&mut self) -> Self {
        Self {
            rng: StdRng::seed_from_u64(self.rng.random()),
        }
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::from_os()
    }
}
