//! Deterministic RNG helpers and seed derivation.
//!
//! Noise leaves draw from a `StdRng` seeded with the sampling call's seed.
//! A composite forwards that seed verbatim to both children, so two noise
//! leaves sampled in one call see the same stream. Callers that want
//! independent branches derive per-branch seeds from a master seed with
//! [`SeedHierarchy`] and sample each branch with its own seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A `StdRng` for `seed`, or an entropy-seeded one when `seed` is `None`.
pub fn rng_for_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// One draw from the standard normal distribution.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    // Box-Muller; u1 lies in (0, 1] so ln(u1) stays finite.
    let u1: f64 = 1.0 - rng.gen::<f64>();
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Derives order-independent sub-seeds from a master seed.
///
/// Sub-seeds are BLAKE3 hashes of `(master_seed, label, index)`, so the
/// same master seed always yields the same sub-seed for a label no matter
/// how many other labels were derived first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedHierarchy {
    master_seed: u64,
}

impl SeedHierarchy {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    /// Sub-seed for `(label, index)`.
    pub fn sub_seed(&self, label: &str, index: u64) -> u64 {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.master_seed.to_le_bytes());
        hasher.update(label.as_bytes());
        hasher.update(&index.to_le_bytes());
        let hash = hasher.finalize();
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[..8]);
        u64::from_le_bytes(bytes)
    }

    pub fn rng_for(&self, label: &str, index: u64) -> StdRng {
        StdRng::seed_from_u64(self.sub_seed(label, index))
    }
}
