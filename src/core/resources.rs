//! Core domain: shared resources for the simulation.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random source for every gameplay draw (palette picks, shake jitter).
#[derive(Resource, Debug)]
pub struct SimRng {
    pub seed: u64,
    pub rng: ChaCha8Rng,
}

impl SimRng {
    /// Seeds from `seed`, or from entropy when none is configured.
    pub fn seeded(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::seeded(None)
    }
}
