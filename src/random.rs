//! Seeded random sources.
//!
//! Every stochastic component receives an explicit `&mut R: Rng` handle;
//! algorithms own one generator created here so that a run is fully
//! reproducible from its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic random number generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing one from OS entropy
/// when `seed` is `None`. Returns the generator and the seed actually used.
pub fn rng_from_option(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (create_rng(seed), seed)
}
