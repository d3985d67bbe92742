//! Seeded RNG construction for the stochastic strategies.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Builds the RNG a runner draws from: the configured seed when one is
/// given (reproducible runs), otherwise a fresh random seed.
pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    }
}
