//! Deterministic price-path generation
//!
//! Seeded random walks for feeding the back-tester. Reproducibility matters
//! more than realism here: the same seed must always produce the same path,
//! so experiments and tests can be replayed exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a multiplicative random walk of spot prices.
///
/// Each step moves the price by `drift_bps` basis points plus a uniform
/// shock in `[-vol_bps, +vol_bps]` basis points. The path starts at `start`
/// and contains `steps` observations. Prices are floored at a minimal tick
/// so a long downward run cannot go non-positive.
pub fn random_walk(seed: u64, start: f64, steps: usize, drift_bps: i32, vol_bps: u32) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let drift = f64::from(drift_bps) / 10_000.0;
    let vol = f64::from(vol_bps) / 10_000.0;

    let mut path = Vec::with_capacity(steps);
    let mut price = start;
    for _ in 0..steps {
        path.push(price);
        let shock: f64 = rng.gen_range(-1.0..=1.0) * vol;
        price = (price * (1.0 + drift + shock)).max(0.01);
    }
    path
}
