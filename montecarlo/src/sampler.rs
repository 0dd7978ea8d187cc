use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use crate::Estimate;

/// Multiplier decorrelating the per-rank streams derived from one base seed.
const RANK_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Reproducible RNG for one participant: every rank draws an independent
/// stream from the same base seed.
pub fn rank_rng(seed: u64, rank: usize) -> ChaCha12Rng {
    ChaCha12Rng::seed_from_u64(seed ^ (rank as u64).wrapping_mul(RANK_STREAM))
}

/// Draw `samples` uniform points in [-1,1]^2 and count those inside the unit
/// circle.
pub fn sample_hits(samples: u64, rng: &mut impl Rng) -> u64 {
    let mut hits = 0;
    for _ in 0..samples {
        let x: f64 = rng.gen_range(-1.0..1.0);
        let y: f64 = rng.gen_range(-1.0..1.0);
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }
    hits
}

/// The circle/square area ratio is pi/4.
#[inline]
pub fn estimate_from(hits: u64, samples: u64) -> f64 {
    4.0 * hits as f64 / samples as f64
}

/// Single pass over the whole sample budget.
pub fn estimate_sequential(samples: u64, seed: u64) -> Estimate {
    let mut rng = rank_rng(seed, 0);
    let hits = sample_hits(samples, &mut rng);
    Estimate {
        samples,
        hits,
        pi: estimate_from(hits, samples),
    }
}
