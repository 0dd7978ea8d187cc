use std::sync::atomic::{AtomicU64, Ordering};

use rayon::iter::{IntoParallelIterator, ParallelIterator};

use comm::share;

use crate::sampler::{estimate_from, rank_rng, sample_hits};
use crate::Estimate;

/// Thread-team estimator: `workers` rayon tasks partition the sample budget,
/// each counts into a private accumulator, and the shared total is mutated
/// only through an atomic add, never under a lock.
pub fn estimate_threaded(samples: u64, workers: usize, seed: u64) -> Estimate {
    assert!(workers > 0, "at least one worker required");
    let total = AtomicU64::new(0);
    (0..workers).into_par_iter().for_each(|worker| {
        let mut rng = rank_rng(seed, worker);
        let hits = sample_hits(share(samples, workers, worker), &mut rng);
        total.fetch_add(hits, Ordering::Relaxed);
    });
    let hits = total.into_inner();
    Estimate {
        samples,
        hits,
        pi: estimate_from(hits, samples),
    }
}
