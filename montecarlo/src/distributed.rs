use comm::{CommError, Endpoint, ROOT_RANK};

use crate::sampler::{estimate_from, rank_rng, sample_hits};
use crate::Estimate;

/// Distributed estimator over a fixed group: every rank samples its share of
/// the budget (remainder to the lowest ranks), the partial counts are
/// collected at the coordinator by point-to-point receives in rank order, and
/// the coordinator broadcasts the final scalar so every rank returns the
/// identical estimate.
///
/// Counts travel as `f64`, which is exact below 2^53, far beyond any sample
/// budget here.
pub fn estimate_distributed(
    ep: &mut Endpoint<f64>,
    samples: u64,
    seed: u64,
) -> Result<Estimate, CommError> {
    let local = comm::share(samples, ep.world_size(), ep.world_rank());
    let mut rng = rank_rng(seed, ep.world_rank());
    let hits = sample_hits(local, &mut rng);

    let answer = match ep.gather(ROOT_RANK, vec![hits as f64])? {
        Some(parts) => {
            let total: f64 = parts.iter().map(|part| part[0]).sum();
            vec![estimate_from(total as u64, samples), total]
        }
        None => Vec::new(),
    };
    let answer = ep.broadcast(ROOT_RANK, answer)?;

    Ok(Estimate {
        samples,
        hits: answer[1] as u64,
        pi: answer[0],
    })
}
