use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;

use comm::{CommError, Endpoint, ROOT_RANK};

/// Uniform random input in [0, 1), generated on the coordinator.
pub fn random_input(count: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen::<f64>()).collect()
}

/// Reference sort on one rank.
pub fn sort_sequential(data: &[f64]) -> Vec<f64> {
    let mut out = data.to_vec();
    out.sort_unstable_by(f64::total_cmp);
    out
}

/// Bucket index of `x` within `buckets` equal-width ranges of [min, max].
fn bucket_id(x: f64, min: f64, max: f64, buckets: usize) -> usize {
    if max <= min {
        return 0;
    }
    let id = ((x - min) / (max - min) * buckets as f64) as usize;
    id.min(buckets - 1)
}

/// Distributed bucket sort with one bucket per rank: the coordinator splits
/// its input by value range and scatters the buckets, every rank sorts its
/// bucket locally, and the sorted buckets are collected back in bucket order
/// so their concatenation is globally sorted. Returns the sorted data at the
/// coordinator, `None` on the other ranks.
pub fn bucket_sort(
    ep: &mut Endpoint<f64>,
    data: Option<Vec<f64>>,
) -> Result<Option<Vec<f64>>, CommError> {
    let buckets = ep.world_size();

    let parts = if ep.is_root() {
        let data = data.expect("coordinator provides the input");
        let (min, max) = data.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), &x| (lo.min(x), hi.max(x)),
        );
        let mut parts = vec![Vec::new(); buckets];
        for &x in &data {
            parts[bucket_id(x, min, max, buckets)].push(x);
        }
        parts
    } else {
        Vec::new()
    };

    let mut local = ep.scatter(ROOT_RANK, parts)?;
    local.sort_unstable_by(f64::total_cmp);

    Ok(ep.gather(ROOT_RANK, local)?.map(|sorted| sorted.concat()))
}
