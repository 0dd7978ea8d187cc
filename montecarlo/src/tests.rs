use comm::{share, Endpoint, Group};

use crate::{
    estimate_distributed, estimate_sequential, estimate_threaded, rank_rng, sample_hits,
};

const SEED: u64 = 0x5eed;

#[test]
fn sampler_is_reproducible() {
    let a = sample_hits(10_000, &mut rank_rng(SEED, 0));
    let b = sample_hits(10_000, &mut rank_rng(SEED, 0));
    assert_eq!(a, b);

    // distinct ranks draw distinct streams
    let c = sample_hits(10_000, &mut rank_rng(SEED, 1));
    assert_ne!(a, c);
}

#[test]
fn sequential_estimate_converges() {
    let estimate = estimate_sequential(400_000, SEED);
    assert!((estimate.pi - std::f64::consts::PI).abs() < 0.02);
    assert_eq!(estimate.pi, 4.0 * estimate.hits as f64 / 400_000.0);
}

#[test]
fn threaded_total_is_the_sum_of_private_counters() {
    const SAMPLES: u64 = 100_000;
    const WORKERS: usize = 4;

    let estimate = estimate_threaded(SAMPLES, WORKERS, SEED);
    let expected: u64 = (0..WORKERS)
        .map(|w| sample_hits(share(SAMPLES, WORKERS, w), &mut rank_rng(SEED, w)))
        .sum();
    assert_eq!(estimate.hits, expected);
    assert_eq!(estimate.samples, SAMPLES);
}

#[test]
fn distributed_estimate_is_identical_on_every_rank() {
    const SAMPLES: u64 = 100_000;
    const NP: usize = 4;

    let group = Group::new(NP).unwrap();
    let estimates = group.launch(|mut ep: Endpoint<f64>| {
        estimate_distributed(&mut ep, SAMPLES, SEED).unwrap()
    });

    assert_eq!(estimates.len(), NP);
    for estimate in &estimates[1..] {
        assert_eq!(estimate, &estimates[0]);
    }

    // no sample double-counted or dropped: the global count is the sum of
    // what each rank's share produces
    let expected: u64 = (0..NP)
        .map(|r| sample_hits(share(SAMPLES, NP, r), &mut rank_rng(SEED, r)))
        .sum();
    assert_eq!(estimates[0].hits, expected);
    assert!((estimates[0].pi - std::f64::consts::PI).abs() < 0.05);
}

#[test]
fn group_of_one_matches_sequential() {
    const SAMPLES: u64 = 50_000;

    let group = Group::new(1).unwrap();
    let estimates =
        group.launch(|mut ep: Endpoint<f64>| estimate_distributed(&mut ep, SAMPLES, SEED).unwrap());
    assert_eq!(estimates[0], estimate_sequential(SAMPLES, SEED));
}
