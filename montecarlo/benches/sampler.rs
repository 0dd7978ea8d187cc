use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use montecarlo::{estimate_threaded, rank_rng, sample_hits};

fn bench_sampler(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_hits");
    for samples in [100_000u64, 1_000_000] {
        group.throughput(Throughput::Elements(samples));
        group.bench_with_input(BenchmarkId::from_parameter(samples), &samples, |b, &n| {
            let mut rng = rank_rng(42, 0);
            b.iter(|| sample_hits(n, &mut rng));
        });
    }
    group.finish();
}

fn bench_threaded(c: &mut Criterion) {
    c.bench_function("estimate_threaded_1m_x4", |b| {
        b.iter(|| estimate_threaded(1_000_000, 4, 42))
    });
}

criterion_group!(benches, bench_sampler, bench_threaded);
criterion_main!(benches);
