use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use stabuniq::prelude::*;
use std::hint::black_box;
use std::time::Duration;

fn bench_1m_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("1M Strings");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(90)); // Increase time for large dedup setup overhead

    // Dataset generation
    let mut rng = rand::rng();
    let count = 1_000_000;

    // Draw from a pool of 800k strings so roughly a fifth of the input repeats.
    let pool: Vec<String> = (0..count * 4 / 5)
        .map(|_| {
            let len = rng.random_range(8..24);
            (0..len).map(|_| rng.random::<char>()).collect()
        })
        .collect();
    let strings: Vec<String> = (0..count)
        .map(|_| pool[rng.random_range(0..pool.len())].clone())
        .collect();

    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("uniquify_mut (in-place)", |b| {
        b.iter_batched(
            || strings.clone(),
            |mut data| uniquify_mut(black_box(&mut data)),
            BatchSize::LargeInput,
        )
    });

    group.bench_function("stable_unique_positions", |b| {
        b.iter(|| stable_unique_positions(black_box(&strings)).len())
    });

    group.bench_function("unstable_unique_positions", |b| {
        b.iter(|| unstable_unique_positions(black_box(&strings)).len())
    });

    // Std Sort Unstable + dedup (loses original order)
    group.bench_function("slice::sort_unstable + dedup", |b| {
        b.iter_batched(
            || strings.clone(),
            |mut data| {
                data.sort_unstable();
                data.dedup();
            },
            BatchSize::LargeInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_1m_strings);
criterion_main!(benches);
