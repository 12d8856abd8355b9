use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use stabuniq::prelude::*;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hint::black_box;

/// A colored point, deduplicated by position only.
#[derive(Clone, Copy, Debug, Default)]
struct Point3D {
    position: [f64; 3],
    color: [u8; 3],
}

fn position_cmp(a: &Point3D, b: &Point3D) -> Ordering {
    a.position
        .iter()
        .zip(b.position.iter())
        .map(|(x, y)| x.total_cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

fn position_eq(a: &Point3D, b: &Point3D) -> bool {
    position_cmp(a, b).is_eq()
}

// Whole-point ordering: position first, then color.
fn whole_cmp(a: &Point3D, b: &Point3D) -> Ordering {
    position_cmp(a, b).then_with(|| a.color.cmp(&b.color))
}

fn whole_eq(a: &Point3D, b: &Point3D) -> bool {
    whole_cmp(a, b).is_eq()
}

fn position_bits(point: &Point3D) -> [u64; 3] {
    point.position.map(f64::to_bits)
}

/// A cloud of mostly distinct points with a share of exact duplicates.
fn generate_cloud(count: usize, duplicate_ratio: f64) -> Vec<Point3D> {
    let mut rng = rand::rng();
    let mut cloud: Vec<Point3D> = Vec::with_capacity(count);
    let mut x = 0.0;
    for _ in 0..count {
        if !cloud.is_empty() && rng.random_bool(duplicate_ratio) {
            let source = cloud[rng.random_range(0..cloud.len())];
            cloud.push(Point3D {
                color: rng.random(),
                ..source
            });
        } else {
            x += 0.000_000_01;
            cloud.push(Point3D {
                position: [x, 0.0, 0.0],
                color: [0, 0, 0],
            });
        }
    }
    cloud
}

fn bench_uniquify(c: &mut Criterion) {
    for (name, duplicate_ratio) in [("Few Duplicates", 0.01), ("Many Duplicates", 0.9)] {
        let mut group = c.benchmark_group(name);
        group.sample_size(10);

        let count = 100_000;
        let cloud = generate_cloud(count, duplicate_ratio);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_function("stable_unique_positions (position)", |b| {
            b.iter(|| {
                stable_unique_positions_by(black_box(&cloud), 0..count, position_cmp, position_eq)
                    .len()
            })
        });

        group.bench_function("stable_unique_positions (whole)", |b| {
            b.iter(|| {
                stable_unique_positions_by(black_box(&cloud), 0..count, whole_cmp, whole_eq).len()
            })
        });

        group.bench_function("unstable_unique_positions (position)", |b| {
            b.iter(|| {
                unstable_unique_positions_by(black_box(&cloud), 0..count, position_cmp, position_eq)
                    .len()
            })
        });

        group.bench_function("dedup_stable_by (in-place)", |b| {
            b.iter_batched(
                || cloud.clone(),
                |mut data| {
                    let Ok(len) = dedup_stable_by(black_box(&mut data), position_cmp, position_eq);
                    len
                },
                BatchSize::LargeInput,
            )
        });

        // Baselines: sorting the points themselves loses the original order.
        group.bench_function("slice::sort_by + dedup_by", |b| {
            b.iter_batched(
                || cloud.clone(),
                |mut data| {
                    data.sort_by(position_cmp);
                    data.dedup_by(|a, b| position_eq(a, b));
                    data.len()
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function("slice::sort_unstable_by + dedup_by", |b| {
            b.iter_batched(
                || cloud.clone(),
                |mut data| {
                    data.sort_unstable_by(position_cmp);
                    data.dedup_by(|a, b| position_eq(a, b));
                    data.len()
                },
                BatchSize::LargeInput,
            )
        });

        group.bench_function("HashSet retain", |b| {
            b.iter_batched(
                || cloud.clone(),
                |mut data| {
                    let mut seen = HashSet::with_capacity(data.len());
                    data.retain(|point| seen.insert(position_bits(point)));
                    data.len()
                },
                BatchSize::LargeInput,
            )
        });

        group.finish();
    }
}

criterion_group!(benches, bench_uniquify);
criterion_main!(benches);
