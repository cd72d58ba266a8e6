//! Set construction and bulk pop benchmark.
//!
//! Compares `from_slice` with incremental `add` (baseline) and measures
//! `pops` and sorted export.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use seqkit::set::Set;
use std::hint::black_box;

const SIZES: [u64; 3] = [100, 10000, 100000];

fn generate_keys(size: u64) -> Vec<u64> {
    (0..size).map(|key| key.wrapping_mul(0x9E37_79B9_7F4A_7C15)).collect()
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_construction");

    for size in SIZES {
        let keys = generate_keys(size);
        group.bench_with_input(BenchmarkId::new("from_slice", size), &keys, |bencher, keys| {
            bencher.iter(|| black_box(Set::from_slice(black_box(keys))));
        });
        group.bench_with_input(BenchmarkId::new("add", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut set = Set::new();
                for key in black_box(keys) {
                    set.add(*key);
                }
                set
            });
        });
    }

    group.finish();
}

fn benchmark_pops(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_pops");

    for size in SIZES {
        let keys = generate_keys(size);
        let set = Set::from_slice(&keys);
        let requested: Vec<u64> = keys.iter().step_by(2).copied().collect();
        group.bench_with_input(BenchmarkId::new("pops_half", size), &size, |bencher, _| {
            bencher.iter_batched(
                || set.clone(),
                |mut set| black_box(set.pops(requested.iter().copied())),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn benchmark_sorted_export(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_sorted_export");

    for size in SIZES {
        let set = Set::from_slice(&generate_keys(size));
        group.bench_with_input(BenchmarkId::new("to_sorted_vec", size), &set, |bencher, set| {
            bencher.iter(|| black_box(set.to_sorted_vec()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_pops,
    benchmark_sorted_export
);
criterion_main!(benches);
