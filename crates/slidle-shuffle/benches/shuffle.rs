//! Benchmarks for board shuffling.
//!
//! Measures the complete shuffle, including the Fisher–Yates passes and the
//! solvability checks of rejected attempts, across a spread of board sizes.
//!
//! Fixed seeds keep the rejection sequence reproducible between runs.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench shuffle
//! ```

use std::{hint, time::Duration};

use criterion::{BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main};
use slidle_shuffle::BoardShuffler;

const SEEDS: [u64; 3] = [0x5eed_0001, 0x5eed_0002, 0x5eed_0003];

fn bench_shuffle(c: &mut Criterion) {
    let shuffler = BoardShuffler::default();

    for size in [3_usize, 4, 8, 16] {
        for (i, seed) in SEEDS.into_iter().enumerate() {
            c.bench_with_input(
                BenchmarkId::new("shuffle", format!("size_{size}_seed_{i}")),
                &seed,
                |b, &seed| {
                    b.iter(|| shuffler.shuffle_with_seed(hint::black_box(size), seed));
                },
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(5));
    targets = bench_shuffle
);
criterion_main!(benches);
