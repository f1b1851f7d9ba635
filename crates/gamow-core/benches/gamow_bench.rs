// -------------------------------------------------------------------------
// SCPN Gamow Rates -- Gamow Kernel Benchmark
// Single Gamow-peak evaluations for light and heavy reactions, the full
// reference batch, and temperature scans at two grid sizes.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gamow_core::gamow::gamow_energy;
use gamow_core::harness::run_reference;
use gamow_core::scan::{log_temperatures, rate_table};
use gamow_types::reaction::Reaction;
use std::hint::black_box;

fn bench_gamow_single(c: &mut Criterion) {
    c.bench_function("gamow_pp_15MK", |b| {
        b.iter(|| {
            gamow_energy(
                black_box(1.0),
                black_box(1.0),
                black_box(1.0),
                black_box(1.0),
                black_box(15.0),
                black_box(4.0e-22),
            )
        })
    });

    c.bench_function("gamow_o16o16_2GK", |b| {
        b.iter(|| {
            gamow_energy(
                black_box(16.0),
                black_box(8.0),
                black_box(16.0),
                black_box(8.0),
                black_box(2000.0),
                black_box(1.0e25),
            )
        })
    });
}

fn bench_reference_batch(c: &mut Criterion) {
    c.bench_function("reference_batch", |b| b.iter(|| black_box(run_reference())));
}

fn bench_scan(c: &mut Criterion) {
    let c12_alpha = Reaction::new(4.0, 2.0, 12.0, 6.0);
    let mut group = c.benchmark_group("rate_table_c12_alpha");
    for points in [64usize, 1024] {
        let grid = log_temperatures(10.0, 1000.0, points).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(points), &grid, |b, grid| {
            b.iter(|| rate_table(&c12_alpha, grid, black_box(1.0e-1)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_gamow_single,
    bench_reference_batch,
    bench_scan
);
criterion_main!(benches);
