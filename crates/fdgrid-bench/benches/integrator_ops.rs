//! Criterion benchmarks for integrator stepping.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use fdgrid_bench::{advection_profile, reference_profile, stress_profile, DT};
use std::hint::black_box;

fn bench_step_10k(c: &mut Criterion) {
    let mut sim = reference_profile(42);

    // Warm up: run one step so the staging buffer is allocated
    sim.step(DT).unwrap();

    c.bench_function("step_10k", |b| {
        b.iter(|| {
            let metrics = sim.step(DT).unwrap();
            black_box(&metrics);
        });
    });
}

fn bench_step_100k(c: &mut Criterion) {
    let mut sim = stress_profile(42);

    sim.step(DT).unwrap();

    c.bench_function("step_100k", |b| {
        b.iter(|| {
            let metrics = sim.step(DT).unwrap();
            black_box(&metrics);
        });
    });
}

fn bench_heun_10k(c: &mut Criterion) {
    // Central advection slowly amplifies the highest modes, so every
    // iteration starts from a fresh field.
    c.bench_function("heun_advection_10k", |b| {
        b.iter_batched(
            || advection_profile(42),
            |mut sim| {
                let metrics = sim.step(DT).unwrap();
                black_box(metrics);
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_100_steps_10k(c: &mut Criterion) {
    c.bench_function("100_steps_10k", |b| {
        b.iter(|| {
            let mut sim = reference_profile(42);
            sim.run(100, DT).unwrap();
            black_box(sim.field());
        });
    });
}

criterion_group!(
    benches,
    bench_step_10k,
    bench_step_100k,
    bench_heun_10k,
    bench_100_steps_10k
);
criterion_main!(benches);
