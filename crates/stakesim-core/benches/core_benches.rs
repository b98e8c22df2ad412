//! Criterion benchmarks for stakesim-core.
//!
//! Covers: schedule projection, full simulation, and action dispatch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use stakesim_core::{compute_schedule, dispatch, simulate, SimulationInput, SimulatorState};

fn bench_schedule(c: &mut Criterion) {
    c.bench_function("compute_schedule", |b| {
        b.iter(|| compute_schedule(black_box(317.0), black_box(328.0), black_box(50_000.0)))
    });
}

fn bench_simulate(c: &mut Criterion) {
    let input = SimulationInput::default();

    c.bench_function("simulate", |b| b.iter(|| simulate(black_box(&input))));
}

fn bench_dispatch(c: &mut Criterion) {
    let state = SimulatorState::default();

    c.bench_function("dispatch_update", |b| {
        b.iter(|| dispatch(black_box(&state), "update-pool-apr", Some(black_box("12.5"))))
    });
    c.bench_function("dispatch_calculate", |b| {
        b.iter(|| dispatch(black_box(&state), "calculate", None))
    });
}

criterion_group!(benches, bench_schedule, bench_simulate, bench_dispatch);
criterion_main!(benches);
