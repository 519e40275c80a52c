use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use spring_chain::*;
use std::hint::black_box;

const DT: f32 = 1.0 / 120.0;

fn lifted_chain(body_count: usize) -> Chain {
    let mut chain =
        Chain::new(ChainConfig::default().with_body_count(body_count)).expect("valid config");
    chain.set_left_anchor_position(Vec2::new(0.0, 0.5));
    chain
}

fn bench_integrator_step(c: &mut Criterion) {
    let params = SimulationParams::default();
    let mut group = c.benchmark_group("integrator_step");
    for &count in &[150usize, 1000, 10000] {
        for mode in [SpringDamping::Explicit, SpringDamping::Implicit] {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), count),
                &count,
                |b, &count| {
                    let mut chain = lifted_chain(count);
                    let integrator = Integrator::new(mode);
                    b.iter(|| integrator.step(black_box(&mut chain), &params, DT))
                },
            );
        }
        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, &count| {
            let mut chain = lifted_chain(count);
            let mut integrator = Integrator::default();
            integrator.set_parallel(true);
            b.iter(|| integrator.step(black_box(&mut chain), &params, DT))
        });
    }
    group.finish();
}

fn bench_controller_tick(c: &mut Criterion) {
    c.bench_function("controller_tick_default", |b| {
        b.iter_batched(
            || SimulationController::with_defaults().expect("defaults are valid"),
            |mut sim| {
                for _ in 0..30 {
                    sim.tick();
                }
                black_box(sim.snapshot())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_integrator_step, bench_controller_tick);
criterion_main!(benches);
