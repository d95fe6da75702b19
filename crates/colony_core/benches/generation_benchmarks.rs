use colony_core::dynamics::{advance_generation, compute_payoffs};
use colony_core::presets::apply_preset;
use colony_core::{Grid, Preset, SimulationParameters, UpdateRule, WeightFunction};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn seeded_grid(side: usize) -> Grid {
    let mut grid = Grid::new(side, side).expect("non-zero side");
    let center = (side / 2) as isize;
    apply_preset(&mut grid, Preset::Block5x5, center, center);
    grid
}

/// Benchmark payoff computation under each weighting.
fn bench_payoffs(c: &mut Criterion) {
    let grid = seeded_grid(128);
    let mut group = c.benchmark_group("payoffs");
    for weighting in WeightFunction::ALL {
        let mut params = SimulationParameters::default();
        params.set_weight_function(weighting);
        group.bench_with_input(
            BenchmarkId::from_parameter(weighting.label()),
            &params,
            |b, params| b.iter(|| black_box(compute_payoffs(black_box(&grid), params))),
        );
    }
    group.finish();
}

/// Benchmark one full generation per rule.
fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");
    for rule in UpdateRule::ALL {
        let mut params = SimulationParameters::default();
        params.set_update_rule(rule);
        params.set_silence(0.1).expect("valid silence");
        group.bench_with_input(BenchmarkId::from_parameter(rule.label()), &params, |b, params| {
            let mut grid = seeded_grid(128);
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(advance_generation(&mut grid, params, &mut rng)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_payoffs, bench_generation);
criterion_main!(benches);
