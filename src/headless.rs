use std::time::Instant;

use anyhow::Result;

use crate::model::metrics::RunMetrics;
use crate::model::{GenerationStats, Simulation};

/// Advances `generations` steps, feeding every step into `metrics`.
///
/// Returns the stats of the last generation, or the current population
/// when `generations` is zero.
pub fn run_headless(
    sim: &mut Simulation,
    generations: u64,
    metrics: &mut RunMetrics,
) -> Result<GenerationStats> {
    tracing::info!(
        rows = sim.grid().rows(),
        columns = sim.grid().columns(),
        generations,
        "Starting headless run"
    );
    tracing::info!("Parameters\n{}", sim.params());

    let mut last = population(sim);
    for _ in 0..generations {
        let started = Instant::now();
        last = sim.advance_generation()?;
        metrics.record_generation(last, started.elapsed());
    }

    tracing::info!(
        generations = metrics.generations(),
        total_switched = metrics.total_switched(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Headless run finished"
    );
    Ok(last)
}

/// Counts of the grid as it stands, with nothing switched yet.
pub fn population(sim: &Simulation) -> GenerationStats {
    let grid = sim.grid();
    let cooperators = grid.count(crate::model::Strategy::Cooperate);
    GenerationStats {
        cooperators,
        defectors: grid.len() - cooperators,
        switched: 0,
        silent: grid.cells().iter().filter(|c| c.silent).count(),
    }
}
