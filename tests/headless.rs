mod common;

use colony_lib::headless::{population, run_headless};
use colony_lib::model::metrics::RunMetrics;
use common::SimulationBuilder;

#[test]
fn test_headless_runs_requested_generations() {
    let mut sim = SimulationBuilder::new()
        .with_config(|c| {
            c.grid.preset = "3x3".into();
            c.dynamics.update_rule = "ibr".into();
            c.dynamics.silence = 0.1;
        })
        .build();
    let mut metrics = RunMetrics::new(10);

    let stats = run_headless(&mut sim, 25, &mut metrics).unwrap();

    assert_eq!(sim.generation(), 25);
    assert_eq!(metrics.generations(), 25);
    assert_eq!(metrics.last(), stats);
    assert_eq!(stats.cooperators + stats.defectors, sim.grid().len());
}

#[test]
fn test_zero_generations_reports_current_population() {
    let mut sim = SimulationBuilder::new()
        .with_config(|c| c.grid.preset = "von neumann".into())
        .build();
    let mut metrics = RunMetrics::default();

    let stats = run_headless(&mut sim, 0, &mut metrics).unwrap();

    assert_eq!(stats, population(&sim));
    assert_eq!(stats.defectors, 5);
    assert_eq!(metrics.generations(), 0);
}

#[test]
fn test_headless_output_is_the_grid_text() {
    let sim = SimulationBuilder::new()
        .with_pattern(&["#.", ".#"])
        .build();
    assert_eq!(sim.grid().to_string(), "#.\n.#");
}
