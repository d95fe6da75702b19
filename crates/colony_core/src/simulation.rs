//! The simulation aggregate: grid, parameters and random source in one
//! owned value, handed to front-ends instead of shared globals.

use colony_data::{Preset, Strategy};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{AppConfig, DEFAULT_PRESET_CENTER};
use crate::dynamics::{self, GenerationStats};
use crate::error::Result;
use crate::grid::Grid;
use crate::params::SimulationParameters;
use crate::presets::apply_preset;

#[derive(Debug, Clone)]
pub struct Simulation {
    grid: Grid,
    params: SimulationParameters,
    rng: ChaCha8Rng,
    generation: u64,
    preset: Preset,
    preset_center: (isize, isize),
}

impl Simulation {
    /// Creates an all-cooperate simulation. Without a seed the RNG is drawn
    /// from entropy.
    pub fn new(
        rows: usize,
        columns: usize,
        params: SimulationParameters,
        seed: Option<u64>,
    ) -> Result<Self> {
        let grid = Grid::new(rows, columns)?;
        let rng = match seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };
        Ok(Self {
            grid,
            params,
            rng,
            generation: 0,
            preset: Preset::AllCooperate,
            preset_center: DEFAULT_PRESET_CENTER,
        })
    }

    /// Builds the simulation described by `config` with its preset applied.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let params = config.parameters()?;
        let preset = config.preset()?;
        let mut sim = Self::new(config.grid.rows, config.grid.columns, params, config.grid.seed)?;
        let (row, col) = config.preset_center();
        sim.apply_preset(preset, row, col);
        Ok(sim)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    /// Mutable access for the validated setters.
    pub fn params_mut(&mut self) -> &mut SimulationParameters {
        &mut self.params
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn preset_center(&self) -> (isize, isize) {
        self.preset_center
    }

    pub fn strategy(&self, row: isize, col: isize) -> Strategy {
        self.grid.strategy(row, col)
    }

    pub fn set_strategy(&mut self, row: isize, col: isize, strategy: Strategy) {
        self.grid.set_strategy(row, col, strategy);
    }

    pub fn toggle_cell(&mut self, row: isize, col: isize) -> Strategy {
        let strategy = self.grid.toggle(row, col);
        tracing::debug!(row, col, ?strategy, "Cell toggled");
        strategy
    }

    /// Stamps `preset` at `(row, col)` and remembers both for [`Self::reset`].
    pub fn apply_preset(&mut self, preset: Preset, row: isize, col: isize) {
        self.preset = preset;
        self.preset_center = (row, col);
        apply_preset(&mut self.grid, preset, row, col);
    }

    /// Selects the preset used by the next reset without touching the grid.
    pub fn select_preset(&mut self, preset: Preset) {
        self.preset = preset;
    }

    /// Re-applies the remembered preset and restarts the generation count.
    pub fn reset(&mut self) {
        let (row, col) = self.preset_center;
        apply_preset(&mut self.grid, self.preset, row, col);
        self.generation = 0;
    }

    pub fn advance_generation(&mut self) -> Result<GenerationStats> {
        let stats = dynamics::advance_generation(&mut self.grid, &self.params, &mut self.rng)?;
        self.generation += 1;
        tracing::debug!(
            generation = self.generation,
            rule = self.params.update_rule().label(),
            cooperators = stats.cooperators,
            defectors = stats.defectors,
            switched = stats.switched,
            silent = stats.silent,
            "Generation committed"
        );
        Ok(stats)
    }
}
