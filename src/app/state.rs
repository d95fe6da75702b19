use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::layout::Rect;

use crate::headless::population;
use crate::model::metrics::RunMetrics;
use crate::model::{AppConfig, GenerationStats, Simulation};

pub struct App {
    pub running: bool,
    pub auto_run: bool,
    pub sim: Simulation,
    pub last_stats: GenerationStats,
    pub metrics: RunMetrics,
    pub generation_interval: Duration,
    /// Last user-facing message, e.g. a rejected parameter change.
    pub status: Option<String>,
    pub last_grid_rect: Rect,
    /// Payoff text being typed, when entry is open.
    pub payoff_input: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let sim = Simulation::from_config(&config)?;
        let last_stats = population(&sim);
        Ok(Self {
            running: true,
            auto_run: config.display.auto_run,
            generation_interval: Duration::from_millis(config.display.generation_interval_ms),
            sim,
            last_stats,
            metrics: RunMetrics::default(),
            status: None,
            last_grid_rect: Rect::default(),
            payoff_input: None,
        })
    }

    /// Advances one generation and records it.
    pub fn step(&mut self) -> Result<()> {
        let started = Instant::now();
        self.last_stats = self.sim.advance_generation()?;
        self.metrics
            .record_generation(self.last_stats, started.elapsed());
        Ok(())
    }

    pub fn reset(&mut self) {
        self.sim.reset();
        self.last_stats = population(&self.sim);
        self.status = Some(format!("Reset to {}", self.sim.preset().label()));
    }

    pub(crate) fn report<E: std::fmt::Display>(&mut self, err: E) {
        tracing::warn!(error = %err, "Rejected input");
        self.status = Some(err.to_string());
    }
}
