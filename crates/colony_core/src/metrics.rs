//! Run statistics and structured logging setup.

use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;

use crate::dynamics::GenerationStats;

/// Generations between periodic summaries.
pub const DEFAULT_SUMMARY_INTERVAL: u64 = 100;

/// Accumulates statistics over a run of generations.
#[derive(Debug, Clone)]
pub struct RunMetrics {
    generations: u64,
    total_switched: u64,
    last: GenerationStats,
    summary_interval: u64,
    start_time: Instant,
}

impl Default for RunMetrics {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_INTERVAL)
    }
}

impl RunMetrics {
    /// `summary_interval` of zero disables periodic summaries.
    #[must_use]
    pub fn new(summary_interval: u64) -> Self {
        Self {
            generations: 0,
            total_switched: 0,
            last: GenerationStats::default(),
            summary_interval,
            start_time: Instant::now(),
        }
    }

    /// Records a committed generation.
    pub fn record_generation(&mut self, stats: GenerationStats, duration: Duration) {
        self.generations += 1;
        self.total_switched += stats.switched as u64;
        self.last = stats;

        if self.summary_interval > 0 && self.generations % self.summary_interval == 0 {
            tracing::info!(
                generation = self.generations,
                cooperators = stats.cooperators,
                defectors = stats.defectors,
                total_switched = self.total_switched,
                duration_us = duration.as_micros() as u64,
                "Run summary"
            );
        }
    }

    #[must_use]
    pub fn generations(&self) -> u64 {
        self.generations
    }

    #[must_use]
    pub fn total_switched(&self) -> u64 {
        self.total_switched
    }

    #[must_use]
    pub fn last(&self) -> GenerationStats {
        self.last
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`, defaults to `info`, and writes to stderr. Calling it
/// again after a subscriber is installed does nothing.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}
