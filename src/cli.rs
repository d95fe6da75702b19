use clap::{Args, ValueEnum};

use crate::model::parse::{
    parse_payoff, parse_preset, parse_real, parse_update_rule, parse_weight_function,
};
use crate::model::{AppConfig, Preset, UpdateRule, WeightFunction};

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Interactive,
    Headless,
}

/// Command-line overrides layered on top of the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct Overrides {
    /// Seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Update rule (threshold, pbr, ibr or the full name)
    #[arg(long, value_parser = parse_update_rule)]
    pub rule: Option<UpdateRule>,

    /// Weight function (uniform, inverse-manhattan, inverse-euclidean)
    #[arg(long, value_parser = parse_weight_function)]
    pub weighting: Option<WeightFunction>,

    /// Initial pattern (all-cooperators, von-neumann, 3x3, 5x5, glider)
    #[arg(long, value_parser = parse_preset)]
    pub preset: Option<Preset>,

    /// Payoff table as cc,cd,dc,dd; entries may be fractions like 7/3
    #[arg(long, value_parser = parse_payoff, allow_hyphen_values = true)]
    pub payoff: Option<[f64; 4]>,

    #[arg(long)]
    pub threshold: Option<u8>,

    #[arg(long, value_parser = parse_real)]
    pub beta: Option<f64>,

    #[arg(long, value_parser = parse_real)]
    pub stubbornness: Option<f64>,

    #[arg(long, value_parser = parse_real)]
    pub silence: Option<f64>,

    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub columns: Option<usize>,
}

impl Overrides {
    /// Writes every given flag into `config` and re-validates it.
    pub fn apply(&self, config: &mut AppConfig) -> anyhow::Result<()> {
        let grid = &mut config.grid;
        if let Some(seed) = self.seed {
            grid.seed = Some(seed);
        }
        if let Some(preset) = self.preset {
            grid.preset = preset.label().to_string();
        }
        if let Some(rows) = self.rows {
            grid.rows = rows;
        }
        if let Some(columns) = self.columns {
            grid.columns = columns;
        }

        let dynamics = &mut config.dynamics;
        if let Some(rule) = self.rule {
            dynamics.update_rule = rule.label().to_string();
        }
        if let Some(weighting) = self.weighting {
            dynamics.weight_function = weighting.label().to_string();
        }
        if let Some(payoff) = self.payoff {
            dynamics.payoff = payoff;
        }
        if let Some(threshold) = self.threshold {
            dynamics.threshold = threshold;
        }
        if let Some(beta) = self.beta {
            dynamics.beta = beta;
        }
        if let Some(stubbornness) = self.stubbornness {
            dynamics.stubbornness = stubbornness;
        }
        if let Some(silence) = self.silence {
            dynamics.silence = silence;
        }
        config.validate()
    }
}
