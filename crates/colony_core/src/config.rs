//! Configuration for the colony and its front-ends.
//!
//! Values come from the `Default` impls, overridden by a `config.toml` file,
//! overridden in turn by command-line flags in the binary. Every section is
//! optional in the file.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [grid]
//! rows = 20
//! columns = 20
//! seed = 42
//! preset = "3x3 Defectors"
//! preset_center = [12, 10]
//!
//! [dynamics]
//! threshold = 3
//! payoff = [1.0, 0.0, 0.0, 2.3333333333333335]
//! update_rule = "Irrational Best Response"
//! weight_function = "Inverse Euclidean"
//! beta = 1000.0
//!
//! [display]
//! generation_interval_ms = 250
//! ```

use std::path::Path;

use anyhow::Context;
use colony_data::{Payoff, Preset};
use serde::{Deserialize, Serialize};

use crate::params::{SimulationParameters, MAX_THRESHOLD};
use crate::parse::{parse_preset, parse_update_rule, parse_weight_function};

/// Largest accepted grid side.
pub const MAX_DIMENSION: usize = 1000;

/// Center used by presets when none is configured.
pub const DEFAULT_PRESET_CENTER: (isize, isize) = (12, 10);

/// Lattice size, seeding and the initial pattern.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
    pub preset: String,
    pub preset_center: Option<[isize; 2]>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 20,
            columns: 20,
            seed: None,
            preset: Preset::AllCooperate.label().to_string(),
            preset_center: None,
        }
    }
}

/// Game and update-rule parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DynamicsConfig {
    pub threshold: u8,
    /// `[cc, cd, dc, dd]`
    pub payoff: [f64; 4],
    pub stubbornness: f64,
    pub silence: f64,
    pub beta: f64,
    pub weight_function: String,
    pub update_rule: String,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        let params = SimulationParameters::default();
        Self {
            threshold: params.threshold(),
            payoff: params.payoff().to_array(),
            stubbornness: params.stubbornness(),
            silence: params.silence(),
            beta: params.beta(),
            weight_function: params.weight_function().label().to_string(),
            update_rule: params.update_rule().label().to_string(),
        }
    }
}

/// Interactive front-end settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Delay between generations while auto-running.
    pub generation_interval_ms: u64,
    pub auto_run: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            generation_interval_ms: 250,
            auto_run: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub dynamics: DynamicsConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first failure. Tag names and parameter ranges are checked
    /// through the same parsers and setters the engine uses.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.grid.rows > 0, "Grid rows must be positive");
        anyhow::ensure!(
            self.grid.rows <= MAX_DIMENSION,
            "Grid rows too large (max {MAX_DIMENSION})"
        );
        anyhow::ensure!(self.grid.columns > 0, "Grid columns must be positive");
        anyhow::ensure!(
            self.grid.columns <= MAX_DIMENSION,
            "Grid columns too large (max {MAX_DIMENSION})"
        );
        anyhow::ensure!(
            self.dynamics.threshold <= MAX_THRESHOLD,
            "Threshold must be in [0, {MAX_THRESHOLD}]"
        );
        anyhow::ensure!(
            self.display.generation_interval_ms > 0,
            "Generation interval must be positive"
        );
        self.preset()?;
        self.parameters()?;
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Builds validated engine parameters from the dynamics section.
    pub fn parameters(&self) -> crate::Result<SimulationParameters> {
        let d = &self.dynamics;
        let mut params = SimulationParameters::default();
        params.set_update_rule(parse_update_rule(&d.update_rule)?);
        params.set_weight_function(parse_weight_function(&d.weight_function)?);
        params.set_threshold(d.threshold)?;
        params.set_payoff(Payoff::from_array(d.payoff))?;
        params.set_stubbornness(d.stubbornness)?;
        params.set_silence(d.silence)?;
        params.set_beta(d.beta)?;
        Ok(params)
    }

    pub fn preset(&self) -> crate::Result<Preset> {
        parse_preset(&self.grid.preset)
    }

    #[must_use]
    pub fn preset_center(&self) -> (isize, isize) {
        self.grid
            .preset_center
            .map_or(DEFAULT_PRESET_CENTER, |[row, col]| (row, col))
    }

    /// SHA-256 of the dynamics section, for matching reproducible runs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.dynamics).as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ColonyError;
    use colony_data::{UpdateRule, WeightFunction};

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_grid_rows() {
        let config = AppConfig {
            grid: GridConfig {
                rows: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_grid_columns() {
        let config = AppConfig {
            grid: GridConfig {
                columns: MAX_DIMENSION + 1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_silence() {
        let config = AppConfig {
            dynamics: DynamicsConfig {
                silence: 1.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_beta() {
        let config = AppConfig {
            dynamics: DynamicsConfig {
                beta: -0.1,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_rule_is_surfaced() {
        let config = AppConfig {
            dynamics: DynamicsConfig {
                update_rule: "Majority".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            config.parameters(),
            Err(ColonyError::UnsupportedUpdateRule("Majority".into()))
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [grid]
            rows = 8
            seed = 7
            preset = "von neumann"

            [dynamics]
            update_rule = "IBR"
            weight_function = "Inverse Manhattan"
            "#,
        )
        .unwrap();
        assert_eq!(config.grid.rows, 8);
        assert_eq!(config.grid.columns, 20);
        assert_eq!(config.grid.seed, Some(7));
        assert_eq!(config.preset().unwrap(), Preset::VonNeumann);
        assert_eq!(config.preset_center(), DEFAULT_PRESET_CENTER);

        let params = config.parameters().unwrap();
        assert_eq!(params.update_rule(), UpdateRule::IrrationalBestResponse);
        assert_eq!(params.weight_function(), WeightFunction::InverseManhattan);
        assert_eq!(params.threshold(), 3);
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let text = toml::to_string(&AppConfig::default()).unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load("definitely/not/here/config.toml").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_fingerprint_consistency() {
        let config1 = AppConfig::default();
        let config2 = AppConfig::default();
        assert_eq!(config1.fingerprint(), config2.fingerprint());

        let mut config3 = AppConfig::default();
        config3.dynamics.beta = 5.0;
        assert_ne!(config1.fingerprint(), config3.fingerprint());
    }
}
