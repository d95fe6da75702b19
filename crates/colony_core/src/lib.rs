//! # Colony Core
//!
//! The simulation engine for a spatial Prisoner's Dilemma played on a
//! toroidal lattice of cooperating and defecting cells.
//!
//! This crate contains the deterministic simulation logic, including:
//! - The wrapping grid and its Moore neighborhood
//! - Weighted payoff computation and the three update rules
//! - Initial patterns, configuration and run metrics
//!
//! Every random draw flows through an injected `rand::Rng`, so a seeded
//! `ChaCha8Rng` reproduces a run exactly.
//!
//! ## Example
//!
//! ```
//! use colony_core::{Grid, SimulationParameters};
//! use colony_core::dynamics::advance_generation;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut grid = Grid::from_rows(&["...", ".#.", "..."]).unwrap();
//! let params = SimulationParameters::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let stats = advance_generation(&mut grid, &params, &mut rng).unwrap();
//! assert_eq!(stats.cooperators + stats.defectors, 9);
//! ```

/// Configuration loading and validation
pub mod config;
/// Generation update engine and rule implementations
pub mod dynamics;
/// Error types
pub mod error;
/// Toroidal strategy lattice
pub mod grid;
/// Run statistics and structured logging
pub mod metrics;
/// Validated simulation parameters
pub mod params;
/// Numeric and tag parsing for configuration and the command line
pub mod parse;
/// Initial defector patterns
pub mod presets;
/// Owned simulation aggregate
pub mod simulation;
/// Neighbor distance weighting
pub mod weighting;

pub use colony_data::{Cell, Payoff, Position, Preset, Strategy, UpdateRule, WeightFunction};
pub use config::AppConfig;
pub use dynamics::GenerationStats;
pub use error::{ColonyError, Result};
pub use grid::Grid;
pub use params::SimulationParameters;
pub use simulation::Simulation;
