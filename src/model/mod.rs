//! Engine types as seen by the application layer.

pub use colony_core::{
    AppConfig, ColonyError, GenerationStats, Grid, Payoff, Preset, Simulation,
    SimulationParameters, Strategy, UpdateRule, WeightFunction,
};
pub mod config {
    pub use colony_core::config::*;
}
pub mod metrics {
    pub use colony_core::metrics::*;
}
pub mod parse {
    pub use colony_core::parse::*;
}
