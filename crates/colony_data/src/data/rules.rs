use serde::{Deserialize, Serialize};

use super::cell::Strategy;

/// Strategy-update rule applied each generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpdateRule {
    /// Defect once enough neighbors defect.
    Threshold,
    /// Copy the best-scoring strategy among self and neighbors.
    #[default]
    PerfectBestResponse,
    /// Logistic imitation of one randomly picked neighbor.
    IrrationalBestResponse,
}

impl UpdateRule {
    pub const ALL: [UpdateRule; 3] = [
        UpdateRule::Threshold,
        UpdateRule::PerfectBestResponse,
        UpdateRule::IrrationalBestResponse,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            UpdateRule::Threshold => "Threshold",
            UpdateRule::PerfectBestResponse => "Perfect Best Response",
            UpdateRule::IrrationalBestResponse => "Irrational Best Response",
        }
    }
}

/// Distance weighting applied to a neighbor's payoff contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeightFunction {
    #[default]
    Uniform,
    InverseManhattan,
    InverseEuclidean,
}

impl WeightFunction {
    pub const ALL: [WeightFunction; 3] = [
        WeightFunction::Uniform,
        WeightFunction::InverseManhattan,
        WeightFunction::InverseEuclidean,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            WeightFunction::Uniform => "Uniform",
            WeightFunction::InverseManhattan => "Inverse Manhattan",
            WeightFunction::InverseEuclidean => "Inverse Euclidean",
        }
    }
}

/// Named initial patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Preset {
    #[default]
    AllCooperate,
    /// Plus-shaped five-cell defector cluster.
    VonNeumann,
    Block3x3,
    Block5x5,
    /// Five-cell defector glider.
    Glider,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::AllCooperate,
        Preset::VonNeumann,
        Preset::Block3x3,
        Preset::Block5x5,
        Preset::Glider,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Preset::AllCooperate => "All Cooperators",
            Preset::VonNeumann => "von Neumann",
            Preset::Block3x3 => "3x3 Defectors",
            Preset::Block5x5 => "5x5 Defectors",
            Preset::Glider => "Glider",
        }
    }
}

/// Payoff table indexed by (own strategy, opponent strategy).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Payoff {
    /// Cooperator meeting a cooperator.
    pub cc: f64,
    /// Cooperator meeting a defector.
    pub cd: f64,
    /// Defector meeting a cooperator.
    pub dc: f64,
    /// Defector meeting a defector.
    pub dd: f64,
}

impl Default for Payoff {
    fn default() -> Self {
        Self {
            cc: 1.0,
            cd: 0.0,
            dc: 0.0,
            dd: 7.0 / 3.0,
        }
    }
}

impl Payoff {
    #[must_use]
    pub fn new(cc: f64, cd: f64, dc: f64, dd: f64) -> Self {
        Self { cc, cd, dc, dd }
    }

    #[must_use]
    pub fn get(&self, own: Strategy, other: Strategy) -> f64 {
        match (own, other) {
            (Strategy::Cooperate, Strategy::Cooperate) => self.cc,
            (Strategy::Cooperate, Strategy::Defect) => self.cd,
            (Strategy::Defect, Strategy::Cooperate) => self.dc,
            (Strategy::Defect, Strategy::Defect) => self.dd,
        }
    }

    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.cc, self.cd, self.dc, self.dd]
    }

    #[must_use]
    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}
