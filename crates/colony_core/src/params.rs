//! Validated simulation parameters.
//!
//! Fields are private: callers mutate through setters that reject
//! out-of-range values instead of clamping them. The engine only reads
//! parameters, and only between mutations.

use std::fmt;

use colony_data::{Payoff, UpdateRule, WeightFunction};

use crate::error::{ColonyError, Result};

/// Largest meaningful threshold, the size of the Moore neighborhood.
pub const MAX_THRESHOLD: u8 = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationParameters {
    threshold: u8,
    payoff: Payoff,
    stubbornness: f64,
    silence: f64,
    beta: f64,
    weight_function: WeightFunction,
    update_rule: UpdateRule,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            threshold: 3,
            payoff: Payoff::default(),
            stubbornness: 0.0,
            silence: 0.0,
            beta: 1000.0,
            weight_function: WeightFunction::Uniform,
            update_rule: UpdateRule::PerfectBestResponse,
        }
    }
}

fn check_probability(parameter: &'static str, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        tracing::warn!(parameter, value, "Rejected probability outside [0, 1]");
        Err(ColonyError::out_of_range(parameter, value, "[0, 1]"))
    }
}

impl SimulationParameters {
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }

    pub fn stubbornness(&self) -> f64 {
        self.stubbornness
    }

    pub fn silence(&self) -> f64 {
        self.silence
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn weight_function(&self) -> WeightFunction {
        self.weight_function
    }

    pub fn update_rule(&self) -> UpdateRule {
        self.update_rule
    }

    pub fn set_threshold(&mut self, threshold: u8) -> Result<()> {
        if threshold > MAX_THRESHOLD {
            tracing::warn!(threshold, "Rejected threshold above neighborhood size");
            return Err(ColonyError::out_of_range(
                "threshold",
                f64::from(threshold),
                "[0, 8]",
            ));
        }
        tracing::debug!(threshold, "Threshold updated");
        self.threshold = threshold;
        Ok(())
    }

    /// Every entry must be finite; the whole table is rejected otherwise.
    pub fn set_payoff(&mut self, payoff: Payoff) -> Result<()> {
        if let Some(bad) = payoff.to_array().into_iter().find(|v| !v.is_finite()) {
            tracing::warn!(value = bad, "Rejected non-finite payoff entry");
            return Err(ColonyError::out_of_range("payoff", bad, "a finite real"));
        }
        tracing::debug!(?payoff, "Payoff updated");
        self.payoff = payoff;
        Ok(())
    }

    pub fn set_stubbornness(&mut self, stubbornness: f64) -> Result<()> {
        self.stubbornness = check_probability("stubbornness", stubbornness)?;
        tracing::debug!(stubbornness, "Stubbornness updated");
        Ok(())
    }

    pub fn set_silence(&mut self, silence: f64) -> Result<()> {
        self.silence = check_probability("silence", silence)?;
        tracing::debug!(silence, "Silence updated");
        Ok(())
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        if !(beta.is_finite() && beta >= 0.0) {
            tracing::warn!(beta, "Rejected beta");
            return Err(ColonyError::out_of_range(
                "beta",
                beta,
                "a finite non-negative real",
            ));
        }
        tracing::debug!(beta, "Beta updated");
        self.beta = beta;
        Ok(())
    }

    pub fn set_weight_function(&mut self, weight_function: WeightFunction) {
        tracing::debug!(weighting = weight_function.label(), "Weight function updated");
        self.weight_function = weight_function;
    }

    pub fn set_update_rule(&mut self, update_rule: UpdateRule) {
        tracing::debug!(rule = update_rule.label(), "Update rule updated");
        self.update_rule = update_rule;
    }
}

impl fmt::Display for SimulationParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Threshold: {}", self.threshold)?;
        writeln!(
            f,
            "Payoff: [{}, {}, {}, {}]",
            self.payoff.cc, self.payoff.cd, self.payoff.dc, self.payoff.dd
        )?;
        writeln!(f, "Stubbornness: {}", self.stubbornness)?;
        writeln!(f, "Silence: {}", self.silence)?;
        writeln!(f, "Weight function: {}", self.weight_function.label())?;
        writeln!(f, "Update rule: {}", self.update_rule.label())?;
        write!(f, "Beta: {}", self.beta)
    }
}
