//! Generation update engine.
//!
//! A generation reads only the committed grid and writes into a separate
//! buffer that is applied with [`Grid::replace_all`] at the end, so no cell
//! ever observes a neighbor's next strategy.
//!
//! Random draws happen in a fixed order so a seeded RNG reproduces a run:
//! one silence draw per cell (none when silence is zero), then per cell in
//! row-major order one stubbornness draw followed, for the irrational rule,
//! by a neighbor pick and an adoption draw. The threshold rule draws nothing.

use colony_data::{Payoff, Strategy, UpdateRule};
use rand::distributions::Uniform;
use rand::Rng;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::Result;
use crate::grid::{Grid, NEIGHBOR_OFFSETS};
use crate::params::SimulationParameters;
use crate::weighting::{WeightFunction, WeightLogic};

/// Largest argument for which `f64::exp` stays finite.
pub const EXP_SATURATION: f64 = 709.782_712_893_384;

/// Summary of one committed generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationStats {
    pub cooperators: usize,
    pub defectors: usize,
    /// Cells whose strategy changed in this generation.
    pub switched: usize,
    pub silent: usize,
}

/// Marks each cell silent with probability `silence`.
///
/// With `silence == 0` every flag is cleared and no randomness is consumed.
/// Returns the number of silent cells.
pub fn assign_silence<R: Rng + ?Sized>(grid: &mut Grid, silence: f64, rng: &mut R) -> usize {
    if silence == 0.0 {
        grid.clear_silence();
        return 0;
    }
    let mut silent = 0;
    for cell in grid.cells_mut() {
        cell.silent = rng.gen::<f64>() <= silence;
        if cell.silent {
            silent += 1;
        }
    }
    silent
}

/// Weighted payoff of the cell at `index` against its non-silent neighbors.
pub fn cell_payoff(grid: &Grid, payoff: &Payoff, weighting: WeightFunction, index: usize) -> f64 {
    let own = grid.cells()[index].strategy;
    let center = grid.position_of(index);
    let (row, col) = (center.row as isize, center.col as isize);
    NEIGHBOR_OFFSETS.iter().fold(0.0, |acc, &(dr, dc)| {
        let neighbor = grid.cell(row + dr, col + dc);
        if neighbor.silent {
            return acc;
        }
        let alpha = weighting.weight(grid, center, grid.position(row + dr, col + dc));
        acc + alpha * payoff.get(own, neighbor.strategy)
    })
}

/// Payoffs of every cell, computed from the current generation only.
pub fn compute_payoffs(grid: &Grid, params: &SimulationParameters) -> Vec<f64> {
    let payoff = params.payoff();
    let weighting = params.weight_function();

    #[cfg(feature = "rayon")]
    {
        (0..grid.len())
            .into_par_iter()
            .map(|i| cell_payoff(grid, payoff, weighting, i))
            .collect()
    }
    #[cfg(not(feature = "rayon"))]
    {
        (0..grid.len())
            .map(|i| cell_payoff(grid, payoff, weighting, i))
            .collect()
    }
}

/// Next strategy of every cell under the threshold rule. Pure.
pub fn threshold_generation(grid: &Grid, threshold: u8) -> Vec<Strategy> {
    (0..grid.len())
        .map(|i| {
            let p = grid.position_of(i);
            let defecting = 8 - grid.count_cooperating_neighbors(p.row as isize, p.col as isize);
            if defecting >= threshold {
                Strategy::Defect
            } else {
                Strategy::Cooperate
            }
        })
        .collect()
}

/// Strategy of the best payoff among the cell and its neighbors.
///
/// Starts from the cell's own payoff and scans neighbors in
/// [`NEIGHBOR_OFFSETS`] order. A strictly better payoff takes over; an exact
/// tie with the running best only takes over when the candidate holds the
/// cell's current strategy.
pub fn perfect_best_response(grid: &Grid, payoffs: &[f64], index: usize) -> Strategy {
    let cells = grid.cells();
    let own = cells[index].strategy;
    let mut best_strategy = own;
    let mut best_payoff = payoffs[index];

    for n in grid.neighbor_indices(index) {
        let candidate = cells[n].strategy;
        if payoffs[n] > best_payoff {
            best_payoff = payoffs[n];
            best_strategy = candidate;
        }
        if payoffs[n] == best_payoff && candidate == own {
            best_strategy = candidate;
        }
    }
    best_strategy
}

/// Logistic probability of adopting a neighbor's strategy.
///
/// Saturates to exactly 0 or 1 instead of overflowing `exp`. An undefined
/// exponent (NaN) never triggers adoption.
pub fn adoption_probability(beta: f64, neighbor_payoff: f64, own_payoff: f64) -> f64 {
    let power = -beta * (neighbor_payoff - own_payoff);
    if power.is_nan() {
        return 0.0;
    }
    if power > EXP_SATURATION {
        tracing::trace!(power, "Logistic saturated low");
        0.0
    } else if power < -EXP_SATURATION {
        tracing::trace!(power, "Logistic saturated high");
        1.0
    } else {
        1.0 / (1.0 + power.exp())
    }
}

/// Imitates one uniformly picked neighbor with logistic probability.
pub fn irrational_best_response<R: Rng + ?Sized>(
    grid: &Grid,
    payoffs: &[f64],
    beta: f64,
    index: usize,
    rng: &mut R,
) -> Strategy {
    let cells = grid.cells();
    let own = cells[index].strategy;
    // Eight outcomes divide the word size, so the pick never rejects and
    // costs exactly one draw.
    let pick = rng.sample(Uniform::new(0, NEIGHBOR_OFFSETS.len()));
    let n = grid.neighbor_indices(index)[pick];
    if cells[n].silent {
        return own;
    }
    let p = adoption_probability(beta, payoffs[n], payoffs[index]);
    if rng.gen::<f64>() < p {
        cells[n].strategy
    } else {
        own
    }
}

fn best_response_generation<R: Rng + ?Sized>(
    grid: &Grid,
    params: &SimulationParameters,
    payoffs: &[f64],
    rng: &mut R,
) -> Vec<Strategy> {
    let cells = grid.cells();
    (0..grid.len())
        .map(|i| {
            if rng.gen::<f64>() < params.stubbornness() {
                return cells[i].strategy;
            }
            match params.update_rule() {
                UpdateRule::IrrationalBestResponse => {
                    irrational_best_response(grid, payoffs, params.beta(), i, rng)
                }
                _ => perfect_best_response(grid, payoffs, i),
            }
        })
        .collect()
}

/// Advances the grid by one generation and commits it atomically.
pub fn advance_generation<R: Rng + ?Sized>(
    grid: &mut Grid,
    params: &SimulationParameters,
    rng: &mut R,
) -> Result<GenerationStats> {
    let (next, silent) = match params.update_rule() {
        UpdateRule::Threshold => {
            grid.clear_silence();
            (threshold_generation(grid, params.threshold()), 0)
        }
        UpdateRule::PerfectBestResponse | UpdateRule::IrrationalBestResponse => {
            let silent = assign_silence(grid, params.silence(), rng);
            let payoffs = compute_payoffs(grid, params);
            (best_response_generation(grid, params, &payoffs, rng), silent)
        }
    };

    let switched = grid
        .cells()
        .iter()
        .zip(&next)
        .filter(|(cell, strategy)| cell.strategy != **strategy)
        .count();
    grid.replace_all(&next)?;

    let cooperators = grid.count(Strategy::Cooperate);
    Ok(GenerationStats {
        cooperators,
        defectors: grid.len() - cooperators,
        switched,
        silent,
    })
}
