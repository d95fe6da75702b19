//! Distance weighting of neighbor payoff contributions.

pub use colony_data::WeightFunction;
use colony_data::Position;

use crate::grid::Grid;

pub trait WeightLogic {
    /// Weight for a neighbor displaced by `(dr, dc)` cells.
    fn weight_for_offset(&self, dr: isize, dc: isize) -> f64;

    /// Weight between two grid positions, measured along the torus.
    fn weight(&self, grid: &Grid, from: Position, to: Position) -> f64 {
        let (dr, dc) = grid.displacement(from, to);
        self.weight_for_offset(dr, dc)
    }
}

impl WeightLogic for WeightFunction {
    fn weight_for_offset(&self, dr: isize, dc: isize) -> f64 {
        match self {
            WeightFunction::Uniform => 1.0,
            WeightFunction::InverseManhattan => {
                let dist = dr.unsigned_abs() + dc.unsigned_abs();
                if dist == 0 {
                    0.0
                } else {
                    1.0 / dist as f64
                }
            }
            // Inverse squared distance.
            WeightFunction::InverseEuclidean => {
                let dist = dr * dr + dc * dc;
                if dist == 0 {
                    0.0
                } else {
                    1.0 / dist as f64
                }
            }
        }
    }
}
