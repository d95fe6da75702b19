//! Initial defector patterns stamped around a center cell.

pub use colony_data::Preset;
use colony_data::Strategy;

use crate::grid::Grid;

const VON_NEUMANN: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];
const GLIDER: [(isize, isize); 5] = [(-1, 0), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Defector offsets relative to the pattern center.
pub fn defector_offsets(preset: Preset) -> Vec<(isize, isize)> {
    match preset {
        Preset::AllCooperate => Vec::new(),
        Preset::VonNeumann => VON_NEUMANN.to_vec(),
        Preset::Block3x3 => square(1),
        Preset::Block5x5 => square(2),
        Preset::Glider => GLIDER.to_vec(),
    }
}

fn square(radius: isize) -> Vec<(isize, isize)> {
    (-radius..=radius)
        .flat_map(|dr| (-radius..=radius).map(move |dc| (dr, dc)))
        .collect()
}

/// Resets the grid to all-cooperate, then marks the preset's defectors.
///
/// Placement wraps, so a center near an edge spills onto the far side.
pub fn apply_preset(grid: &mut Grid, preset: Preset, row: isize, col: isize) {
    grid.fill(Strategy::Cooperate);
    grid.clear_silence();
    for (dr, dc) in defector_offsets(preset) {
        grid.set_strategy(row + dr, col + dc, Strategy::Defect);
    }
    tracing::debug!(preset = preset.label(), row, col, "Preset applied");
}
