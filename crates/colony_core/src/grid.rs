//! Toroidal lattice of strategy cells.
//!
//! Every accessor takes signed coordinates and reduces them with
//! `rem_euclid`, so `(-1, 0)` names the last row and nothing ever indexes
//! outside the grid.

use std::fmt;

use colony_data::{Cell, Position, Strategy};

use crate::error::{ColonyError, Result};

/// Moore-neighborhood offsets in scan order. Tie-breaking and the random
/// neighbor pick both depend on this order.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-cooperate grid.
    pub fn new(rows: usize, columns: usize) -> Result<Self> {
        let len = rows
            .checked_mul(columns)
            .filter(|_| rows > 0 && columns > 0 && isize::try_from(rows.max(columns)).is_ok())
            .ok_or(ColonyError::InvalidDimensions { rows, columns })?;
        Ok(Self {
            rows,
            columns,
            cells: vec![Cell::default(); len],
        })
    }

    /// Parses rows of `.` (cooperate) and `#` (defect).
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        let columns = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Self::new(rows.len(), columns)?;
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(ColonyError::invalid_pattern(format!(
                    "row {r} has {} cells, expected {columns}",
                    line.chars().count()
                )));
            }
            for (c, symbol) in line.chars().enumerate() {
                let strategy = Strategy::from_symbol(symbol).ok_or_else(|| {
                    ColonyError::invalid_pattern(format!("unknown symbol {symbol:?} at ({r}, {c})"))
                })?;
                grid.cells[r * columns + c].strategy = strategy;
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `(row, col)` after toroidal reduction.
    #[inline(always)]
    pub fn index(&self, row: isize, col: isize) -> usize {
        let r = row.rem_euclid(self.rows as isize) as usize;
        let c = col.rem_euclid(self.columns as isize) as usize;
        r * self.columns + c
    }

    #[inline]
    pub fn position(&self, row: isize, col: isize) -> Position {
        Position::new(
            row.rem_euclid(self.rows as isize) as usize,
            col.rem_euclid(self.columns as isize) as usize,
        )
    }

    #[inline]
    pub fn position_of(&self, index: usize) -> Position {
        let index = index % self.cells.len();
        Position::new(index / self.columns, index % self.columns)
    }

    pub fn cell(&self, row: isize, col: isize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn strategy(&self, row: isize, col: isize) -> Strategy {
        self.cell(row, col).strategy
    }

    pub fn set_strategy(&mut self, row: isize, col: isize, strategy: Strategy) {
        let idx = self.index(row, col);
        self.cells[idx].strategy = strategy;
    }

    /// Flips the cell and returns its new strategy.
    pub fn toggle(&mut self, row: isize, col: isize) -> Strategy {
        let idx = self.index(row, col);
        let cell = &mut self.cells[idx];
        cell.strategy = cell.strategy.flipped();
        cell.strategy
    }

    pub fn fill(&mut self, strategy: Strategy) {
        for cell in &mut self.cells {
            cell.strategy = strategy;
        }
    }

    pub fn clear_silence(&mut self) {
        for cell in &mut self.cells {
            cell.silent = false;
        }
    }

    /// The eight wrapped Moore neighbors of `(row, col)` in scan order.
    pub fn neighbors(&self, row: isize, col: isize) -> [Position; 8] {
        NEIGHBOR_OFFSETS.map(|(dr, dc)| self.position(row + dr, col + dc))
    }

    /// Same as [`Grid::neighbors`] but as row-major indices.
    pub fn neighbor_indices(&self, index: usize) -> [usize; 8] {
        let Position { row, col } = self.position_of(index);
        let (row, col) = (row as isize, col as isize);
        NEIGHBOR_OFFSETS.map(|(dr, dc)| self.index(row + dr, col + dc))
    }

    pub fn count_cooperating_neighbors(&self, row: isize, col: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| self.strategy(row + dr, col + dc).is_cooperating())
            .count() as u8
    }

    pub fn count(&self, strategy: Strategy) -> usize {
        self.cells.iter().filter(|c| c.strategy == strategy).count()
    }

    pub fn strategies(&self) -> Vec<Strategy> {
        self.cells.iter().map(|c| c.strategy).collect()
    }

    /// Replaces every strategy at once. Silent flags are left alone.
    ///
    /// Fails without touching the grid when `next` does not cover it exactly.
    pub fn replace_all(&mut self, next: &[Strategy]) -> Result<()> {
        if next.len() != self.cells.len() {
            return Err(ColonyError::InvalidGenerationSize {
                expected: self.cells.len(),
                actual: next.len(),
            });
        }
        for (cell, &strategy) in self.cells.iter_mut().zip(next) {
            cell.strategy = strategy;
        }
        Ok(())
    }

    /// Shortest signed displacement from `from` to `to` on the torus.
    pub fn displacement(&self, from: Position, to: Position) -> (isize, isize) {
        (
            wrap_delta(to.row as isize - from.row as isize, self.rows),
            wrap_delta(to.col as isize - from.col as isize, self.columns),
        )
    }
}

fn wrap_delta(delta: isize, extent: usize) -> isize {
    let extent = extent as isize;
    let d = delta.rem_euclid(extent);
    if d > extent / 2 {
        d - extent
    } else {
        d
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.columns).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.strategy.symbol())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimension_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(ColonyError::InvalidDimensions {
                rows: 0,
                columns: 4
            })
        );
    }

    #[test]
    fn test_overflowing_dimensions_rejected() {
        assert_eq!(
            Grid::new(usize::MAX, 2),
            Err(ColonyError::InvalidDimensions {
                rows: usize::MAX,
                columns: 2
            })
        );
        assert!(Grid::new(usize::MAX / 2, 3).is_err());
    }

    #[test]
    fn test_index_wraps_both_directions() {
        let grid = Grid::new(4, 5).unwrap();
        assert_eq!(grid.index(-1, 0), grid.index(3, 0));
        assert_eq!(grid.index(0, -1), grid.index(0, 4));
        assert_eq!(grid.index(4, 5), grid.index(0, 0));
        assert_eq!(grid.index(-9, -11), grid.index(3, 4));
    }

    #[test]
    fn test_neighbors_order_and_wrap() {
        let grid = Grid::new(3, 4).unwrap();
        let n = grid.neighbors(0, 0);
        assert_eq!(n[0], Position::new(2, 3));
        assert_eq!(n[1], Position::new(2, 0));
        assert_eq!(n[2], Position::new(2, 1));
        assert_eq!(n[3], Position::new(0, 3));
        assert_eq!(n[4], Position::new(0, 1));
        assert_eq!(n[7], Position::new(1, 1));
        assert!(!n.contains(&Position::new(0, 0)));
    }

    #[test]
    fn test_neighbor_indices_match_positions() {
        let grid = Grid::new(5, 6).unwrap();
        let idx = grid.index(4, 5);
        let positions = grid.neighbors(4, 5);
        let indices = grid.neighbor_indices(idx);
        for (p, i) in positions.iter().zip(indices) {
            assert_eq!(grid.index(p.row as isize, p.col as isize), i);
        }
    }

    #[test]
    fn test_count_cooperating_neighbors() {
        let grid = Grid::from_rows(&["#..", "...", "..#"]).unwrap();
        // (1,1) sees both defectors, (0,0) sees the corner one through the wrap.
        assert_eq!(grid.count_cooperating_neighbors(1, 1), 6);
        assert_eq!(grid.count_cooperating_neighbors(0, 0), 7);
    }

    #[test]
    fn test_replace_all_size_mismatch_is_atomic() {
        let mut grid = Grid::from_rows(&["#.", ".."]).unwrap();
        let before = grid.clone();
        let err = grid.replace_all(&[Strategy::Defect; 3]).unwrap_err();
        assert_eq!(
            err,
            ColonyError::InvalidGenerationSize {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_replace_all_applies_every_cell() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.replace_all(&[
            Strategy::Defect,
            Strategy::Cooperate,
            Strategy::Cooperate,
            Strategy::Defect,
        ])
        .unwrap();
        assert_eq!(grid.to_string(), "#.\n.#");
    }

    #[test]
    fn test_toggle_wraps() {
        let mut grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.toggle(-1, -1), Strategy::Defect);
        assert_eq!(grid.strategy(2, 2), Strategy::Defect);
        assert_eq!(grid.toggle(5, 5), Strategy::Cooperate);
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_unknown() {
        assert!(matches!(
            Grid::from_rows(&["..", "."]),
            Err(ColonyError::InvalidPattern(_))
        ));
        assert!(matches!(
            Grid::from_rows(&[".x"]),
            Err(ColonyError::InvalidPattern(_))
        ));
        assert!(matches!(
            Grid::from_rows(&[]),
            Err(ColonyError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_displacement_is_shortest_on_torus() {
        let grid = Grid::new(10, 10).unwrap();
        assert_eq!(
            grid.displacement(Position::new(0, 0), Position::new(9, 1)),
            (-1, 1)
        );
        assert_eq!(
            grid.displacement(Position::new(5, 5), Position::new(6, 4)),
            (1, -1)
        );
    }
}
