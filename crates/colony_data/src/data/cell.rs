use serde::{Deserialize, Serialize};

/// One of the two strategies a cell may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    #[default]
    Cooperate,
    Defect,
}

impl Strategy {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Strategy::Cooperate => Strategy::Defect,
            Strategy::Defect => Strategy::Cooperate,
        }
    }

    #[must_use]
    pub fn is_cooperating(self) -> bool {
        self == Strategy::Cooperate
    }

    /// Character used by the textual grid format.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Strategy::Cooperate => '.',
            Strategy::Defect => '#',
        }
    }

    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Strategy::Cooperate),
            '#' => Some(Strategy::Defect),
            _ => None,
        }
    }
}

/// A single lattice site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub strategy: Strategy,
    /// Excluded from neighbors' payoffs for the current generation only.
    #[serde(skip)]
    pub silent: bool,
}

impl Cell {
    #[must_use]
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            silent: false,
        }
    }
}

/// Row/column coordinate already reduced onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}
