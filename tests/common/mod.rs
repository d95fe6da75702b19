use colony_lib::model::{AppConfig, Grid, Simulation};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct SimulationBuilder {
    config: AppConfig,
    pattern: Option<Grid>,
}

#[allow(dead_code)]
impl SimulationBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.grid.seed = Some(42);
        Self {
            config,
            pattern: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.grid.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    /// Starting strategies as rows of `.` and `#`; also sets the grid size.
    pub fn with_pattern(mut self, rows: &[&str]) -> Self {
        let grid = Grid::from_rows(rows).expect("valid pattern");
        self.config.grid.rows = grid.rows();
        self.config.grid.columns = grid.columns();
        self.pattern = Some(grid);
        self
    }

    pub fn build(self) -> Simulation {
        let mut sim = Simulation::from_config(&self.config).expect("valid config");
        if let Some(pattern) = self.pattern {
            for (i, cell) in pattern.cells().iter().enumerate() {
                let pos = pattern.position_of(i);
                sim.set_strategy(pos.row as isize, pos.col as isize, cell.strategy);
            }
        }
        sim
    }
}

#[allow(dead_code)]
pub fn grid(rows: &[&str]) -> Grid {
    Grid::from_rows(rows).expect("valid pattern")
}

/// Seeded RNG that counts how many times it is drawn from.
#[allow(dead_code)]
pub struct CountingRng {
    inner: ChaCha8Rng,
    pub draws: usize,
}

#[allow(dead_code)]
impl CountingRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            draws: 0,
        }
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}
