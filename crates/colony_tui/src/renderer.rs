use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::{Block, Borders, Widget};

use colony_core::Grid;
use colony_data::{Cell, Position, Strategy};

/// Terminal columns per lattice cell, so cells render roughly square.
pub const CELL_WIDTH: u16 = 2;

pub struct GridWidget<'a> {
    grid: &'a Grid,
    generation: u64,
}

impl<'a> GridWidget<'a> {
    pub fn new(grid: &'a Grid, generation: u64) -> Self {
        Self { grid, generation }
    }

    pub fn get_inner_area(area: Rect) -> Rect {
        Block::default().borders(Borders::ALL).inner(area)
    }

    pub fn color_for_cell(cell: &Cell) -> Color {
        match (cell.strategy, cell.silent) {
            (Strategy::Cooperate, false) => Color::Rgb(40, 90, 220),
            (Strategy::Cooperate, true) => Color::Rgb(20, 45, 110),
            (Strategy::Defect, false) => Color::Rgb(220, 40, 40),
            (Strategy::Defect, true) => Color::Rgb(110, 20, 20),
        }
    }

    pub fn cell_to_screen(pos: Position, area: Rect) -> Option<(u16, u16)> {
        let inner = Self::get_inner_area(area);
        let x = u16::try_from(pos.col)
            .ok()?
            .checked_mul(CELL_WIDTH)?
            .checked_add(inner.x)?;
        let y = u16::try_from(pos.row).ok()?.checked_add(inner.y)?;
        if x + CELL_WIDTH <= inner.right() && y < inner.bottom() {
            Some((x, y))
        } else {
            None
        }
    }

    /// Lattice cell under a terminal position, if it lies on a drawn cell.
    pub fn screen_to_cell(
        screen_x: u16,
        screen_y: u16,
        area: Rect,
        grid: &Grid,
    ) -> Option<Position> {
        let inner = Self::get_inner_area(area);
        if screen_x < inner.left()
            || screen_x >= inner.right()
            || screen_y < inner.top()
            || screen_y >= inner.bottom()
        {
            return None;
        }
        let col = usize::from((screen_x - inner.x) / CELL_WIDTH);
        let row = usize::from(screen_y - inner.y);
        let pos = Position::new(row, col);
        (row < grid.rows() && col < grid.columns() && Self::cell_to_screen(pos, area).is_some())
            .then_some(pos)
    }
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!("Colony (Generation: {})", self.generation))
            .borders(Borders::ALL)
            .render(area, buf);

        for (i, cell) in self.grid.cells().iter().enumerate() {
            let pos = self.grid.position_of(i);
            let Some((x, y)) = Self::cell_to_screen(pos, area) else {
                continue;
            };
            let color = Self::color_for_cell(cell);
            for dx in 0..CELL_WIDTH {
                let target = &mut buf[(x + dx, y)];
                target.set_symbol("█");
                target.set_fg(color);
            }
        }
    }
}
