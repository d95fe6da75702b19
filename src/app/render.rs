use colony_tui::renderer::GridWidget;
use colony_tui::views::parameters::ParametersWidget;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::state::App;

/// Width of the parameter panel.
const SIDEBAR_WIDTH: u16 = 36;

impl App {
    pub fn draw(&mut self, f: &mut Frame) {
        let main_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(SIDEBAR_WIDTH)])
            .split(f.area());

        self.last_grid_rect = main_layout[0];

        f.render_widget(
            GridWidget::new(self.sim.grid(), self.sim.generation()),
            main_layout[0],
        );
        f.render_widget(
            ParametersWidget {
                params: self.sim.params(),
                stats: self.last_stats,
                preset: self.sim.preset(),
                auto_run: self.auto_run,
                status: self.status.as_deref(),
                payoff_input: self.payoff_input.as_deref(),
            },
            main_layout[1],
        );
    }
}
