pub mod input;
pub mod render;
pub mod state;

pub use state::App;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::{Duration, Instant};

use colony_tui::Tui;

/// Longest wait for input, so auto-run keeps its cadence.
const POLL_CAP: Duration = Duration::from_millis(50);

impl App {
    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_generation = Instant::now();

        while self.running {
            tui.draw(|f| self.draw(f))?;

            let timeout = self
                .generation_interval
                .saturating_sub(last_generation.elapsed())
                .min(POLL_CAP);
            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse);
                    }
                    _ => {}
                }
            }

            if self.auto_run && last_generation.elapsed() >= self.generation_interval {
                self.step()?;
                last_generation = Instant::now();
            }
        }

        tracing::info!(
            generations = self.metrics.generations(),
            total_switched = self.metrics.total_switched(),
            "Interactive session ended"
        );
        Ok(())
    }
}
