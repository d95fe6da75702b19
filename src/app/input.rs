use colony_tui::renderer::GridWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::app::state::App;
use crate::model::parse::parse_payoff;
use crate::model::{Payoff, Preset, UpdateRule, WeightFunction};

/// Increment for the probability keys.
const PROBABILITY_STEP: f64 = 0.05;

fn next_of<T: Copy + PartialEq>(all: &[T], current: T) -> T {
    let i = all.iter().position(|&x| x == current).unwrap_or(0);
    all[(i + 1) % all.len()]
}

/// `value + delta` on the two-decimal grid the panel displays.
fn stepped(value: f64, delta: f64) -> f64 {
    ((value + delta) * 100.0).round() / 100.0
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.payoff_input.is_some() {
            self.handle_payoff_entry(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char('n') | KeyCode::Enter => {
                if let Err(e) = self.step() {
                    self.report(e);
                }
            }
            KeyCode::Char(' ') => self.auto_run = !self.auto_run,
            KeyCode::Char(c @ '1'..='3') => {
                let rule = UpdateRule::ALL[usize::from(c as u8 - b'1')];
                self.sim.params_mut().set_update_rule(rule);
                self.status = Some(format!("Rule: {}", rule.label()));
            }
            KeyCode::Char('w') => {
                let weighting =
                    next_of(&WeightFunction::ALL, self.sim.params().weight_function());
                self.sim.params_mut().set_weight_function(weighting);
                self.status = Some(format!("Weighting: {}", weighting.label()));
            }
            KeyCode::Char('p') => {
                let preset = next_of(&Preset::ALL, self.sim.preset());
                self.sim.select_preset(preset);
                self.status = Some(format!("Preset: {} (r to apply)", preset.label()));
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                let threshold = self.sim.params().threshold().saturating_add(1);
                if let Err(e) = self.sim.params_mut().set_threshold(threshold) {
                    self.report(e);
                }
            }
            KeyCode::Char('-') => match self.sim.params().threshold().checked_sub(1) {
                Some(threshold) => {
                    if let Err(e) = self.sim.params_mut().set_threshold(threshold) {
                        self.report(e);
                    }
                }
                None => self.status = Some("Threshold already at 0".to_string()),
            },
            KeyCode::Char(c @ ('s' | 'S')) => {
                let delta = if c == 'S' { PROBABILITY_STEP } else { -PROBABILITY_STEP };
                let value = stepped(self.sim.params().stubbornness(), delta);
                match self.sim.params_mut().set_stubbornness(value) {
                    Ok(()) => self.status = Some(format!("Stubbornness: {value:.2}")),
                    Err(e) => self.report(e),
                }
            }
            KeyCode::Char(c @ ('l' | 'L')) => {
                let delta = if c == 'L' { PROBABILITY_STEP } else { -PROBABILITY_STEP };
                let value = stepped(self.sim.params().silence(), delta);
                match self.sim.params_mut().set_silence(value) {
                    Ok(()) => self.status = Some(format!("Silence: {value:.2}")),
                    Err(e) => self.report(e),
                }
            }
            KeyCode::Char(c @ ('b' | 'B')) => {
                let beta = self.sim.params().beta();
                let value = if c == 'B' { beta * 2.0 } else { beta / 2.0 };
                match self.sim.params_mut().set_beta(value) {
                    Ok(()) => self.status = Some(format!("Beta: {value}")),
                    Err(e) => self.report(e),
                }
            }
            KeyCode::Char('e') => {
                self.payoff_input = Some(String::new());
                self.status = Some("Payoff cc,cd,dc,dd (Enter apply, Esc cancel)".to_string());
            }
            _ => {}
        }
    }

    /// Keys while a payoff table is being typed.
    fn handle_payoff_entry(&mut self, key: KeyEvent) {
        let Some(input) = self.payoff_input.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false
            }
            KeyCode::Char(c) => input.push(c),
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Esc => {
                self.payoff_input = None;
                self.status = Some("Payoff entry cancelled".to_string());
            }
            KeyCode::Enter => {
                let text = self.payoff_input.take().unwrap_or_default();
                let applied = parse_payoff(&text).and_then(|values| {
                    self.sim
                        .params_mut()
                        .set_payoff(Payoff::from_array(values))
                });
                match applied {
                    Ok(()) => self.status = Some(format!("Payoff: {}", text.trim())),
                    Err(e) => self.report(e),
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return;
        }
        if let Some(pos) = GridWidget::screen_to_cell(
            mouse.column,
            mouse.row,
            self.last_grid_rect,
            self.sim.grid(),
        ) {
            self.sim.toggle_cell(pos.row as isize, pos.col as isize);
            self.last_stats = crate::headless::population(&self.sim);
        }
    }
}
