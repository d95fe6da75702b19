use colony_core::{GenerationStats, SimulationParameters};
use colony_data::Preset;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget, Wrap};

/// Side panel with the live parameters, last generation counts and keys.
pub struct ParametersWidget<'a> {
    pub params: &'a SimulationParameters,
    pub stats: GenerationStats,
    pub preset: Preset,
    pub auto_run: bool,
    pub status: Option<&'a str>,
    /// Payoff text being typed, if entry is open.
    pub payoff_input: Option<&'a str>,
}

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<13}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

impl<'a> ParametersWidget<'a> {
    pub fn lines(&self) -> Vec<Line<'a>> {
        let p = self.params;
        let payoff = p.payoff();
        let mut lines = vec![
            row("Rule", p.update_rule().label().to_string()),
            row("Weighting", p.weight_function().label().to_string()),
            row("Threshold", p.threshold().to_string()),
            row(
                "Payoff",
                format!(
                    "{:.3} {:.3} {:.3} {:.3}",
                    payoff.cc, payoff.cd, payoff.dc, payoff.dd
                ),
            ),
            row("Stubbornness", format!("{:.2}", p.stubbornness())),
            row("Silence", format!("{:.2}", p.silence())),
            row("Beta", format!("{}", p.beta())),
            row("Preset", self.preset.label().to_string()),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!("C {}", self.stats.cooperators),
                    Style::default().fg(Color::Rgb(40, 90, 220)),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("D {}", self.stats.defectors),
                    Style::default().fg(Color::Rgb(220, 40, 40)),
                ),
                Span::raw(format!("  switched {}", self.stats.switched)),
            ]),
            row("Auto-run", if self.auto_run { "on" } else { "off" }.to_string()),
            Line::default(),
            Line::styled(
                "n step  space run  1/2/3 rule",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                "w weight  p preset  r reset",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                "+/- threshold  s/S stubborn",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled(
                "l/L silence  b/B beta",
                Style::default().fg(Color::DarkGray),
            ),
            Line::styled("e payoff  q quit", Style::default().fg(Color::DarkGray)),
        ];
        if let Some(input) = self.payoff_input {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("Payoff> ", Style::default().fg(Color::Gray)),
                Span::styled(format!("{input}_"), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }
        if let Some(status) = self.status {
            lines.push(Line::default());
            lines.push(Line::styled(status, Style::default().fg(Color::Yellow)));
        }
        lines
    }
}

impl<'a> Widget for ParametersWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .block(Block::default().title("Parameters").borders(Borders::ALL))
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
