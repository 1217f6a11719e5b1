use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::report::SessionReport;

/// End-of-session summary: headline numbers, pass/fail, XP, weakest keys.
pub struct StatsPanel<'a> {
    report: &'a SessionReport,
}

impl<'a> StatsPanel<'a> {
    pub fn new(report: &'a SessionReport) -> Self {
        Self { report }
    }
}

impl Widget for StatsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let stats = &self.report.stats;

        let verdict = if self.report.passed {
            Span::styled(
                "עברת את השיעור",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("נסו שוב", Style::default().fg(Color::Yellow))
        };

        let mut lines = vec![
            Line::from(verdict),
            Line::from(format!("מהירות: {} מילים לדקה", stats.wpm)),
            Line::from(format!("דיוק: {}%", stats.accuracy)),
            Line::from(format!(
                "הקשות: {} ({} שגיאות)",
                stats.total_keystrokes, stats.error_keystrokes
            )),
            Line::from(format!("נקודות ניסיון: {}", self.report.xp.total)),
        ];

        if !self.report.weak_keys.is_empty() {
            let weakest: String = self
                .report
                .weak_keys
                .iter()
                .take(3)
                .map(|wk| format!("{} ({}%)", wk.key, wk.accuracy))
                .collect::<Vec<_>>()
                .join("  ");
            lines.push(Line::from(format!("אותיות לחיזוק: {weakest}")));
        }

        Paragraph::new(lines)
            .block(Block::bordered().title(" סיכום "))
            .render(area, buf);
    }
}
