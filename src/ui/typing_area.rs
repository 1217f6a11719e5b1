use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::state::TypingSession;

/// Target line for the practice screen. Everything before the cursor was
/// typed correctly (the cursor only advances on correct keystrokes); the
/// cursor cell turns red after a miss to signal "type this one again".
pub struct TypingArea<'a> {
    session: &'a TypingSession,
    title: &'a str,
}

impl<'a> TypingArea<'a> {
    pub fn new(session: &'a TypingSession, title: &'a str) -> Self {
        Self { session, title }
    }
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let last_was_miss = self
            .session
            .keystrokes
            .last()
            .is_some_and(|ks| !ks.is_correct);

        let mut spans: Vec<Span> = Vec::with_capacity(self.session.text.len());
        for (idx, &ch) in self.session.text.iter().enumerate() {
            let display = if ch == ' ' { '\u{00b7}' } else { ch };
            let style = if idx < self.session.current_index {
                Style::default().fg(Color::Green)
            } else if idx == self.session.current_index {
                if last_was_miss {
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Red)
                        .add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::Black).bg(Color::White)
                }
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(display.to_string(), style));
        }

        let block = Block::bordered().title(format!(" {} ", self.title));
        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
