use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Widget};

use crate::game::rain::WordRain;

/// The word-rain playfield: falling words mapped from field percentages to
/// terminal cells, with the score HUD in the top border and the input buffer
/// in the bottom border.
pub struct RainField<'a> {
    game: &'a WordRain,
}

impl<'a> RainField<'a> {
    pub fn new(game: &'a WordRain) -> Self {
        Self { game }
    }
}

impl Widget for RainField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hud = format!(
            " נקודות {}  רצף {}  חיים {}/{} ",
            self.game.score, self.game.combo, self.game.lives, self.game.max_lives
        );
        let block = Block::bordered()
            .title(hud)
            .title_bottom(format!(" {} ", self.game.input));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        for word in &self.game.words {
            let word_width = word.word.chars().count() as u16;
            let max_col = inner.width.saturating_sub(word_width);
            let col = inner.x + (word.x / 100.0 * max_col as f64) as u16;
            let row = inner.y + (word.y / 100.0 * (inner.height - 1) as f64) as u16;

            let style = if word.active {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };
            buf.set_string(col, row, &word.word, style);
        }
    }
}
