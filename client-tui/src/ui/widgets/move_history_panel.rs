use crate::ui::theme::Theme;
use chess::{MoveNumber, PieceColor};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Move list numbered from wherever the game started, so a position set up
/// with black to move opens with `12... e5`.
pub struct MoveHistoryPanel<'a> {
    pub history: &'a [String],
    pub start: MoveNumber,
    pub theme: &'a Theme,
}

impl<'a> MoveHistoryPanel<'a> {
    pub fn new(history: &'a [String], start: MoveNumber, theme: &'a Theme) -> Self {
        Self {
            history,
            start,
            theme,
        }
    }
}

impl Widget for MoveHistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♔ Move History ♕")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.history.is_empty() {
            Paragraph::new("No moves yet")
                .style(Style::default().fg(self.theme.muted))
                .render(inner, buf);
            return;
        }

        let number_style = Style::default().fg(self.theme.warning);
        let move_style = |white: bool| {
            Style::default()
                .fg(if white {
                    self.theme.text_primary
                } else {
                    self.theme.text_secondary
                })
                .add_modifier(Modifier::BOLD)
        };

        let mut number = self.start.number;
        let mut rest = self.history;
        let mut lines: Vec<Line> = Vec::new();

        // A black first move gets a line of its own
        if self.start.side == PieceColor::Black {
            if let Some((first, tail)) = rest.split_first() {
                lines.push(Line::from(vec![
                    Span::styled(format!("{number}... "), number_style),
                    Span::styled(first.clone(), move_style(false)),
                ]));
                number = number.saturating_add(1);
                rest = tail;
            }
        }

        for pair in rest.chunks(2) {
            let mut spans = vec![Span::styled(format!("{number}. "), number_style)];
            if let Some(white) = pair.first() {
                spans.push(Span::styled(white.clone(), move_style(true)));
            }
            if let Some(black) = pair.get(1) {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(black.clone(), move_style(false)));
            }
            lines.push(Line::from(spans));
            number = number.saturating_add(1);
        }

        // Keep the latest moves visible
        let overflow = (lines.len() as u16).saturating_sub(inner.height);
        Paragraph::new(lines)
            .scroll((overflow, 0))
            .render(inner, buf);
    }
}
