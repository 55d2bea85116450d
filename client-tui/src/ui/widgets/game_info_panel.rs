use crate::state::Presentation;
use crate::status::Status;
use crate::ui::theme::Theme;
use chess::PieceColor;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct GameInfoPanel<'a> {
    pub presentation: &'a Presentation,
    pub theme: &'a Theme,
}

impl<'a> GameInfoPanel<'a> {
    pub fn new(presentation: &'a Presentation, theme: &'a Theme) -> Self {
        Self {
            presentation,
            theme,
        }
    }

    fn status_color(&self) -> ratatui::style::Color {
        match self.presentation.status {
            Status::Checkmate { .. } => self.theme.negative,
            Status::Draw { .. } => self.theme.muted,
            Status::Check { .. } => self.theme.warning,
            Status::ToMove { .. } => self.theme.positive,
        }
    }
}

impl Widget for GameInfoPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("♟ Game Info ♟")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let label = Style::default()
            .fg(self.theme.warning)
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![];

        lines.push(Line::from(vec![
            Span::styled("Status: ", label),
            Span::styled(
                self.presentation.status.to_string(),
                Style::default()
                    .fg(self.status_color())
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        // Turn indicator
        let side = self.presentation.side_to_move;
        lines.push(Line::from(vec![
            Span::styled("Turn: ", label),
            Span::styled(
                side.title(),
                Style::default()
                    .fg(match side {
                        PieceColor::White => self.theme.text_primary,
                        PieceColor::Black => self.theme.text_secondary,
                    })
                    .add_modifier(Modifier::BOLD),
            ),
        ]));

        if self.presentation.status.is_terminal() {
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "Game over: press r to reset",
                Style::default().fg(self.theme.muted),
            ));
        }

        if let Some(selected) = self.presentation.selection {
            lines.push(Line::raw(""));
            lines.push(Line::from(vec![
                Span::styled("Selected: ", label),
                Span::styled(selected.to_string(), label),
            ]));

            let legal = if self.presentation.highlights.is_empty() {
                "none".to_string()
            } else {
                self.presentation
                    .highlights
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            lines.push(Line::from(vec![
                Span::styled(
                    "Legal: ",
                    Style::default()
                        .fg(self.theme.positive)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(legal, Style::default().fg(self.theme.positive)),
            ]));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
