use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct ControlsPanel<'a> {
    pub input_buffer: &'a str,
    pub theme: &'a Theme,
}

impl<'a> ControlsPanel<'a> {
    pub fn new(input_buffer: &'a str, theme: &'a Theme) -> Self {
        Self {
            input_buffer,
            theme,
        }
    }
}

impl Widget for ControlsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title("⌨ Controls ⌨")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.panel_border));

        let inner = block.inner(area);
        block.render(area, buf);

        let key = |color| Style::default().fg(color).add_modifier(Modifier::BOLD);
        let mut lines = vec![];

        // Show input buffer if not empty
        if !self.input_buffer.is_empty() {
            lines.push(Line::from(vec![
                Span::styled("Input: ", key(self.theme.warning)),
                Span::styled(
                    format!("> {}", self.input_buffer),
                    key(self.theme.text_primary),
                ),
            ]));
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(vec![
            Span::styled("click ", key(self.theme.positive)),
            Span::raw("Select / Move"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("a1-h8 ", key(self.theme.positive)),
            Span::raw("Type a Square"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("u ", key(self.theme.positive)),
            Span::raw("Undo Move"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("r ", key(self.theme.positive)),
            Span::raw("Reset Game"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Esc ", key(self.theme.highlight_border)),
            Span::raw("Clear Input"),
        ]));
        lines.push(Line::from(vec![
            Span::styled("q/Ctrl+C ", key(self.theme.negative)),
            Span::raw("Quit"),
        ]));

        Paragraph::new(lines).render(inner, buf);
    }
}
