use crate::render::{BoardView, Orientation, Shade, SquareView};
use crate::ui::theme::Theme;
use chess::{PieceColor, Square};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct BoardSize {
    square_width: u16,
    square_height: u16,
}

impl BoardSize {
    const COMPACT: Self = Self {
        square_width: 5,
        square_height: 3,
    };

    const SMALL: Self = Self {
        square_width: 9,
        square_height: 5,
    };

    const MEDIUM: Self = Self {
        square_width: 13,
        square_height: 7,
    };

    /// Calculate the best board size for the given area
    fn for_area(area: Rect) -> Self {
        // rank labels on the left, file labels below
        let available_width = area.width.saturating_sub(RANK_LABEL_WIDTH);
        let available_height = area.height.saturating_sub(FILE_LABEL_HEIGHT);

        [Self::MEDIUM, Self::SMALL]
            .into_iter()
            .find(|size| {
                available_width >= size.square_width * 8
                    && available_height >= size.square_height * 8
            })
            .unwrap_or(Self::COMPACT)
    }
}

const RANK_LABEL_WIDTH: u16 = 3;
const FILE_LABEL_HEIGHT: u16 = 1;

/// Where each square landed on screen during the last draw.
///
/// Computed from the same area the widget is drawn into, so mouse
/// coordinates can be mapped back to squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardGeometry {
    pub origin_x: u16,
    pub origin_y: u16,
    pub square_width: u16,
    pub square_height: u16,
    pub orientation: Orientation,
}

impl BoardGeometry {
    /// Geometry for a board widget occupying `area` (block borders included).
    pub fn for_area(area: Rect, orientation: Orientation) -> Self {
        let inner = board_block().inner(area);
        let size = BoardSize::for_area(inner);

        let total_width = size.square_width * 8 + RANK_LABEL_WIDTH;
        let total_height = size.square_height * 8 + FILE_LABEL_HEIGHT;

        // Center the board within the available area
        let offset_x = inner.width.saturating_sub(total_width) / 2;
        let offset_y = inner.height.saturating_sub(total_height) / 2;

        Self {
            origin_x: inner.x + offset_x + RANK_LABEL_WIDTH,
            origin_y: inner.y + offset_y,
            square_width: size.square_width,
            square_height: size.square_height,
            orientation,
        }
    }

    /// Screen rectangle of the square at board cell (`col`, `row`).
    pub fn cell_rect(&self, col: u8, row: u8) -> Rect {
        Rect::new(
            self.origin_x + col as u16 * self.square_width,
            self.origin_y + row as u16 * self.square_height,
            self.square_width,
            self.square_height,
        )
    }

    /// Square under terminal cell (`x`, `y`), if any.
    pub fn square_at(&self, x: u16, y: u16) -> Option<Square> {
        if x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = (x - self.origin_x) / self.square_width;
        let row = (y - self.origin_y) / self.square_height;
        if col > 7 || row > 7 {
            return None;
        }
        self.orientation.square_at(col as u8, row as u8)
    }
}

fn board_block() -> Block<'static> {
    Block::default()
        .title("♟ duochess ♟")
        .borders(Borders::ALL)
}

/// Draws a [`BoardView`]. Carries no state of its own.
pub struct BoardWidget<'a> {
    pub view: &'a BoardView,
    pub theme: &'a Theme,
}

impl<'a> BoardWidget<'a> {
    pub fn new(view: &'a BoardView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }
}

impl Widget for BoardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = board_block().border_style(Style::default().fg(self.theme.board_border));
        let inner = block.inner(area);
        block.render(area, buf);

        let geometry = BoardGeometry::for_area(area, self.view.orientation);
        let label_style = Style::default().fg(self.theme.board_label);

        // Draw rank labels on the left
        for (row, label) in self.view.rank_labels().iter().enumerate() {
            let y = geometry.origin_y
                + row as u16 * geometry.square_height
                + geometry.square_height / 2;
            let x = geometry.origin_x.saturating_sub(2);
            if y < inner.bottom() && x >= inner.x {
                buf.set_string(x, y, label.to_string(), label_style);
            }
        }

        // Draw file labels at the bottom
        let label_y = geometry.origin_y + 8 * geometry.square_height;
        for (col, label) in self.view.file_labels().iter().enumerate() {
            let x = geometry.origin_x
                + col as u16 * geometry.square_width
                + geometry.square_width / 2;
            if x < inner.right() && label_y < inner.bottom() {
                buf.set_string(x, label_y, label.to_string(), label_style);
            }
        }

        for row in 0..8u8 {
            for col in 0..8u8 {
                let Some(square) = self.view.at(col, row) else {
                    continue;
                };
                let rect = geometry.cell_rect(col, row).intersection(inner);
                if rect.is_empty() {
                    continue;
                }
                self.render_square(square, rect, buf);
            }
        }
    }
}

impl BoardWidget<'_> {
    fn render_square(&self, view: &SquareView, rect: Rect, buf: &mut Buffer) {
        let bg = self
            .theme
            .square_bg(view.shade == Shade::Light, view.selected, view.last_move);
        buf.set_style(rect, Style::default().bg(bg));

        if view.highlighted {
            draw_square_outline(buf, rect, self.theme.highlight_border);
        }

        let Some(image) = &view.image else {
            return;
        };

        let fg = match image.color {
            PieceColor::White => self.theme.white_piece,
            PieceColor::Black => self.theme.black_piece,
        };
        let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);

        let art_width = image
            .art
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16;
        let fits = image.art.len() as u16 <= rect.height && art_width <= rect.width;
        let lines: Vec<&str> = if fits {
            image.art.iter().map(String::as_str).collect()
        } else {
            vec![image.compact.as_str()]
        };

        // Render each line of piece art, centered
        let top = rect.y + (rect.height.saturating_sub(lines.len() as u16)) / 2;
        for (i, line) in lines.iter().enumerate() {
            let py = top + i as u16;
            if py >= rect.bottom() {
                break;
            }
            let line_width = line.chars().count() as u16;
            let px = rect.x + rect.width.saturating_sub(line_width) / 2;
            buf.set_stringn(px, py, line, rect.right().saturating_sub(px) as usize, style);
        }
    }
}

/// Outline a square; legal destinations get this instead of a fill so the
/// piece underneath stays readable.
fn draw_square_outline(buf: &mut Buffer, rect: Rect, color: Color) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;

    for x in rect.x..=right {
        let (top_symbol, bottom_symbol) = if x == rect.x {
            ("┌", "└")
        } else if x == right {
            ("┐", "┘")
        } else {
            ("─", "─")
        };
        buf[(x, rect.y)].set_symbol(top_symbol).set_style(style);
        buf[(x, bottom)].set_symbol(bottom_symbol).set_style(style);
    }

    for y in rect.y + 1..bottom {
        buf[(rect.x, y)].set_symbol("│").set_style(style);
        buf[(right, y)].set_symbol("│").set_style(style);
    }
}
