//! Pure mapping from presentation state to a drawable board layout.
//!
//! Nothing here validates moves or mutates state; highlights only change how a
//! square looks, never whether it can be clicked.

use crate::pieces::{ImageResolver, PieceImage};
use crate::state::Presentation;
use chess::{BoardSnapshot, Square};

/// Which side is drawn at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    WhiteBottom,
    BlackBottom,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Self::WhiteBottom => Self::BlackBottom,
            Self::BlackBottom => Self::WhiteBottom,
        }
    }

    /// Square shown at screen cell (`col`, `row`), row 0 at the top.
    pub fn square_at(self, col: u8, row: u8) -> Option<Square> {
        if col > 7 || row > 7 {
            return None;
        }
        match self {
            Self::WhiteBottom => Square::new(col, 7 - row),
            Self::BlackBottom => Square::new(7 - col, row),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// One square, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub shade: Shade,
    /// Legal destination of the current selection (border styling).
    pub highlighted: bool,
    /// The selected square itself (background marker).
    pub selected: bool,
    /// Part of the last move played.
    pub last_move: bool,
    /// `None` for an empty square or an image that failed to resolve.
    pub image: Option<PieceImage>,
}

/// The 64 squares in screen order: top row first, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub orientation: Orientation,
    pub squares: Vec<SquareView>,
}

impl BoardView {
    /// View at screen cell (`col`, `row`).
    pub fn at(&self, col: u8, row: u8) -> Option<&SquareView> {
        if col > 7 || row > 7 {
            return None;
        }
        self.squares.get(row as usize * 8 + col as usize)
    }

    pub fn get(&self, square: Square) -> Option<&SquareView> {
        self.squares.iter().find(|view| view.square == square)
    }

    /// File letters left to right as drawn.
    pub fn file_labels(&self) -> [char; 8] {
        std::array::from_fn(|col| {
            self.orientation
                .square_at(col as u8, 0)
                .map_or('?', |sq| sq.file_char())
        })
    }

    /// Rank digits top to bottom as drawn.
    pub fn rank_labels(&self) -> [char; 8] {
        std::array::from_fn(|row| {
            self.orientation
                .square_at(0, row as u8)
                .map_or('?', |sq| sq.rank_char())
        })
    }
}

/// Lay out the board for drawing.
pub fn render_board(
    snapshot: &BoardSnapshot,
    selection: Option<Square>,
    highlights: &[Square],
    last_move: Option<(Square, Square)>,
    resolver: &dyn ImageResolver,
    orientation: Orientation,
) -> BoardView {
    let mut squares = Vec::with_capacity(64);
    for row in 0..8u8 {
        for col in 0..8u8 {
            let Some(square) = orientation.square_at(col, row) else {
                continue;
            };
            let image = snapshot
                .piece_on(square)
                .and_then(|piece| resolver.resolve(piece.kind, piece.color));

            squares.push(SquareView {
                square,
                shade: if square.is_light() {
                    Shade::Light
                } else {
                    Shade::Dark
                },
                highlighted: highlights.contains(&square),
                selected: selection == Some(square),
                last_move: last_move.is_some_and(|(from, to)| from == square || to == square),
                image,
            });
        }
    }

    BoardView {
        orientation,
        squares,
    }
}

/// [`render_board`] straight from the controller's presentation state.
pub fn render_presentation(
    presentation: &Presentation,
    resolver: &dyn ImageResolver,
    orientation: Orientation,
) -> BoardView {
    render_board(
        &presentation.board,
        presentation.selection,
        &presentation.highlights,
        presentation.last_move,
        resolver,
        orientation,
    )
}
