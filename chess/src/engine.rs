//! The contract the presentation layer relies on.

use crate::draw::DrawReason;
use crate::game::{GameError, MoveRecord};
use crate::snapshot::BoardSnapshot;
use crate::types::{Piece, PieceColor, PieceKind, Square};

/// Owner of the canonical game state.
///
/// Implemented by [`crate::Game`]; the interaction layer is generic over it so
/// it never depends on a concrete rules library.
pub trait RulesEngine {
    /// Piece placement of the current position.
    fn snapshot(&self) -> BoardSnapshot;

    fn side_to_move(&self) -> PieceColor;

    fn piece_on(&self, square: Square) -> Option<Piece>;

    /// Legal destinations for the piece on `from`, check-safety included.
    /// Empty when the square is empty, holds an opponent piece, or the piece
    /// cannot move.
    fn legal_destinations(&self, from: Square) -> Vec<Square>;

    /// Play `from` -> `to`. `promotion` defaults to a queen for promoting pawn
    /// moves and is ignored otherwise.
    fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, GameError>;

    /// Take back the last move.
    fn undo(&mut self) -> Result<MoveRecord, GameError>;

    /// Return to the starting position and clear the history.
    fn reset(&mut self);

    fn is_checkmate(&self) -> bool;

    fn draw_reason(&self) -> Option<DrawReason>;

    fn is_draw(&self) -> bool {
        self.draw_reason().is_some()
    }

    fn is_check(&self) -> bool;

    /// Moves played so far in SAN, oldest first.
    fn history(&self) -> Vec<String>;

    /// Origin and destination of the most recent move, if any.
    fn last_move(&self) -> Option<(Square, Square)>;

    /// Move number and side of the first entry in [`RulesEngine::history`].
    fn history_start(&self) -> MoveNumber;
}

/// A full-move number together with the side making that move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveNumber {
    pub number: u16,
    pub side: PieceColor,
}

impl Default for MoveNumber {
    fn default() -> Self {
        Self {
            number: 1,
            side: PieceColor::White,
        }
    }
}
