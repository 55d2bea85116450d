//! Draw classification.
//!
//! cozy-chess reports stalemate and the fifty-move rule through
//! `Board::status`; insufficient material and repetition are decided here.

use cozy_chess::{Board, Piece};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl DrawReason {
    pub fn describe(self) -> &'static str {
        match self {
            Self::Stalemate => "stalemate",
            Self::InsufficientMaterial => "insufficient material",
            Self::ThreefoldRepetition => "threefold repetition",
            Self::FiftyMoveRule => "fifty-move rule",
        }
    }
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Neither side can deliver mate: bare kings, a single minor piece, or
/// bishops that all stand on one square colour.
pub fn insufficient_material(board: &Board) -> bool {
    let heavy = board.pieces(Piece::Pawn) | board.pieces(Piece::Rook) | board.pieces(Piece::Queen);
    if !heavy.is_empty() {
        return false;
    }

    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);
    if knights.len() + bishops.len() <= 1 {
        return true;
    }
    if !knights.is_empty() {
        return false;
    }

    let on_light = bishops.into_iter().filter(|&sq| is_light(sq)).count();
    on_light == 0 || on_light == bishops.len() as usize
}

/// Current position (last hash) has occurred at least three times.
pub fn is_threefold(hashes: &[u64]) -> bool {
    match hashes.last() {
        Some(current) => hashes.iter().filter(|&h| h == current).count() >= 3,
        None => false,
    }
}

fn is_light(sq: cozy_chess::Square) -> bool {
    (sq.file() as usize + sq.rank() as usize) % 2 == 1
}
