//! Standard Algebraic Notation for moves played through [`crate::Game`].

use crate::castling;
use crate::types::{PieceKind, Square};
use cozy_chess::{Board, GameStatus, Move, Piece};

/// Format a legal move as SAN ("e4", "Nbd2", "exd6", "O-O", "e8=Q+", "Qh7#").
///
/// `mv` must be legal in `board` and use cozy-chess castling encoding.
pub fn format_san(board: &Board, mv: Move) -> String {
    let Some(piece) = board.piece_on(mv.from) else {
        return format!("{}{}", Square::from(mv.from), Square::from(mv.to));
    };

    let mut san = if castling::is_castle(board, mv) {
        if castling::is_kingside(mv) {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        }
    } else {
        move_body(board, mv, piece)
    };

    let mut after = board.clone();
    after.play_unchecked(mv);
    if !after.checkers().is_empty() {
        san.push(if matches!(after.status(), GameStatus::Won) {
            '#'
        } else {
            '+'
        });
    }

    san
}

fn move_body(board: &Board, mv: Move, piece: Piece) -> String {
    let from = Square::from(mv.from);
    let to = Square::from(mv.to);
    let is_capture = board.color_on(mv.to).is_some()
        || (piece == Piece::Pawn && mv.from.file() != mv.to.file());

    let mut san = String::new();

    if piece == Piece::Pawn {
        if is_capture {
            san.push(from.file_char());
        }
    } else {
        san.push(PieceKind::from(piece).to_char_upper());
        san.push_str(&disambiguation(board, mv, piece));
    }

    if is_capture {
        san.push('x');
    }
    san.push_str(&to.to_string());

    if let Some(promo) = mv.promotion {
        san.push('=');
        san.push(PieceKind::from(promo).to_char_upper());
    }

    san
}

/// File, rank, or both, when another piece of the same kind can reach the
/// same square.
fn disambiguation(board: &Board, mv: Move, piece: Piece) -> String {
    let mut rivals = Vec::new();
    board.generate_moves(|moves| {
        if moves.piece == piece && moves.from != mv.from && moves.to.has(mv.to) {
            rivals.push(moves.from);
        }
        false
    });

    if rivals.is_empty() {
        return String::new();
    }

    let from = Square::from(mv.from);
    let shares_file = rivals.iter().any(|sq| sq.file() == mv.from.file());
    let shares_rank = rivals.iter().any(|sq| sq.rank() == mv.from.rank());

    if !shares_file {
        from.file_char().to_string()
    } else if !shares_rank {
        from.rank_char().to_string()
    } else {
        from.to_string()
    }
}
