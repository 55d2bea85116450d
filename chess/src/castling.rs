//! Castling encoding.
//!
//! cozy-chess encodes castling as the king capturing its own rook (e1h1).
//! Everything outside this crate sees the king's destination square instead
//! (e1g1), which is what a player clicks.

use cozy_chess::{Board, File, Move, Piece, Square};

/// Returns true if `mv` is a castling move in cozy-chess encoding.
pub fn is_castle(board: &Board, mv: Move) -> bool {
    board.piece_on(mv.from) == Some(Piece::King)
        && board.piece_on(mv.to) == Some(Piece::Rook)
        && board.color_on(mv.to) == board.color_on(mv.from)
}

/// The square the king lands on, for display and click matching.
///
/// Non-castling moves are returned unchanged.
pub fn display_target(board: &Board, mv: Move) -> Square {
    if !is_castle(board, mv) {
        return mv.to;
    }

    let file = if mv.to.file() as usize > mv.from.file() as usize {
        File::G
    } else {
        File::C
    };
    Square::new(file, mv.from.rank())
}

/// True for a kingside castle (O-O), false for queenside. Only meaningful
/// when [`is_castle`] holds.
pub fn is_kingside(mv: Move) -> bool {
    mv.to.file() as usize > mv.from.file() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use cozy_chess::Rank;

    const CASTLE_READY: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

    #[test]
    fn test_kingside_castle_maps_to_g1() {
        let board: Board = CASTLE_READY.parse().unwrap();
        let mv = Move {
            from: Square::new(File::E, Rank::First),
            to: Square::new(File::H, Rank::First),
            promotion: None,
        };
        assert!(is_castle(&board, mv));
        assert!(is_kingside(mv));
        assert_eq!(
            display_target(&board, mv),
            Square::new(File::G, Rank::First)
        );
    }

    #[test]
    fn test_queenside_castle_maps_to_c1() {
        let board: Board = CASTLE_READY.parse().unwrap();
        let mv = Move {
            from: Square::new(File::E, Rank::First),
            to: Square::new(File::A, Rank::First),
            promotion: None,
        };
        assert!(is_castle(&board, mv));
        assert!(!is_kingside(mv));
        assert_eq!(
            display_target(&board, mv),
            Square::new(File::C, Rank::First)
        );
    }

    #[test]
    fn test_plain_king_move_unchanged() {
        let board: Board = CASTLE_READY.parse().unwrap();
        let mv = Move {
            from: Square::new(File::E, Rank::First),
            to: Square::new(File::F, Rank::First),
            promotion: None,
        };
        assert!(!is_castle(&board, mv));
        assert_eq!(display_target(&board, mv), mv.to);
    }
}
