//! Read-only 8x8 view of a position, handed to the presentation layer.

use crate::types::{Piece, Square};

/// An 8x8 grid of optional pieces, taken from the engine after a mutation.
///
/// Snapshots never alias engine internals; comparing two of them compares
/// piece placement only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSnapshot {
    squares: [[Option<Piece>; 8]; 8],
}

impl BoardSnapshot {
    pub(crate) fn from_board(board: &cozy_chess::Board) -> Self {
        let mut squares = [[None; 8]; 8];
        for sq in Square::all() {
            let cozy_sq: cozy_chess::Square = sq.into();
            if let (Some(kind), Some(color)) = (board.piece_on(cozy_sq), board.color_on(cozy_sq)) {
                squares[sq.rank() as usize][sq.file() as usize] =
                    Some(Piece::new(kind.into(), color.into()));
            }
        }
        Self { squares }
    }

    /// Parse the placement field of a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, SnapshotError> {
        let placement = fen
            .split_whitespace()
            .next()
            .ok_or(SnapshotError::InvalidFen)?;

        let mut squares = [[None; 8]; 8];
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(SnapshotError::InvalidFen);
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_idx;
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                } else {
                    if file > 7 {
                        return Err(SnapshotError::InvalidFen);
                    }
                    let piece = Piece::from_fen_char(c).ok_or(SnapshotError::InvalidPiece(c))?;
                    squares[rank][file] = Some(piece);
                    file += 1;
                }
            }
            if file != 8 {
                return Err(SnapshotError::InvalidFen);
            }
        }

        Ok(Self { squares })
    }

    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Invalid FEN placement")]
    InvalidFen,
    #[error("Invalid piece character: {0}")]
    InvalidPiece(char),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fen::STANDARD_FEN;
    use crate::types::{PieceColor, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position() {
        let board = BoardSnapshot::from_fen(STANDARD_FEN).unwrap();
        assert_eq!(
            board.piece_on(sq("a1")),
            Some(Piece::new(PieceKind::Rook, PieceColor::White))
        );
        assert_eq!(
            board.piece_on(sq("e1")),
            Some(Piece::new(PieceKind::King, PieceColor::White))
        );
        assert_eq!(
            board.piece_on(sq("d8")),
            Some(Piece::new(PieceKind::Queen, PieceColor::Black))
        );
        assert_eq!(board.piece_on(sq("e4")), None);
    }

    #[test]
    fn test_matches_cozy_board() {
        let from_fen = BoardSnapshot::from_fen(STANDARD_FEN).unwrap();
        let from_board = BoardSnapshot::from_board(&cozy_chess::Board::default());
        assert_eq!(from_fen, from_board);
    }

    #[test]
    fn test_placement_only_fen() {
        let placement = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R";
        let board = BoardSnapshot::from_fen(placement).unwrap();
        assert_eq!(
            board.piece_on(sq("c6")),
            Some(Piece::new(PieceKind::Knight, PieceColor::Black))
        );
        assert_eq!(
            board.piece_on(sq("f3")),
            Some(Piece::new(PieceKind::Knight, PieceColor::White))
        );
        assert_eq!(board.piece_on(sq("g1")), None);
    }

    #[test]
    fn test_rejects_short_rank() {
        assert!(BoardSnapshot::from_fen("8/8/8/8/8/8/8/7 w - - 0 1").is_err());
        assert!(BoardSnapshot::from_fen("8/8/8/8/8/8/8/7x w - - 0 1").is_err());
    }
}
