use crate::castling;
use crate::draw::{self, DrawReason};
use crate::engine::{MoveNumber, RulesEngine};
use crate::fen::{self, FenError};
use crate::san;
use crate::snapshot::BoardSnapshot;
use crate::types::{Piece, PieceColor, PieceKind, Square};
use cozy_chess::{Board, GameStatus, Move};

/// Main game state wrapper around cozy-chess Board
#[derive(Debug, Clone)]
pub struct Game {
    position: Board,
    start: Board,
    history: Vec<MoveRecord>,
    /// Position hashes since the start position, current position last.
    hashes: Vec<u64>,
}

/// A move that was played, as the presentation layer sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    /// Destination as clicked; the king's square for castling.
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub san: String,
    pub fen_after: String,
    mv: Move,
}

impl Game {
    /// Create a new game from the standard starting position
    pub fn new() -> Self {
        Self::from_board(Board::default())
    }

    /// Create a game from a FEN string. [`RulesEngine::reset`] returns here.
    pub fn from_fen(fen: &str) -> Result<Self, GameError> {
        let position = fen::parse_fen(fen)?;
        Ok(Self::from_board(position))
    }

    fn from_board(position: Board) -> Self {
        Self {
            hashes: vec![position.hash()],
            start: position.clone(),
            position,
            history: Vec::new(),
        }
    }

    /// Export position to FEN string
    pub fn to_fen(&self) -> String {
        fen::format_fen(&self.position)
    }

    /// Get all legal moves for the current position
    fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        self.position.generate_moves(|mvs| {
            moves.extend(mvs);
            false
        });
        moves
    }

    fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        let from: cozy_chess::Square = from.into();
        let mut moves = Vec::new();
        self.position.generate_moves_for(from.bitboard(), |mvs| {
            moves.extend(mvs);
            false
        });
        moves
    }

    /// Pick the cozy-chess move matching a click from `from` to `to`.
    fn resolve_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, GameError> {
        let candidates: Vec<Move> = self
            .legal_moves_from(from)
            .into_iter()
            .filter(|&mv| Square::from(castling::display_target(&self.position, mv)) == to)
            .collect();

        match candidates.as_slice() {
            [] => Err(GameError::IllegalMove { from, to }),
            [only] if only.promotion.is_none() => Ok(*only),
            _ => {
                let wanted: cozy_chess::Piece = promotion.unwrap_or(PieceKind::Queen).into();
                candidates
                    .iter()
                    .copied()
                    .find(|mv| mv.promotion == Some(wanted))
                    .ok_or(GameError::IllegalMove { from, to })
            }
        }
    }

    /// Replay `moves` from the start position, returning the resulting board
    /// and the position hashes along the way.
    fn replay(&self, moves: &[MoveRecord]) -> Result<(Board, Vec<u64>), GameError> {
        let mut board = self.start.clone();
        let mut hashes = vec![board.hash()];

        for entry in moves {
            if !board.is_legal(entry.mv) {
                return Err(GameError::IllegalMove {
                    from: entry.from,
                    to: entry.to,
                });
            }
            board.play_unchecked(entry.mv);
            hashes.push(board.hash());
        }

        Ok((board, hashes))
    }
}

impl RulesEngine for Game {
    fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::from_board(&self.position)
    }

    fn side_to_move(&self) -> PieceColor {
        self.position.side_to_move().into()
    }

    fn piece_on(&self, square: Square) -> Option<Piece> {
        let sq: cozy_chess::Square = square.into();
        let kind = self.position.piece_on(sq)?;
        let color = self.position.color_on(sq)?;
        Some(Piece::new(kind.into(), color.into()))
    }

    fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let mut destinations: Vec<Square> = self
            .legal_moves_from(from)
            .into_iter()
            .map(|mv| Square::from(castling::display_target(&self.position, mv)))
            .collect();
        destinations.sort();
        destinations.dedup();
        destinations
    }

    fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveRecord, GameError> {
        let mv = self.resolve_move(from, to, promotion)?;

        let moving = self
            .piece_on(from)
            .ok_or(GameError::IllegalMove { from, to })?;
        let captured = if castling::is_castle(&self.position, mv) {
            None
        } else {
            match self.position.piece_on(mv.to) {
                Some(piece) => Some(piece.into()),
                // en passant leaves the destination empty
                None if moving.kind == PieceKind::Pawn && from.file() != to.file() => {
                    Some(PieceKind::Pawn)
                }
                None => None,
            }
        };

        // Generate SAN notation before making the move
        let san = san::format_san(&self.position, mv);

        self.position.play_unchecked(mv);
        self.hashes.push(self.position.hash());

        let entry = MoveRecord {
            from,
            to,
            piece: moving,
            captured,
            promotion: mv.promotion.map(PieceKind::from),
            san,
            fen_after: self.to_fen(),
            mv,
        };
        tracing::debug!(san = %entry.san, fen = %entry.fen_after, "move applied");

        self.history.push(entry.clone());
        Ok(entry)
    }

    fn undo(&mut self) -> Result<MoveRecord, GameError> {
        let (last, earlier) = self
            .history
            .split_last()
            .ok_or(GameError::NothingToUndo)?;
        let (position, hashes) = self.replay(earlier)?;
        let entry = last.clone();

        // commit only once the replay succeeded
        self.history.pop();
        self.position = position;
        self.hashes = hashes;

        tracing::debug!(san = %entry.san, "move taken back");
        Ok(entry)
    }

    fn reset(&mut self) {
        self.position = self.start.clone();
        self.history.clear();
        self.hashes = vec![self.position.hash()];
    }

    fn is_checkmate(&self) -> bool {
        matches!(self.position.status(), GameStatus::Won)
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if self.is_checkmate() {
            return None;
        }
        if self.legal_moves().is_empty() {
            return Some(DrawReason::Stalemate);
        }
        if draw::insufficient_material(&self.position) {
            return Some(DrawReason::InsufficientMaterial);
        }
        if draw::is_threefold(&self.hashes) {
            return Some(DrawReason::ThreefoldRepetition);
        }
        if matches!(self.position.status(), GameStatus::Drawn) {
            return Some(DrawReason::FiftyMoveRule);
        }
        None
    }

    fn is_check(&self) -> bool {
        !self.position.checkers().is_empty()
    }

    fn history(&self) -> Vec<String> {
        self.history.iter().map(|entry| entry.san.clone()).collect()
    }

    fn last_move(&self) -> Option<(Square, Square)> {
        self.history.last().map(|entry| (entry.from, entry.to))
    }

    fn history_start(&self) -> MoveNumber {
        MoveNumber {
            number: self.start.fullmove_number(),
            side: self.start.side_to_move().into(),
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("Illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("FEN parse error: {0}")]
    Fen(#[from] FenError),
}
