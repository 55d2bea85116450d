use crate::status::{derive_status, Status};
use chess::{BoardSnapshot, Game, MoveNumber, PieceColor, PieceKind, RulesEngine, Square};

/// Everything the renderer and side panels read.
///
/// Engine-derived fields (`board`, `side_to_move`, `status`, `history`,
/// `history_start`, `last_move`) are only ever written by
/// [`BoardController::refresh`].
#[derive(Debug, Clone, PartialEq)]
pub struct Presentation {
    /// Square of the piece the player has picked up
    pub selection: Option<Square>,
    /// Legal destinations of the selected piece
    pub highlights: Vec<Square>,
    pub board: BoardSnapshot,
    pub side_to_move: PieceColor,
    pub status: Status,
    /// Moves in SAN, oldest first
    pub history: Vec<String>,
    /// Numbering of the first history entry
    pub history_start: MoveNumber,
    pub last_move: Option<(Square, Square)>,
}

/// Which branch a click took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece of the side to move was picked up.
    Selected,
    /// Nothing selected and the square held no piece of the side to move.
    Ignored,
    /// The move was accepted by the engine.
    Moved { san: String },
    /// Move rejected, another friendly piece picked up instead.
    Reselected,
    /// Move rejected, selection dropped.
    Cancelled,
}

/// Translates square clicks into engine calls. Owns the only engine instance.
pub struct BoardController<E: RulesEngine = Game> {
    engine: E,
    presentation: Presentation,
}

impl<E: RulesEngine> BoardController<E> {
    pub fn new(engine: E) -> Self {
        let presentation = Presentation {
            selection: None,
            highlights: Vec::new(),
            board: engine.snapshot(),
            side_to_move: engine.side_to_move(),
            status: derive_status(&engine),
            history: engine.history(),
            history_start: engine.history_start(),
            last_move: engine.last_move(),
        };
        Self {
            engine,
            presentation,
        }
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn handle_square_click(&mut self, square: Square) -> ClickOutcome {
        let Some(selected) = self.presentation.selection else {
            return if self.try_select(square) {
                tracing::debug!(%square, "piece selected");
                ClickOutcome::Selected
            } else {
                tracing::debug!(%square, "click ignored");
                ClickOutcome::Ignored
            };
        };

        match self
            .engine
            .apply_move(selected, square, Some(PieceKind::Queen))
        {
            Ok(record) => {
                tracing::info!(
                    san = %record.san,
                    from = %record.from,
                    to = %record.to,
                    piece = record.piece.kind.name(),
                    captured = record.captured.map(PieceKind::name),
                    "move played"
                );
                self.clear_selection();
                self.refresh();
                ClickOutcome::Moved { san: record.san }
            }
            Err(err) => {
                tracing::debug!(%err, "move rejected");
                self.clear_selection();
                if square != selected && self.try_select(square) {
                    tracing::debug!(%square, "piece reselected");
                    ClickOutcome::Reselected
                } else {
                    ClickOutcome::Cancelled
                }
            }
        }
    }

    /// Back to the starting position.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.clear_selection();
        self.refresh();
        tracing::info!("game reset");
    }

    /// Take back the last move. Does nothing when no move has been played.
    pub fn undo(&mut self) {
        match self.engine.undo() {
            Ok(record) => tracing::info!(san = %record.san, "move undone"),
            Err(err) => tracing::debug!(%err, "undo ignored"),
        }
        self.clear_selection();
        self.refresh();
    }

    /// Select `square` if it holds a piece of the side to move. An empty
    /// highlight set is a valid selection (pinned or blocked piece).
    fn try_select(&mut self, square: Square) -> bool {
        let side = self.engine.side_to_move();
        match self.engine.piece_on(square) {
            Some(piece) if piece.color == side => {
                self.presentation.selection = Some(square);
                self.presentation.highlights = self.engine.legal_destinations(square);
                true
            }
            _ => false,
        }
    }

    fn clear_selection(&mut self) {
        self.presentation.selection = None;
        self.presentation.highlights.clear();
    }

    /// Recompute everything derived from the engine.
    fn refresh(&mut self) {
        self.presentation.board = self.engine.snapshot();
        self.presentation.side_to_move = self.engine.side_to_move();
        self.presentation.status = derive_status(&self.engine);
        self.presentation.history = self.engine.history();
        self.presentation.history_start = self.engine.history_start();
        self.presentation.last_move = self.engine.last_move();
    }
}

impl Default for BoardController<Game> {
    fn default() -> Self {
        Self::new(Game::new())
    }
}
