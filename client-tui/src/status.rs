//! Game status derived from the engine's terminal-state queries.

use chess::{DrawReason, PieceColor, RulesEngine};
use std::fmt;

/// What the status line shows. Never stored on its own; recomputed after
/// every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Checkmate { winner: PieceColor },
    Draw { reason: Option<DrawReason> },
    Check { to_move: PieceColor },
    ToMove { side: PieceColor },
}

impl Status {
    /// True once no further moves are expected.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Checkmate { .. } | Self::Draw { .. })
    }
}

/// Checkmate is checked before check, and draw before side to move: a drawn
/// position still nominally has a side to move.
pub fn derive_status<E: RulesEngine + ?Sized>(engine: &E) -> Status {
    let to_move = engine.side_to_move();

    if engine.is_checkmate() {
        return Status::Checkmate {
            winner: to_move.opposite(),
        };
    }
    if engine.is_draw() {
        return Status::Draw {
            reason: engine.draw_reason(),
        };
    }
    if engine.is_check() {
        return Status::Check { to_move };
    }
    Status::ToMove { side: to_move }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkmate { winner } => write!(f, "Checkmate: {} wins", winner.title()),
            Self::Draw { reason: Some(reason) } => write!(f, "Draw by {reason}"),
            Self::Draw { reason: None } => f.write_str("Draw"),
            Self::Check { to_move } => write!(f, "{} to move (check)", to_move.title()),
            Self::ToMove { side } => write!(f, "{} to move", side.title()),
        }
    }
}
