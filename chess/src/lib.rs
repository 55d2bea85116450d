//! Rules engine adapter for duochess.
//!
//! All move legality, check and mate detection is delegated to `cozy-chess`.
//! This crate wraps it behind [`RulesEngine`] and exposes project-owned value
//! types so callers never touch cozy-chess directly.

pub mod castling;
pub mod draw;
pub mod engine;
pub mod fen;
pub mod game;
pub mod san;
pub mod snapshot;
pub mod types;

pub use draw::DrawReason;
pub use engine::{MoveNumber, RulesEngine};
pub use fen::{FenError, STANDARD_FEN};
pub use game::{Game, GameError, MoveRecord};
pub use snapshot::{BoardSnapshot, SnapshotError};
pub use types::{Piece, PieceColor, PieceKind, Square, SquareParseError};
