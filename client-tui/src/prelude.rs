// Re-export the types most callers need
pub use crate::config::{Cli, Config};
pub use crate::pieces::{ImageResolver, PieceImage, PieceSet, PieceTheme};
pub use crate::render::{render_board, render_presentation, BoardView, Orientation, SquareView};
pub use crate::state::{BoardController, ClickOutcome, Presentation};
pub use crate::status::{derive_status, Status};
pub use chess::{Game, PieceColor, PieceKind, RulesEngine, Square};
