//! Terminal front end for a local two-player chess game.
//!
//! The [`state::BoardController`] turns square clicks into calls on a
//! [`chess::RulesEngine`]; [`render`] lays the result out for drawing and the
//! [`ui`] module puts it on screen.

pub mod config;
pub mod pieces;
pub mod prelude;
pub mod render;
pub mod state;
pub mod status;
pub mod ui;

pub use state::{BoardController, ClickOutcome, Presentation};
pub use status::{derive_status, Status};
