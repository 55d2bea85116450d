pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{run_app, App};
