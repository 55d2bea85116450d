//! Configuration for the duochess terminal board.
//!
//! Every value has a compile-time default and can be overridden by an
//! environment variable; command-line flags override both.

use crate::pieces::{ManifestError, PieceTheme};
use crate::render::Orientation;
use crate::ui::theme::Theme;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Default piece set.
const DEFAULT_PIECES: &str = "glyphs";

/// Log directory used when no state directory can be found.
const FALLBACK_LOG_DIR: &str = "logs";

/// Local two-player chess in the terminal.
#[derive(Debug, Parser)]
#[command(name = "duochess", version, about)]
pub struct Cli {
    /// Built-in piece set (glyphs, letters, blocks) or path to a JSON manifest
    #[arg(long, env = "DUOCHESS_PIECES")]
    pub pieces: Option<String>,

    /// Board colours
    #[arg(long, value_enum, env = "DUOCHESS_THEME")]
    pub theme: Option<ThemeChoice>,

    /// Directory for the rolling log file
    #[arg(long, env = "DUOCHESS_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Start (and reset) from this position instead of the standard one
    #[arg(long)]
    pub fen: Option<String>,

    /// Draw the board with black at the bottom
    #[arg(long)]
    pub flip: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    #[default]
    Dark,
    Light,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub pieces: String,
    pub theme: ThemeChoice,
    pub log_dir: PathBuf,
    pub start_fen: Option<String>,
    pub orientation: Orientation,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            pieces: cli.pieces.unwrap_or_else(|| DEFAULT_PIECES.to_string()),
            theme: cli.theme.unwrap_or_default(),
            log_dir: cli.log_dir.unwrap_or_else(default_log_dir),
            start_fen: cli.fen,
            orientation: if cli.flip {
                Orientation::BlackBottom
            } else {
                Orientation::WhiteBottom
            },
        }
    }

    pub fn piece_theme(&self) -> Result<PieceTheme, ConfigError> {
        Ok(PieceTheme::from_setting(&self.pieces)?)
    }

    pub fn board_theme(&self) -> Theme {
        match self.theme {
            ThemeChoice::Dark => Theme::dark(),
            ThemeChoice::Light => Theme::light(),
        }
    }
}

/// Get the log directory.
///
/// Priority:
/// 1. `$XDG_STATE_HOME/duochess/logs` (or the platform state dir)
/// 2. `./logs` as fallback
pub fn default_log_dir() -> PathBuf {
    dirs::state_dir()
        .map(|dir| dir.join("duochess").join("logs"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_LOG_DIR))
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    Pieces(#[from] ManifestError),
}
