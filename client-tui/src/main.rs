use anyhow::Context;
use chess::Game;
use clap::Parser;
use duochess::config::{Cli, Config};
use duochess::state::BoardController;
use duochess::ui;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    let config = Config::from_cli(Cli::parse());

    // The terminal belongs to the TUI, so logs go to a file
    std::fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("failed to create log directory {}", config.log_dir.display()))?;
    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "duochess");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!(?config, "duochess starting up");

    let game = match &config.start_fen {
        Some(fen) => Game::from_fen(fen).with_context(|| format!("invalid --fen {fen:?}"))?,
        None => Game::new(),
    };

    ui::run_app(BoardController::new(game), &config)?;

    tracing::info!("duochess shutting down");
    Ok(())
}
