//! Gomoku console entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use gomoku::{AppConfig, Game, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,gomoku=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let game = match &cli.load {
        Some(path) => {
            info!(path = %path.display(), "Resuming saved game");
            Game::load(path)?
        }
        None => Game::new(*config.size())?,
    };
    let ai = config.opponent()?;

    let stdin = std::io::stdin();
    let mut session = Session::new(game, ai, stdin.lock(), std::io::stdout());
    session.run()
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)?;

    if let Some(size) = cli.size {
        info!(size, "Overriding board size");
        config = config.with_size(size);
    }
    if let Some(mode) = cli.mode {
        info!(?mode, "Overriding play mode");
        config = config.with_mode(mode);
    }
    config.validate()?;

    Ok(config)
}
