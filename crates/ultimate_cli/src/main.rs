//! uttt - ultimate tic-tac-toe in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ultimate_cli::{Cli, Command, Session, SessionConfig, simulate};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            human,
            ai_delay_ms,
            seed,
        } => {
            let base = match config {
                Some(path) => SessionConfig::from_file(path)?,
                None => SessionConfig::default(),
            };
            let config = base.with_overrides(mode, human, ai_delay_ms, seed, cli.log_level);
            init_tracing(config.log_level());

            info!(mode = %config.mode(), human = %config.human(), "Starting play");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let status = Session::new(config, stdin.lock(), stdout.lock()).run()?;
            info!(%status, "Goodbye");
            Ok(())
        }
        Command::Simulate { games, seed } => {
            init_tracing(cli.log_level.as_deref().unwrap_or("warn"));
            let stats = simulate(games, seed)?;
            println!("{}", stats);
            Ok(())
        }
    }
}

/// Logs to stderr so the board on stdout stays readable.
fn init_tracing(default_level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
