//! Command-line interface for uttt.

use crate::config::PlayMode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ultimate_tictactoe::Mark;

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "uttt")]
#[command(about = "Play ultimate tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long, global = true, env = "UTTT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a session config file (TOML)
        #[arg(short, long, env = "UTTT_CONFIG")]
        config: Option<PathBuf>,

        /// Single player against the computer, or two players sharing the terminal
        #[arg(short, long, value_enum)]
        mode: Option<PlayMode>,

        /// Mark the human plays in single-player mode
        #[arg(long, value_parser = parse_mark)]
        human: Option<Mark>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long, env = "UTTT_AI_DELAY_MS")]
        ai_delay_ms: Option<u64>,

        /// Seed for the computer opponent
        #[arg(long, env = "UTTT_SEED")]
        seed: Option<u64>,
    },

    /// Play random-vs-random games and report the results
    Simulate {
        /// Number of games
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,

        /// Base seed; omit for fresh randomness
        #[arg(long, env = "UTTT_SEED")]
        seed: Option<u64>,
    },
}

/// Parses `x` or `o` (any case) into a mark.
pub fn parse_mark(s: &str) -> Result<Mark, String> {
    match s.trim().to_ascii_lowercase().as_str() {
        "x" => Ok(Mark::X),
        "o" => Ok(Mark::O),
        other => Err(format!("expected X or O, got {other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "uttt", "play", "--mode", "multi", "--human", "o", "--ai-delay-ms", "0",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                mode,
                human,
                ai_delay_ms,
                ..
            } => {
                assert_eq!(mode, Some(PlayMode::Multi));
                assert_eq!(human, Some(Mark::O));
                assert_eq!(ai_delay_ms, Some(0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::try_parse_from(["uttt", "simulate", "--seed", "3"]).unwrap();
        match cli.command {
            Command::Simulate { games, seed } => {
                assert_eq!(games, 100);
                assert_eq!(seed, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_mark_rejects_junk() {
        assert_eq!(parse_mark(" X "), Ok(Mark::X));
        assert!(parse_mark("z").is_err());
    }
}
