//! Interactive game session over line-based input and output.

use crate::config::{PlayMode, SessionConfig};
use crate::input::{HELP, Input, legend, parse_input};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{Game, GameState, GameStatus, Mark, MoveChooser, RandomChooser};

/// Runs one terminal session: renders the board, reads moves, and lets the
/// computer answer in single-player mode.
pub struct Session<R, W> {
    config: SessionConfig,
    game: Game,
    opponent: RandomChooser,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        let opponent = match config.seed() {
            Some(seed) => RandomChooser::seeded(*seed),
            None => RandomChooser::new(),
        }
        .named("Computer");
        Self {
            config,
            game: Game::new(),
            opponent,
            input,
            output,
        }
    }

    /// Returns the game in progress.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays until the player quits or input runs out.
    ///
    /// Returns the status of the game on the board at exit.
    #[instrument(skip(self), fields(mode = %self.config.mode()))]
    pub fn run(&mut self) -> Result<GameStatus> {
        info!("Starting session");
        writeln!(self.output, "{}", HELP)?;
        self.render()?;

        loop {
            if self.is_computer_turn() {
                self.computer_turn()?;
                continue;
            }

            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }

            match parse_input(&line) {
                Ok(Input::Play(mv)) => match self.game.make_move(mv) {
                    Ok(_) => self.render()?,
                    Err(e) => {
                        debug!(error = %e, "Rejected move");
                        writeln!(self.output, "{}", e)?;
                    }
                },
                Ok(Input::Moves) => self.list_moves()?,
                Ok(Input::Reset) => {
                    self.game.reset();
                    writeln!(self.output, "New game.")?;
                    self.render()?;
                }
                Ok(Input::Help) => writeln!(self.output, "{}\n{}", HELP, legend())?,
                Ok(Input::Quit) => break,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }

        info!(status = %self.game.status(), "Session ended");
        Ok(self.game.status())
    }

    fn is_computer_turn(&self) -> bool {
        !self.game.state().is_over()
            && computer_mark(&self.config) == Some(self.game.state().current_player())
    }

    fn computer_turn(&mut self) -> Result<()> {
        let delay = *self.config.ai_delay_ms();
        if delay > 0 {
            std::thread::sleep(Duration::from_millis(delay));
        }
        let player = self.game.state().current_player();
        match self.game.play_turn(&mut self.opponent)? {
            Some(mv) => {
                writeln!(self.output, "{} ({}) plays {}", self.opponent.name(), player, mv)?;
                self.render()
            }
            None => {
                warn!("Computer found no move in a live game");
                anyhow::bail!("computer found no move while the game is in progress")
            }
        }
    }

    fn list_moves(&mut self) -> Result<()> {
        let moves = self.game.legal_moves();
        if moves.is_empty() {
            writeln!(self.output, "No legal moves.")?;
            return Ok(());
        }
        let listed: Vec<String> = moves
            .iter()
            .map(|mv| {
                let (b, c) = mv.to_indices();
                format!("{b}{c}")
            })
            .collect();
        writeln!(self.output, "{}", listed.join(" "))?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.output)?;
        write!(self.output, "{}", self.game.state())?;
        writeln!(self.output, "{}", banner(self.game.state()))?;
        Ok(())
    }
}

/// One-line summary of whose turn it is, or how the game ended.
pub fn banner(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(mark) => format!("Player {mark} wins! (type reset to play again)"),
        GameStatus::Draw => "It's a draw! (type reset to play again)".to_string(),
        GameStatus::InProgress => {
            let target = match state.active_board() {
                Some(board) if state.board(board).is_open() => {
                    format!("board {} ({})", board.to_u8(), board)
                }
                _ => "any open board".to_string(),
            };
            format!("Player {} to move in {}", state.current_player(), target)
        }
    }
}

/// Mark the computer plays for this config, if any.
pub fn computer_mark(config: &SessionConfig) -> Option<Mark> {
    (*config.mode() == PlayMode::Single).then(|| config.human().opponent())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultimate_tictactoe::{Position, apply_move, new_game};

    #[test]
    fn test_banner_names_target_board() {
        let state = new_game();
        assert_eq!(banner(&state), "Player X to move in any open board");

        let state = apply_move(&state, 4, 2).unwrap();
        assert_eq!(
            banner(&state),
            format!("Player O to move in board 2 ({})", Position::TopRight)
        );
    }

    #[test]
    fn test_computer_mark() {
        let single = SessionConfig::default();
        assert_eq!(computer_mark(&single), Some(Mark::O));

        let multi = SessionConfig::default().with_overrides(
            Some(PlayMode::Multi),
            None,
            None,
            None,
            None,
        );
        assert_eq!(computer_mark(&multi), None);
    }
}
