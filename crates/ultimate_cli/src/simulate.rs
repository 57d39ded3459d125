//! Headless random-vs-random games.

use derive_new::new;
use std::fmt;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Game, GameStatus, IllegalMove, Mark, RandomChooser};

/// Outcome of one simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct GameRecord {
    /// Final status.
    pub status: GameStatus,
    /// Moves played.
    pub moves: usize,
}

/// Totals over a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
    /// Moves across all games.
    pub total_moves: usize,
}

impl SimulationStats {
    /// Adds one finished game.
    pub fn record(&mut self, record: GameRecord) {
        match record.status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
        self.total_moves += record.moves;
    }

    /// Number of games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let games = self.games().max(1) as f64;
        writeln!(f, "Games:     {}", self.games())?;
        writeln!(f, "X wins:    {} ({:.1}%)", self.x_wins, 100.0 * self.x_wins as f64 / games)?;
        writeln!(f, "O wins:    {} ({:.1}%)", self.o_wins, 100.0 * self.o_wins as f64 / games)?;
        writeln!(f, "Draws:     {} ({:.1}%)", self.draws, 100.0 * self.draws as f64 / games)?;
        write!(f, "Avg moves: {:.1}", self.total_moves as f64 / games)
    }
}

/// Plays one game between two random choosers.
pub fn play_random_game(
    x: &mut RandomChooser,
    o: &mut RandomChooser,
) -> Result<GameRecord, IllegalMove> {
    let mut game = Game::new();
    let status = game.play_out(x, o)?;
    Ok(GameRecord::new(status, game.state().history().len()))
}

/// Plays `games` random games.
///
/// With a seed, game `i` uses seeds `seed + 2i` for X and `seed + 2i + 1`
/// for O, so a batch is reproducible.
#[instrument]
pub fn simulate(games: u32, seed: Option<u64>) -> Result<SimulationStats, IllegalMove> {
    let mut stats = SimulationStats::default();
    for i in 0..u64::from(games) {
        let (mut x, mut o) = match seed {
            Some(seed) => (
                RandomChooser::seeded(seed.wrapping_add(2 * i)),
                RandomChooser::seeded(seed.wrapping_add(2 * i + 1)),
            ),
            None => (RandomChooser::new(), RandomChooser::new()),
        };
        let record = play_random_game(&mut x, &mut o)?;
        debug!(game = i, status = %record.status, moves = record.moves, "Game finished");
        stats.record(record);
    }
    info!(
        x_wins = stats.x_wins,
        o_wins = stats.o_wins,
        draws = stats.draws,
        "Simulation complete"
    );
    Ok(stats)
}
