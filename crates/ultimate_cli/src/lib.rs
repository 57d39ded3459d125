//! Terminal front end for the ultimate tic-tac-toe engine.
//!
//! - [`cli`]: command-line arguments
//! - [`config`]: TOML session settings with command-line overrides
//! - [`input`]: prompt parsing
//! - [`session`]: the interactive loop
//! - [`simulate`]: headless random-vs-random batches

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod session;
pub mod simulate;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayMode, SessionConfig};
pub use input::{Input, InputError, parse_input};
pub use session::{Session, banner};
pub use simulate::{GameRecord, SimulationStats, simulate};
