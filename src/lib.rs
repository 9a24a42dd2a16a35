//! Terminal snake: a fixed-rate simulation and render loop plus a blocking
//! input loop, sharing one game state behind a single lock.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod geometry;
pub mod input;
pub mod map;
pub mod snake;
pub mod term;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{Game, GameState, RunSummary};
pub use input::{run_input_loop, Command, InputExit};
pub use snake::{Direction, Snake};
