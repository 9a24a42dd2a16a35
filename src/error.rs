use std::io;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("play area {width}x{height} cannot hold a {size}x{size} food box")]
    AreaTooSmall { width: i32, height: i32, size: i32 },
    #[error("frame rate must be at least 1 fps")]
    ZeroFrameRate,
    #[error("food spawn rate must be at least 1 tick")]
    ZeroSpawnRate,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid game configuration")]
    Config(#[from] ConfigError),
    #[error("failed to write frame")]
    Render(#[source] io::Error),
    #[error("failed to switch terminal mode")]
    Terminal(#[source] io::Error),
    #[error("{0} loop panicked")]
    LoopPanicked(&'static str),
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
