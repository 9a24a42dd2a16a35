use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;

use anyhow::{Context, Result};
use colored::Colorize;
use termsnake::term::{RawMode, STDIN_FD};
use termsnake::{run_input_loop, Game, GameConfig, GameError, InputExit};
use tracing::info;

fn main() -> ExitCode {
    init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn run() -> Result<()> {
    let game = Arc::new(Game::new(GameConfig::default()).context("failed to set up the game")?);
    info!(config = ?game.config(), "starting game");

    let render = {
        let game = Arc::clone(&game);
        thread::Builder::new()
            .name("render".into())
            .spawn(move || game.run_render_loop(&mut rand::rng(), &mut io::stdout().lock()))
            .context("failed to spawn render thread")?
    };
    let reader = {
        let game = Arc::clone(&game);
        thread::Builder::new()
            .name("input".into())
            .spawn(move || read_keys(&game))
            .context("failed to spawn input thread")?
    };

    // both are joined before anything is reported, so the terminal mode is
    // restored before the process exits; a render failure is already logged
    // by the loop itself while the input thread still waits for `q`
    let rendered = render.join().map_err(|_| GameError::LoopPanicked("render"));
    let read = reader.join().map_err(|_| GameError::LoopPanicked("input"));

    let exit = read?.context("input loop failed")?;
    let summary = rendered?.context("render loop failed")?;
    info!(
        ?exit,
        ticks = summary.ticks,
        snake_length = summary.snake_length,
        "game over"
    );
    Ok(())
}

fn read_keys(game: &Game) -> Result<InputExit, GameError> {
    let _raw = match RawMode::enter(STDIN_FD) {
        Ok(raw) => raw,
        Err(err) => {
            // nobody can press q now, let the render loop go
            game.request_stop();
            return Err(GameError::Terminal(err));
        }
    };
    Ok(run_input_loop(game, &mut io::stdin().lock()))
}
