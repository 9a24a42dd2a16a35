// map, snake and stop flag live behind one mutex; the render loop and the
// input loop each take it for a whole step and never hold it while sleeping
// or waiting for a key
use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::thread;

use num::Integer;
use rand::Rng;
use tracing::{debug, error, info, trace};

use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::food;
use crate::map::Map;
use crate::snake::Snake;

#[derive(Debug)]
pub struct GameState {
    pub map: Map,
    pub snake: Snake,
    pub stop: bool,
    food_spawn_rate: u32,
    frame_count: u32,
    ticks: u64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        GameState {
            map: Map::new(config.width, config.height),
            snake: Snake::new(),
            stop: false,
            food_spawn_rate: config.food_spawn_rate,
            frame_count: 0,
            ticks: 0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// One simulation step: move, eat, maybe spawn food, draw.
    ///
    /// Food is spawned on the first tick and then once every
    /// `food_spawn_rate` ticks.
    pub fn tick<R, W>(&mut self, rng: &mut R, out: &mut W) -> Result<()>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let (width, height) = (self.map.width(), self.map.height());
        if !self.snake.advance(width, height) {
            trace!(head = ?self.snake.head(), "snake stalled against the wall");
        }
        self.map.check_collisions(&mut self.snake);

        if Integer::is_multiple_of(&self.frame_count, &self.food_spawn_rate) {
            self.frame_count = 0;
            let food = food::spawn(rng, width, height, &self.snake, self.map.foods());
            debug!(?food, foods = self.map.foods().len() + 1, "food spawned");
            self.map.save_food(food);
        }
        self.frame_count += 1;

        self.map.render(&self.snake, out).map_err(GameError::Render)?;
        self.ticks += 1;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub snake_length: usize,
    pub foods: usize,
}

#[derive(Debug)]
pub struct Game {
    config: GameConfig,
    state: Mutex<GameState>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Game {
            state: Mutex::new(GameState::new(&config)),
            config,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Locks the shared state. A panic in another holder leaves the state
    /// structurally valid, so poisoning is ignored.
    pub fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn request_stop(&self) {
        self.lock().stop = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.lock().stop
    }

    fn summary(&self) -> RunSummary {
        let state = self.lock();
        RunSummary {
            ticks: state.ticks(),
            snake_length: state.snake.body_len(),
            foods: state.map.foods().len(),
        }
    }

    /// Runs ticks at the configured frame rate until the stop flag is seen.
    ///
    /// The sleep happens with the lock released. A failed frame write is
    /// logged right away: the input loop may still be blocked on a key, so
    /// the caller can't report it until `q` is pressed.
    pub fn run_render_loop<R, W>(&self, rng: &mut R, out: &mut W) -> Result<RunSummary>
    where
        R: Rng + ?Sized,
        W: Write,
    {
        let interval = self.config.frame_interval();
        info!(
            ?interval,
            spawn_rate = self.config.food_spawn_rate,
            "render loop started"
        );

        loop {
            {
                let mut state = self.lock();
                if state.stop {
                    break;
                }
                if let Err(err) = state.tick(rng, out) {
                    error!(?err, tick = state.ticks(), "render loop failed, press q to quit");
                    return Err(err);
                }
                trace!(tick = state.ticks(), "tick done");
            }
            thread::sleep(interval);
        }

        let summary = self.summary();
        info!(
            ticks = summary.ticks,
            snake_length = summary.snake_length,
            foods = summary.foods,
            "render loop stopped"
        );
        Ok(summary)
    }
}
