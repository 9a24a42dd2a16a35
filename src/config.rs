use std::time::Duration;

use crate::error::ConfigError;
use crate::food::FOOD_SIZE;

pub const FPS: u32 = 21;
pub const WIDTH: i32 = 128;
pub const HEIGHT: i32 = 31;
pub const BORDER_OFFSET: i32 = 1;
pub const FOOD_SPAWN_RATE: u32 = 7;

/// Fixed game settings. The binary only ever runs with the defaults,
/// other values exist for tests and embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Interior play area, border excluded.
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    /// A food is spawned once every this many ticks.
    pub food_spawn_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: WIDTH,
            height: HEIGHT,
            fps: FPS,
            food_spawn_rate: FOOD_SPAWN_RATE,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < FOOD_SIZE || self.height < FOOD_SIZE {
            return Err(ConfigError::AreaTooSmall {
                width: self.width,
                height: self.height,
                size: FOOD_SIZE,
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if self.food_spawn_rate == 0 {
            return Err(ConfigError::ZeroSpawnRate);
        }
        Ok(())
    }

    // fixed sleep, the time spent on the tick itself is not subtracted
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.fps.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!((config.width, config.height), (128, 31));
        assert_eq!(config.frame_interval(), Duration::from_millis(47));
    }

    #[test]
    fn rejects_area_smaller_than_food() {
        let config = GameConfig {
            width: 2,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::AreaTooSmall {
                width: 2,
                height: 31,
                size: 3
            })
        );
    }

    #[test]
    fn rejects_zero_rates() {
        let config = GameConfig {
            fps: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFrameRate));
        let config = GameConfig {
            food_spawn_rate: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpawnRate));
    }
}
