// arrow keys are 3 bytes long, first 2 are 27 and 91
use std::io::{ErrorKind, Read};

use tracing::{debug, error, info};

use crate::game::Game;
use crate::snake::Direction;

pub const BUF_SIZE: usize = 3;

pub const KEY_UP: [u8; BUF_SIZE] = [27, 91, 65];
pub const KEY_DOWN: [u8; BUF_SIZE] = [27, 91, 66];
pub const KEY_RIGHT: [u8; BUF_SIZE] = [27, 91, 67];
pub const KEY_LEFT: [u8; BUF_SIZE] = [27, 91, 68];
pub const KEY_QUIT: u8 = b'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Decodes the bytes returned by a single read. Only an exact arrow
/// sequence turns the snake; anything starting with `q` quits.
pub fn decode(bytes: &[u8]) -> Option<Command> {
    if bytes.first() == Some(&KEY_QUIT) {
        return Some(Command::Quit);
    }
    let direction = match bytes {
        b if b == KEY_UP => Direction::Up,
        b if b == KEY_DOWN => Direction::Down,
        b if b == KEY_LEFT => Direction::Left,
        b if b == KEY_RIGHT => Direction::Right,
        _ => return None,
    };
    Some(Command::Turn(direction))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputExit {
    /// `q` was pressed and the stop flag is set.
    Quit,
    /// The input device reached end of file.
    EndOfInput,
    /// Reading failed, the error was logged.
    ReadFailed,
}

/// Reads key presses from `input` and applies them to the game.
///
/// Blocks on `input` between keys with the game lock released. Ending
/// without a quit key leaves the render loop running.
pub fn run_input_loop<R: Read + ?Sized>(game: &Game, input: &mut R) -> InputExit {
    info!("input loop started");
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => {
                info!("input closed");
                return InputExit::EndOfInput;
            }
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                error!(%err, "failed to read input");
                return InputExit::ReadFailed;
            }
        };

        match decode(&buf[..n]) {
            Some(Command::Turn(direction)) => {
                game.lock().snake.turn(direction);
                debug!(?direction, "snake turned");
            }
            Some(Command::Quit) => {
                game.request_stop();
                info!("quit requested");
                return InputExit::Quit;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use std::io::{self, Cursor};

    #[test]
    fn decodes_arrow_keys() {
        assert_eq!(decode(&KEY_UP), Some(Command::Turn(Direction::Up)));
        assert_eq!(decode(&KEY_DOWN), Some(Command::Turn(Direction::Down)));
        assert_eq!(decode(&KEY_LEFT), Some(Command::Turn(Direction::Left)));
        assert_eq!(decode(&KEY_RIGHT), Some(Command::Turn(Direction::Right)));
    }

    #[test]
    fn q_quits_whatever_follows() {
        assert_eq!(decode(b"q"), Some(Command::Quit));
        assert_eq!(decode(b"qxy"), Some(Command::Quit));
        assert_eq!(decode(&[b'q', 27, 91]), Some(Command::Quit));
    }

    #[test]
    fn ignores_everything_else() {
        assert_eq!(decode(b""), None);
        assert_eq!(decode(&[27, 91]), None);
        assert_eq!(decode(&[27, 91, 69]), None);
        assert_eq!(decode(b"wasd"), None);
        assert_eq!(decode(b"Q"), None);
    }

    #[test]
    fn turns_then_quits() {
        let game = Game::new(GameConfig::default()).unwrap();
        let mut keys = Vec::new();
        keys.extend_from_slice(&KEY_DOWN);
        keys.extend_from_slice(b"x");
        keys.extend_from_slice(&KEY_LEFT);
        keys.extend_from_slice(b"q");
        keys.extend_from_slice(&KEY_UP);

        // reads come back 3 bytes at a time: down, "x" + 27 + 91, 68 + "q" + 27 ...
        let exit = run_input_loop(&game, &mut Cursor::new(keys));

        assert_eq!(exit, InputExit::EndOfInput);
        assert!(!game.is_stopped());
        assert_eq!(game.lock().snake.direction(), Direction::Down);
    }

    #[test]
    fn quit_sets_stop_flag() {
        let game = Game::new(GameConfig::default()).unwrap();
        let mut keys = KEY_LEFT.to_vec();
        keys.push(b'q');
        keys.extend_from_slice(&KEY_UP);

        let exit = run_input_loop(&game, &mut Cursor::new(keys));

        assert_eq!(exit, InputExit::Quit);
        assert!(game.is_stopped());
        assert_eq!(game.lock().snake.direction(), Direction::Left);
    }

    #[test]
    fn read_error_ends_loop_without_stopping_game() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(ErrorKind::Other, "device gone"))
            }
        }

        let game = Game::new(GameConfig::default()).unwrap();
        assert_eq!(run_input_loop(&game, &mut Failing), InputExit::ReadFailed);
        assert!(!game.is_stopped());
    }
}
