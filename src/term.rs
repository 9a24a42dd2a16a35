use std::io;
use std::os::unix::io::RawFd;

use termios::{tcsetattr, Termios, ECHO, ICANON, TCSAFLUSH};
use tracing::{debug, error};

pub const STDIN_FD: RawFd = 0;

/// Keeps a terminal out of canonical mode with echo off while alive.
/// The previous settings come back when the guard is dropped.
pub struct RawMode {
    fd: RawFd,
    previous: Termios,
}

impl RawMode {
    pub fn enter(fd: RawFd) -> io::Result<RawMode> {
        let previous = Termios::from_fd(fd)?;
        let mut raw = previous;
        // keys arrive one at a time and are not echoed
        raw.c_lflag &= !(ICANON | ECHO);
        tcsetattr(fd, TCSAFLUSH, &raw)?;
        debug!(fd, "terminal switched to raw mode");
        Ok(RawMode { fd, previous })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        match tcsetattr(self.fd, TCSAFLUSH, &self.previous) {
            Ok(()) => debug!(fd = self.fd, "terminal mode restored"),
            Err(err) => error!(%err, fd = self.fd, "failed to restore terminal mode"),
        }
    }
}
