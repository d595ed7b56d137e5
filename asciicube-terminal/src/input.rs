/// Terminal mode, exit-key polling and frame pacing
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal,
};
use log::{debug, warn};
use std::time::Duration;

/// Input side of the animation driver.
///
/// The driver acquires the terminal mode before the first frame, polls once
/// per frame boundary and releases the mode on every exit path.
pub trait InputSource {
    fn acquire_mode(&mut self);
    fn release_mode(&mut self);
    /// Non-blocking check for the exit key
    fn poll_exit_requested(&mut self) -> bool;
}

/// Raw mode held for the guard's lifetime
///
/// Failures to switch modes are logged and otherwise ignored so the
/// animation still runs on terminals that refuse raw mode.
pub struct RawModeGuard {
    enabled: bool,
}

impl RawModeGuard {
    pub fn acquire() -> Self {
        match terminal::enable_raw_mode() {
            Ok(()) => {
                debug!("raw mode enabled");
                Self { enabled: true }
            }
            Err(e) => {
                warn!("could not enable raw mode: {}", e);
                Self { enabled: false }
            }
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if !self.enabled {
            return;
        }
        match terminal::disable_raw_mode() {
            Ok(()) => debug!("raw mode restored"),
            Err(e) => warn!("could not restore terminal mode: {}", e),
        }
    }
}

/// Keyboard input through crossterm
pub struct CrosstermInput {
    exit_key: char,
    guard: Option<RawModeGuard>,
}

impl CrosstermInput {
    pub fn new(exit_key: char) -> Self {
        Self {
            exit_key,
            guard: None,
        }
    }
}

impl InputSource for CrosstermInput {
    fn acquire_mode(&mut self) {
        if self.guard.is_none() {
            self.guard = Some(RawModeGuard::acquire());
        }
    }

    fn release_mode(&mut self) {
        self.guard = None;
    }

    fn poll_exit_requested(&mut self) -> bool {
        // Drain everything queued since the last frame
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(e) => {
                    warn!("input poll failed: {}", e);
                    return false;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) if is_exit_key(&key, self.exit_key) => return true,
                Ok(_) => {}
                Err(e) => {
                    warn!("input read failed: {}", e);
                    return false;
                }
            }
        }
    }
}

/// The designated exit key, or Ctrl-C since raw mode swallows SIGINT
pub fn is_exit_key(key: &KeyEvent, exit_key: char) -> bool {
    if key.kind != KeyEventKind::Press {
        return false;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => true,
        KeyCode::Char(c) => c == exit_key,
        _ => false,
    }
}

/// Fixed sleep between frames
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    delay: Duration,
}

impl FramePacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_micros(micros: u64) -> Self {
        Self::new(Duration::from_micros(micros))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn wait(&self) {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
