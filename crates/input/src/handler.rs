//! DAS/ARR input handler for terminal environments.
//!
//! Held movement keys repeat after a delayed-auto-shift (DAS) period at the
//! auto-repeat rate (ARR); soft drop repeats immediately at its own rate.
//! Terminals that never emit key release events are handled with a timeout:
//! a key with no recent press is treated as released.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use blockfall_types::{GameCommand, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS};

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

/// Tracks held-key state for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    last_key_time: std::time::Instant,
    horizontal_das_timer: u32,
    horizontal_arr_accumulator: u32,
    down_arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// A single tap in a terminal without release events must not become a
// sustained hold; past this timeout the key counts as released.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            last_key_time: std::time::Instant::now(),
            horizontal_das_timer: 0,
            horizontal_arr_accumulator: 0,
            down_arr_accumulator: 0,
            das_delay,
            arr_rate,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Register a key press. Returns the immediate command for newly
    /// pressed movement keys; repeats come from [`InputHandler::update`].
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameCommand> {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == HorizontalDirection::Left {
                    None
                } else {
                    self.horizontal = HorizontalDirection::Left;
                    self.horizontal_das_timer = 0;
                    self.horizontal_arr_accumulator = 0;
                    Some(GameCommand::MoveLeft)
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == HorizontalDirection::Right {
                    None
                } else {
                    self.horizontal = HorizontalDirection::Right;
                    self.horizontal_das_timer = 0;
                    self.horizontal_arr_accumulator = 0;
                    Some(GameCommand::MoveRight)
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                self.last_key_time = std::time::Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_arr_accumulator = 0;
                    Some(GameCommand::SoftDrop)
                }
            }
            _ => None,
        }
    }

    /// Register a key release (for terminals that do emit them).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
            | KeyCode::Char('A') => {
                if self.horizontal == HorizontalDirection::Left {
                    self.clear_horizontal();
                }
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
            | KeyCode::Char('D') => {
                if self.horizontal == HorizontalDirection::Right {
                    self.clear_horizontal();
                }
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
            | KeyCode::Char('S') => {
                self.down_held = false;
                self.down_arr_accumulator = 0;
            }
            _ => {}
        }
    }

    /// Advance the repeat timers by `elapsed_ms` and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameCommand, 32> {
        let mut commands = ArrayVec::<GameCommand, 32>::new();

        // Auto-release when the terminal never reported a release.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.clear_horizontal();
            self.down_held = false;
            self.down_arr_accumulator = 0;
        }

        match self.horizontal {
            HorizontalDirection::Left | HorizontalDirection::Right => {
                let prev_das = self.horizontal_das_timer;
                self.horizontal_das_timer += elapsed_ms;

                if self.horizontal_das_timer >= self.das_delay {
                    let excess = if prev_das < self.das_delay {
                        self.horizontal_das_timer - self.das_delay
                    } else {
                        elapsed_ms
                    };
                    self.horizontal_arr_accumulator += excess;

                    while self.horizontal_arr_accumulator >= self.arr_rate {
                        let command = match self.horizontal {
                            HorizontalDirection::Left => GameCommand::MoveLeft,
                            HorizontalDirection::Right => GameCommand::MoveRight,
                            HorizontalDirection::None => break,
                        };
                        let _ = commands.try_push(command);
                        self.horizontal_arr_accumulator -= self.arr_rate;
                    }
                }
            }
            HorizontalDirection::None => {
                self.horizontal_das_timer = 0;
                self.horizontal_arr_accumulator = 0;
            }
        }

        if self.down_held {
            // Soft drop has no DAS period; it repeats at its own rate.
            self.down_arr_accumulator += elapsed_ms;
            while self.down_arr_accumulator >= SOFT_DROP_ARR_MS {
                let _ = commands.try_push(GameCommand::SoftDrop);
                self.down_arr_accumulator -= SOFT_DROP_ARR_MS;
            }
        } else {
            self.down_arr_accumulator = 0;
        }

        commands
    }

    /// Drop all held state (e.g. on reset or focus loss).
    pub fn reset(&mut self) {
        self.clear_horizontal();
        self.down_held = false;
        self.down_arr_accumulator = 0;
        self.last_key_time = std::time::Instant::now();
    }

    fn clear_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_das_timer = 0;
        self.horizontal_arr_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
