//! Shared data types and constants.
//!
//! Pure data with no external dependencies, usable from the game core, the
//! input layer, and the renderer alike.
//!
//! # Board dimensions
//!
//! The playfield is 10 columns by 20 rows. Coordinates are `(x, y)` with
//! `x` growing right and `y` growing down; `(0, 0)` is the top-left cell.
//! Pieces spawn at `y = 0`, horizontally centered for their shape width.
//!
//! # Timing and scoring
//!
//! Gravity starts at [`BASE_DROP_MS`] and speeds up by [`LEVEL_SPEEDUP_MS`]
//! per level, floored at [`MIN_DROP_MS`]. The level is derived from total
//! cleared lines: `level = lines / LINES_PER_LEVEL + 1`. Clearing `n` lines
//! at level `L` scores `n * LINE_CLEAR_SCORE * L`; each hard-dropped row
//! scores [`HARD_DROP_BONUS`].

/// Board width in cells.
pub const BOARD_WIDTH: u8 = 10;
/// Board height in cells.
pub const BOARD_HEIGHT: u8 = 20;

// Board dimensions are compile-time configuration; zero-sized boards are a
// setup error and must not survive to run time.
const _: () = assert!(BOARD_WIDTH > 0 && BOARD_HEIGHT > 0);

/// Fixed timestep of the terminal runner (milliseconds).
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (milliseconds).
pub const BASE_DROP_MS: u32 = 1000;
/// Gravity interval floor (milliseconds).
pub const MIN_DROP_MS: u32 = 100;
/// Gravity speed-up per level (milliseconds).
pub const LEVEL_SPEEDUP_MS: u32 = 100;
/// Lines required to advance one level.
pub const LINES_PER_LEVEL: u32 = 10;

/// Base score per cleared line, multiplied by the level at clear time.
pub const LINE_CLEAR_SCORE: u32 = 100;
/// Score per row descended by a hard drop.
pub const HARD_DROP_BONUS: u32 = 2;

/// DAS/ARR timing for held movement keys (milliseconds).
pub const DEFAULT_DAS_MS: u32 = 150;
pub const DEFAULT_ARR_MS: u32 = 50;
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// The seven catalog piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All catalog kinds, in generator draw order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Non-zero cell code for snapshot grids (1..=7).
    pub fn code(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Inverse of [`PieceKind::code`]; `0` and unknown codes are empty.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }
}

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Running => "running",
            Status::Paused => "paused",
            Status::GameOver => "game_over",
        }
    }
}

/// Commands accepted by the session.
///
/// Commands that are invalid for the current status are silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    Start,
    Pause,
    Resume,
    Reset,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
}

/// Cell on the board (`None` = empty, `Some` = settled piece color token).
pub type Cell = Option<PieceKind>;
