//! Session module - the game orchestrator.
//!
//! Owns the grid, the active and next pieces, and the score/level/lines
//! counters, and drives the piece lifecycle: spawn, move, rotate, lock,
//! clear, respawn. All operations are synchronous and run to completion;
//! the session holds no locks and expects callers to serialize commands
//! and clock ticks.

use blockfall_types::{
    GameCommand, Status, BASE_DROP_MS, HARD_DROP_BONUS, LEVEL_SPEEDUP_MS, LINES_PER_LEVEL,
    LINE_CLEAR_SCORE, MIN_DROP_MS,
};

use crate::collision::collides;
use crate::generator::PieceGenerator;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::snapshot::{ActiveSnapshot, NextSnapshot, SessionSnapshot};

/// Complete game session state.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    active: Option<Piece>,
    next: Option<Piece>,
    generator: PieceGenerator,
    status: Status,
    score: u32,
    level: u32,
    lines: u32,
    drop_interval_ms: u32,
    last_drop_ms: u64,
}

impl Session {
    /// Create an idle session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        Self {
            grid: Grid::new(),
            active: None,
            next: None,
            generator: PieceGenerator::new(seed),
            status: Status::Idle,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: BASE_DROP_MS,
            last_drop_ms: 0,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for scenario setup in tests and tools.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn next_piece(&self) -> Option<&Piece> {
        self.next.as_ref()
    }

    /// Dispatch a command and return the (possibly unchanged) status.
    ///
    /// Commands that are invalid for the current status are silent no-ops.
    pub fn apply(&mut self, command: GameCommand) -> Status {
        match command {
            GameCommand::Start => {
                self.start();
            }
            GameCommand::Pause => {
                self.pause();
            }
            GameCommand::Resume => {
                self.resume();
            }
            GameCommand::Reset => {
                self.reset();
            }
            GameCommand::MoveLeft => {
                self.move_left();
            }
            GameCommand::MoveRight => {
                self.move_right();
            }
            GameCommand::SoftDrop => {
                self.soft_drop();
            }
            GameCommand::HardDrop => {
                self.hard_drop();
            }
            GameCommand::Rotate => {
                self.rotate();
            }
        }
        self.status
    }

    /// Spawn the first pieces and begin play. Valid only from `Idle`.
    pub fn start(&mut self) -> Status {
        if self.status != Status::Idle {
            return self.status;
        }
        self.status = Status::Running;
        self.spawn_piece();
        self.status
    }

    /// Suspend gravity and commands. Valid only while `Running`.
    pub fn pause(&mut self) -> Status {
        if self.status == Status::Running {
            self.status = Status::Paused;
        }
        self.status
    }

    /// Resume from `Paused`.
    pub fn resume(&mut self) -> Status {
        if self.status == Status::Paused {
            self.status = Status::Running;
        }
        self.status
    }

    /// Return to `Idle` with an empty grid and initial counters.
    ///
    /// The generator keeps its RNG stream, so the upcoming piece sequence
    /// continues rather than repeating.
    pub fn reset(&mut self) -> Status {
        self.grid.reset();
        self.active = None;
        self.next = None;
        self.status = Status::Idle;
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.drop_interval_ms = BASE_DROP_MS;
        self.last_drop_ms = 0;
        self.status
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// One row down; locks the piece when the floor or stack is reached.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate the active piece clockwise in place, or leave it untouched
    /// when the rotated shape would collide. No offset search.
    pub fn rotate(&mut self) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = active.rotated();
        if collides(&self.grid, &candidate, 0, 0) {
            return false;
        }
        self.active = Some(candidate);
        true
    }

    /// Drop the active piece to its lowest legal position in one call.
    ///
    /// Awards [`HARD_DROP_BONUS`] per descended row; the final rejected
    /// step locks the piece and spawns the next one.
    pub fn hard_drop(&mut self) -> u32 {
        if self.status != Status::Running {
            return 0;
        }
        let mut bonus = 0;
        while self.try_move(0, 1) {
            bonus += HARD_DROP_BONUS;
        }
        self.score += bonus;
        bonus
    }

    /// Gravity driver. `now_ms` is a monotonically increasing timestamp
    /// supplied by the external clock; the session only compares deltas.
    ///
    /// Performs one downward step per elapsed drop interval and re-arms.
    /// Returns whether a gravity step was taken this call.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.status != Status::Running {
            return false;
        }
        if now_ms.saturating_sub(self.last_drop_ms) > self.drop_interval_ms as u64 {
            self.try_move(0, 1);
            self.last_drop_ms = now_ms;
            return true;
        }
        false
    }

    /// Translate the active piece if the destination is legal.
    ///
    /// A rejected downward step means the piece landed: it is committed to
    /// the grid, completed rows are cleared and scored, and the next piece
    /// spawns (which may end the game). Rejected horizontal steps change
    /// nothing.
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.status != Status::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if !collides(&self.grid, &active, dx, dy) {
            self.active = Some(active.translated(dx, dy));
            return true;
        }

        if dy > 0 {
            self.lock_active();
        }
        false
    }

    /// Commit the landed piece, clear rows, update score/level/speed, and
    /// spawn the next piece.
    fn lock_active(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.grid.commit(&active);

        let cleared = self.grid.clear_completed_rows() as u32;
        if cleared > 0 {
            self.lines += cleared;
            // The level in effect when the rows were completed multiplies
            // the clear score; the recomputed level applies from now on.
            self.score += cleared * LINE_CLEAR_SCORE * self.level;
            self.level = self.lines / LINES_PER_LEVEL + 1;
            self.drop_interval_ms = BASE_DROP_MS
                .saturating_sub((self.level - 1) * LEVEL_SPEEDUP_MS)
                .max(MIN_DROP_MS);
        }

        self.spawn_piece();
    }

    /// Promote the buffered next piece (or draw fresh) into play.
    ///
    /// A spawn that collides immediately is a block-out: the grid is left
    /// unmodified, the colliding piece stays visible, and the session ends.
    fn spawn_piece(&mut self) -> bool {
        let piece = self.next.take().unwrap_or_else(|| self.generator.next());

        if collides(&self.grid, &piece, 0, 0) {
            self.active = Some(piece);
            self.status = Status::GameOver;
            return false;
        }

        self.active = Some(piece);
        self.next = Some(self.generator.next());
        true
    }

    /// Fill a reusable snapshot buffer for the render layer.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.grid.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next.map(NextSnapshot::from);
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
        out.drop_interval_ms = self.drop_interval_ms;
        out.status = self.status;
    }

    /// Allocate and fill a fresh snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}
