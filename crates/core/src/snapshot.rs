//! Read-only render snapshot of a session.
//!
//! Consumed by the rendering collaborator each frame. Plain `Copy` data;
//! callers can keep one buffer and refill it via `Session::snapshot_into`.

use blockfall_types::{PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH};

use crate::piece::{Piece, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
}

impl From<Piece> for NextSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Settled cells: 0 = empty, 1..=7 = piece kind codes.
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_interval_ms: u32,
    pub status: Status,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        self.status == Status::Running
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            next: None,
            score: 0,
            level: 1,
            lines: 0,
            drop_interval_ms: blockfall_types::BASE_DROP_MS,
            status: Status::Idle,
        }
    }
}
