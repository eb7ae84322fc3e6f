//! Piece module - shape catalog and matrix rotation.
//!
//! A shape is a small 0/1 matrix (at most 4x4). Rotation is a pure matrix
//! transform: an RxC input becomes a CxR output with
//! `out[j][R - 1 - i] = in[i][j]` (90 degrees clockwise). There is no wall
//! kick / offset search: a rotation either fits in place or is discarded by
//! the caller.

use arrayvec::ArrayVec;

use blockfall_types::{PieceKind, BOARD_WIDTH};

/// Maximum shape extent in either dimension.
pub const SHAPE_MAX: usize = 4;

/// A rotation-state matrix of filled/empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[u8; SHAPE_MAX]; SHAPE_MAX],
}

impl Shape {
    fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= SHAPE_MAX);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut cells = [[0u8; SHAPE_MAX]; SHAPE_MAX];
        for (i, row) in rows.iter().enumerate() {
            cells[i][..row.len()].copy_from_slice(row);
        }
        Self {
            rows: rows.len() as u8,
            cols: rows[0].len() as u8,
            cells,
        }
    }

    /// Matrix height (number of rows).
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Matrix width (number of columns).
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at column `x`, row `y` is filled.
    pub fn filled(&self, x: u8, y: u8) -> bool {
        y < self.rows && x < self.cols && self.cells[y as usize][x as usize] != 0
    }

    /// The 90-degree clockwise rotation of this shape.
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut cells = [[0u8; SHAPE_MAX]; SHAPE_MAX];
        for i in 0..r {
            for j in 0..c {
                cells[j][r - 1 - i] = self.cells[i][j];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Offsets of the filled cells, row-major. Every catalog shape has
    /// exactly four.
    pub fn filled_offsets(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.rows {
            for x in 0..self.cols {
                if self.cells[y as usize][x as usize] != 0 {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }
}

/// Spawn-orientation template for a piece kind.
pub fn template(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    }
}

/// The active falling piece: shape, color token, and board position.
///
/// `y` may sit above the visible board only transiently; pieces spawn at
/// `y = 0` and only move down, so committed cells always have `y >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Instantiate a kind at its spawn position: horizontally centered for
    /// the shape width, top row at `y = 0`.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = template(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Filled-cell offsets of the current rotation state.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.shape.filled_offsets()
    }

    /// Candidate with the shape rotated clockwise in place; position is
    /// unchanged. The caller validates before committing.
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Candidate translated by `(dx, dy)`.
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
