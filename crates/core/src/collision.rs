//! Collision resolver - the single placement-legality predicate.
//!
//! Pure function of (piece, grid, displacement). Reused unchanged for
//! horizontal/vertical movement, rotation validation, and spawn validation
//! (`dx = dy = 0`).

use blockfall_types::{BOARD_HEIGHT, BOARD_WIDTH};

use crate::grid::Grid;
use crate::piece::Piece;

/// Whether placing `piece` displaced by `(dx, dy)` is illegal.
///
/// A filled cell collides when it leaves the side or bottom bounds, or when
/// it overlaps a settled block. Cells above the visible board (`y < 0`) are
/// still held to the side bounds but never tested against occupancy.
pub fn collides(grid: &Grid, piece: &Piece, dx: i8, dy: i8) -> bool {
    for (cx, cy) in piece.cells() {
        let board_x = piece.x + dx + cx;
        let board_y = piece.y + dy + cy;

        if board_x < 0 || board_x >= BOARD_WIDTH as i8 || board_y >= BOARD_HEIGHT as i8 {
            return true;
        }
        if board_y >= 0 && grid.is_occupied(board_x, board_y) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_types::PieceKind;

    #[test]
    fn open_board_accepts_spawn() {
        let grid = Grid::new();
        for kind in PieceKind::ALL {
            assert!(!collides(&grid, &Piece::spawn(kind), 0, 0), "{:?}", kind);
        }
    }

    #[test]
    fn side_and_floor_bounds_collide() {
        let grid = Grid::new();
        let piece = Piece::spawn(PieceKind::O); // x = 4, 2 wide

        assert!(collides(&grid, &piece, -5, 0)); // past left wall
        assert!(collides(&grid, &piece, 4, 0)); // past right wall
        assert!(collides(&grid, &piece, 0, 19)); // past the floor
        assert!(!collides(&grid, &piece, 0, 18)); // bottom row is legal
    }

    #[test]
    fn settled_blocks_collide() {
        let mut grid = Grid::new();
        let piece = Piece::spawn(PieceKind::O);

        grid.set(piece.x, 1, Some(PieceKind::I));
        assert!(collides(&grid, &piece, 0, 0));
        assert!(!collides(&grid, &piece.translated(2, 0), 0, 0));
    }

    #[test]
    fn cells_above_the_board_ignore_occupancy_but_not_walls() {
        let grid = Grid::new();
        let mut piece = Piece::spawn(PieceKind::I);
        piece.y = -1;

        assert!(!collides(&grid, &piece, 0, 0));
        assert!(collides(&grid, &piece, -4, 0));
    }
}
