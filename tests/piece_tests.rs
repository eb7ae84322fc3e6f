//! Shape catalog and rotation tests.

use blockfall::core::{template, Piece, PieceGenerator};
use blockfall::types::{PieceKind, BOARD_WIDTH};

#[test]
fn catalog_matches_the_classic_templates() {
    let i = template(PieceKind::I);
    assert_eq!((i.rows(), i.cols()), (1, 4));

    let o = template(PieceKind::O);
    assert_eq!((o.rows(), o.cols()), (2, 2));

    for kind in [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ] {
        let shape = template(kind);
        assert_eq!((shape.rows(), shape.cols()), (2, 3), "{:?}", kind);
    }

    // Every tetromino has exactly four cells.
    for kind in PieceKind::ALL {
        assert_eq!(template(kind).filled_offsets().len(), 4, "{:?}", kind);
    }
}

#[test]
fn four_clockwise_rotations_restore_every_template() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        let mut rotated = shape;
        for _ in 0..4 {
            rotated = rotated.rotated_cw();
        }
        assert_eq!(rotated, shape, "{:?}", kind);
    }
}

#[test]
fn rotation_maps_cells_clockwise() {
    // J: [[1,0,0],[1,1,1]] rotated is [[1,1],[1,0],[1,0]].
    let j = template(PieceKind::J).rotated_cw();
    assert_eq!((j.rows(), j.cols()), (3, 2));
    assert!(j.filled(0, 0) && j.filled(1, 0));
    assert!(j.filled(0, 1) && !j.filled(1, 1));
    assert!(j.filled(0, 2) && !j.filled(1, 2));
}

#[test]
fn rotation_does_not_move_the_piece() {
    let piece = Piece::spawn(PieceKind::T);
    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.kind, piece.kind);
}

#[test]
fn spawn_is_centered_for_the_shape_width() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let expected = (BOARD_WIDTH / 2) as i8 - (piece.shape.cols() / 2) as i8;
        assert_eq!(piece.x, expected, "{:?}", kind);
        assert_eq!(piece.y, 0, "{:?}", kind);
    }
}

#[test]
fn generator_is_deterministic_per_seed() {
    let mut a = PieceGenerator::new(99);
    let mut b = PieceGenerator::new(99);
    let kinds_a: Vec<_> = (0..50).map(|_| a.next().kind).collect();
    let kinds_b: Vec<_> = (0..50).map(|_| b.next().kind).collect();
    assert_eq!(kinds_a, kinds_b);
}

#[test]
fn generator_covers_the_whole_catalog() {
    let mut gen = PieceGenerator::new(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..500 {
        seen.insert(gen.next().kind);
    }
    assert_eq!(seen.len(), 7);
}
