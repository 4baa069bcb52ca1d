//! Canonical chess-rule constants.
//!
//! This module stores static rule-related tables: the starting layout, the
//! compass and knight step tables, and the castling geometry.

use crate::game_state::chess_types::{Direction, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Back-rank order from the a-file to the h-file, identical for both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Compass directions. The first four are orthogonal, the last four diagonal;
/// attacker matching in check detection relies on that split.
pub const COMPASS_DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, 0),
    Direction::new(0, -1),
    Direction::new(1, 0),
    Direction::new(0, 1),
];

pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::new(-1, -1),
    Direction::new(-1, 1),
    Direction::new(1, -1),
    Direction::new(1, 1),
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

pub const KING_HOME_COL: i8 = 4;
pub const KINGSIDE_ROOK_COL: i8 = 7;
pub const QUEENSIDE_ROOK_COL: i8 = 0;
