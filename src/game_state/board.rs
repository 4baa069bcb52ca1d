//! Mailbox board storage.
//!
//! An 8×8 grid of optional pieces. The board knows nothing about turn order or
//! history; `GameState` layers those on top.

use crate::game_state::chess_rules::{BACK_RANK_LAYOUT, BOARD_SIZE};
use crate::game_state::chess_types::{Color, Coord, Piece, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard initial layout, Black on rows 0-1 and White on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as i8;
            board.set(Coord::new(0, col), Some(Piece::new(Color::Black, *kind)));
            board.set(Coord::new(1, col), Some(Piece::new(Color::Black, PieceKind::Pawn)));
            board.set(Coord::new(6, col), Some(Piece::new(Color::White, PieceKind::Pawn)));
            board.set(Coord::new(7, col), Some(Piece::new(Color::White, *kind)));
        }
        board
    }

    /// `at` must be on the board; off-board coordinates panic.
    #[inline]
    pub fn get(&self, at: Coord) -> Option<Piece> {
        debug_assert!(Coord::in_bounds(at.row, at.col), "off-board square {at:?}");
        self.squares[at.row as usize][at.col as usize]
    }

    /// `at` must be on the board; off-board coordinates panic.
    #[inline]
    pub fn set(&mut self, at: Coord, piece: Option<Piece>) {
        debug_assert!(Coord::in_bounds(at.row, at.col), "off-board square {at:?}");
        self.squares[at.row as usize][at.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Coord::new(row as i8, col as i8), piece))
            })
        })
    }

    pub fn find_kings(&self, color: Color) -> Vec<Coord> {
        self.pieces()
            .filter(|(_, piece)| piece.is(color, PieceKind::King))
            .map(|(at, _)| at)
            .collect()
    }
}
