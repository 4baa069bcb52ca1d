//! Core value types shared by the board, move generation, and search.
//!
//! Coordinates follow the board's display orientation: row 0 is Black's back
//! rank (rank 8) and row 7 is White's back rank (rank 1). Columns run from the
//! a-file (0) to the h-file (7).

use std::ops::Neg;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step a pawn of this color takes when advancing.
    #[inline]
    pub const fn pawn_forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        self.opposite().back_row()
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Upper-case letter used by notation and diagrams.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// An occupied square's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }
}

/// A unit step across the board as `(d_row, d_col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        self.d_row == 0 || self.d_col == 0
    }
}

impl Neg for Direction {
    type Output = Direction;

    fn neg(self) -> Direction {
        Direction::new(-self.d_row, -self.d_col)
    }
}

/// A board coordinate. Only in-bounds values are ever constructed by
/// [`Coord::offset`]; `new` trusts its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn in_bounds(row: i8, col: i8) -> bool {
        row >= 0 && row < 8 && col >= 0 && col < 8
    }

    /// Step `distance` times along `direction`, or `None` when leaving the board.
    #[inline]
    pub fn offset(self, direction: Direction, distance: i8) -> Option<Coord> {
        let row = self.row + direction.d_row * distance;
        let col = self.col + direction.d_col * distance;
        Coord::in_bounds(row, col).then_some(Coord::new(row, col))
    }

    #[inline]
    pub fn step(self, d_row: i8, d_col: i8) -> Option<Coord> {
        self.offset(Direction::new(d_row, d_col), 1)
    }

    /// Unit direction from `self` toward `other`.
    #[inline]
    pub fn direction_to(self, other: Coord) -> Direction {
        Direction::new(
            (other.row - self.row).signum(),
            (other.col - self.col).signum(),
        )
    }
}

/// Per-color, per-side castling availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Default for CastleRights {
    fn default() -> Self {
        Self::all()
    }
}

impl CastleRights {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    #[inline]
    pub fn kingside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    #[inline]
    pub fn queenside(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    pub fn revoke_kingside(&mut self, color: Color) {
        match color {
            Color::White => self.white_kingside = false,
            Color::Black => self.black_kingside = false,
        }
    }

    pub fn revoke_queenside(&mut self, color: Color) {
        match color {
            Color::White => self.white_queenside = false,
            Color::Black => self.black_queenside = false,
        }
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.revoke_kingside(color);
        self.revoke_queenside(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.step(-1, 0), None);
        assert_eq!(corner.step(1, 1), Some(Coord::new(1, 1)));
        assert_eq!(corner.offset(Direction::new(0, 1), 7), Some(Coord::new(0, 7)));
        assert_eq!(corner.offset(Direction::new(0, 1), 8), None);
    }

    #[test]
    fn direction_to_is_unit_step() {
        let from = Coord::new(7, 4);
        assert_eq!(from.direction_to(Coord::new(3, 0)), Direction::new(-1, -1));
        assert_eq!(from.direction_to(Coord::new(7, 7)), Direction::new(0, 1));
        assert_eq!(-Direction::new(-1, 1), Direction::new(1, -1));
    }

    #[test]
    fn castle_rights_revoke_per_side() {
        let mut rights = CastleRights::all();
        rights.revoke_kingside(Color::White);
        assert!(!rights.kingside(Color::White));
        assert!(rights.queenside(Color::White));
        rights.revoke_all(Color::Black);
        assert!(!rights.kingside(Color::Black) && !rights.queenside(Color::Black));
    }

    #[test]
    fn pawn_geometry_mirrors_by_color() {
        assert_eq!(Color::White.pawn_forward(), -1);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::White.promotion_row(), 0);
    }
}
