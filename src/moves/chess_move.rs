//! Single-ply move value.
//!
//! A `Move` is produced fresh by legal move generation and carries enough
//! context (moved and captured pieces, special-move flags) to be applied and
//! undone without consulting anything else.

use crate::game_state::chess_types::{Coord, Piece, PieceKind};

/// Special-move flags. At most one of these is set on any move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MoveFlags {
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_pawn_promotion: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Coord,
    pub end: Coord,
    pub piece_moved: Piece,
    /// For en passant this is the passed pawn, which does not sit on `end`.
    pub piece_captured: Option<Piece>,
    pub flags: MoveFlags,
}

impl Move {
    pub fn new(start: Coord, end: Coord, piece_moved: Piece, piece_captured: Option<Piece>) -> Self {
        let is_pawn_promotion = piece_moved.kind == PieceKind::Pawn
            && end.row == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            flags: MoveFlags {
                is_pawn_promotion,
                ..MoveFlags::default()
            },
        }
    }

    pub fn en_passant(start: Coord, end: Coord, piece_moved: Piece, passed_pawn: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: Some(passed_pawn),
            flags: MoveFlags {
                is_en_passant: true,
                ..MoveFlags::default()
            },
        }
    }

    pub fn castle(start: Coord, end: Coord, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            flags: MoveFlags {
                is_castle: true,
                ..MoveFlags::default()
            },
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_en_passant(&self) -> bool {
        self.flags.is_en_passant
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.flags.is_castle
    }

    #[inline]
    pub fn is_pawn_promotion(&self) -> bool {
        self.flags.is_pawn_promotion
    }

    #[inline]
    pub fn is_kingside_castle(&self) -> bool {
        self.is_castle() && self.end.col > self.start.col
    }

    /// Square of the pawn removed by an en-passant capture.
    #[inline]
    pub fn en_passant_victim_square(&self) -> Coord {
        Coord::new(self.start.row, self.end.col)
    }
}

/// Piece identity is derivable from the board, so it is left out of equality.
impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.flags == other.flags
    }
}

impl Eq for Move {}
