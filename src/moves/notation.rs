//! Short algebraic notation for display.
//!
//! Best-effort only: no disambiguation between identical pieces reaching the
//! same square, and check markers are appended only when the caller says so.

use crate::game_state::chess_types::PieceKind;
use crate::moves::chess_move::Move;
use crate::utils::algebraic::{coord_to_algebraic, file_char};

/// Caller-supplied outcome of a move, used for the `+`/`#` suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveStatus {
    #[default]
    Quiet,
    Check,
    Checkmate,
}

impl Move {
    /// Short algebraic string such as `Qf5`, `exf5`, `O-O`, or `e8=Q`.
    pub fn notation(&self) -> String {
        if self.is_castle() {
            return if self.is_kingside_castle() {
                "O-O".to_owned()
            } else {
                "O-O-O".to_owned()
            };
        }

        let destination = coord_to_algebraic(self.end);
        let mut out = String::with_capacity(6);
        match self.piece_moved.kind {
            PieceKind::Pawn => {
                if self.is_capture() {
                    out.push(file_char(self.start.col));
                    out.push('x');
                }
                out.push_str(&destination);
                if self.is_pawn_promotion() {
                    out.push_str("=Q");
                }
            }
            kind => {
                out.push(kind.letter());
                if self.is_capture() {
                    out.push('x');
                }
                out.push_str(&destination);
            }
        }
        out
    }

    pub fn notation_with_status(&self, status: MoveStatus) -> String {
        let mut out = self.notation();
        match status {
            MoveStatus::Quiet => {}
            MoveStatus::Check => out.push('+'),
            MoveStatus::Checkmate => out.push('#'),
        }
        out
    }
}
