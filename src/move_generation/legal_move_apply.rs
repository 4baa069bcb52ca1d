//! Apply and undo.
//!
//! `apply_move` trusts its input: the move must come from `get_legal_moves` on
//! this exact state. `try_apply_move` is the checked entry point for callers
//! holding a move of uncertain origin. Undo must be called in strict LIFO
//! order with apply; the history stacks cannot detect misordering.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{KINGSIDE_ROOK_COL, QUEENSIDE_ROOK_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::Move;

impl GameState {
    pub fn apply_move(&mut self, mv: &Move) {
        let color = mv.piece_moved.color;

        self.board.set(mv.start, None);
        let placed = if mv.is_pawn_promotion() {
            Piece::new(color, PieceKind::Queen)
        } else {
            mv.piece_moved
        };
        self.board.set(mv.end, Some(placed));

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[color.index()] = mv.end;
        }
        if mv.is_en_passant() {
            self.board.set(mv.en_passant_victim_square(), None);
        }
        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(mv);
            let rook = self.board.get(rook_from);
            self.board.set(rook_from, None);
            self.board.set(rook_to, rook);
        }

        let en_passant_target = (mv.piece_moved.kind == PieceKind::Pawn
            && (mv.end.row - mv.start.row).abs() == 2)
            .then(|| Coord::new((mv.start.row + mv.end.row) / 2, mv.start.col));
        self.en_passant_log.push(en_passant_target);

        let rights = updated_castle_rights(self.castle_rights(), mv);
        self.castle_rights_log.push(rights);

        self.move_log.push(*mv);
        self.side_to_move = color.opposite();
    }

    /// Take back the last move. No-op on an empty log.
    pub fn undo_move(&mut self) {
        let Some(mv) = self.move_log.pop() else {
            return;
        };
        let color = mv.piece_moved.color;

        self.board.set(mv.start, Some(mv.piece_moved));
        if mv.is_en_passant() {
            self.board.set(mv.end, None);
            self.board.set(mv.en_passant_victim_square(), mv.piece_captured);
        } else {
            self.board.set(mv.end, mv.piece_captured);
        }

        if mv.piece_moved.kind == PieceKind::King {
            self.king_locations[color.index()] = mv.start;
        }
        if mv.is_castle() {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.board.get(rook_to);
            self.board.set(rook_to, None);
            self.board.set(rook_from, rook);
        }

        self.en_passant_log.pop();
        self.castle_rights_log.pop();
        self.side_to_move = color;
        self.checkmate = false;
        self.stalemate = false;
    }

    /// Apply `mv` only if it is legal here. The generated copy of the move is
    /// applied and returned, so piece identity always comes from the board.
    pub fn try_apply_move(&mut self, mv: &Move) -> ChessResult<Move> {
        let legal = self
            .get_legal_moves()
            .into_iter()
            .find(|candidate| candidate == mv)
            .ok_or_else(|| ChessError::IllegalMove {
                notation: mv.notation(),
            })?;
        self.apply_move(&legal);
        Ok(legal)
    }
}

/// `(from, to)` of the rook accompanying a castling king.
fn castle_rook_squares(mv: &Move) -> (Coord, Coord) {
    let row = mv.start.row;
    if mv.is_kingside_castle() {
        (Coord::new(row, KINGSIDE_ROOK_COL), Coord::new(row, mv.end.col - 1))
    } else {
        (Coord::new(row, QUEENSIDE_ROOK_COL), Coord::new(row, mv.end.col + 1))
    }
}

fn updated_castle_rights(mut rights: CastleRights, mv: &Move) -> CastleRights {
    let color = mv.piece_moved.color;
    match mv.piece_moved.kind {
        PieceKind::King => rights.revoke_all(color),
        PieceKind::Rook => revoke_for_rook_square(&mut rights, color, mv.start),
        _ => {}
    }
    if let Some(captured) = mv.piece_captured {
        if captured.kind == PieceKind::Rook {
            revoke_for_rook_square(&mut rights, captured.color, mv.end);
        }
    }
    rights
}

fn revoke_for_rook_square(rights: &mut CastleRights, color: Color, at: Coord) {
    if at.row != color.back_row() {
        return;
    }
    match at.col {
        QUEENSIDE_ROOK_COL => rights.revoke_queenside(color),
        KINGSIDE_ROOK_COL => rights.revoke_kingside(color),
        _ => {}
    }
}
