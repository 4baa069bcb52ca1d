//! King steps and castling.
//!
//! Each king step is checked against a hypothetical king square, so king moves
//! are already safe when the generator's in-check filter runs.

use crate::game_state::chess_rules::{COMPASS_DIRECTIONS, KING_HOME_COL};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{king_would_be_in_check, square_under_attack};
use crate::moves::chess_move::Move;

pub fn generate_king_moves(game_state: &GameState, from: Coord, piece: Piece, out: &mut Vec<Move>) {
    let board = game_state.board();
    for direction in COMPASS_DIRECTIONS {
        let Some(to) = from.offset(direction, 1) else {
            continue;
        };
        let target = board.get(to);
        if target.is_some_and(|occupant| occupant.color == piece.color) {
            continue;
        }
        if !king_would_be_in_check(game_state, piece.color, to) {
            out.push(Move::new(from, to, piece, target));
        }
    }
}

/// Castling for the side to move. The caller guarantees the king is not in
/// check; rights imply king and rook are still on their home squares.
pub fn generate_castling_moves(game_state: &GameState, out: &mut Vec<Move>) {
    let color = game_state.side_to_move();
    let king_at = game_state.king_location(color);
    if king_at != Coord::new(color.back_row(), KING_HOME_COL) {
        return;
    }
    let Some(king) = game_state.board().get(king_at) else {
        return;
    };
    if square_under_attack(game_state, king_at) {
        return;
    }

    let rights = game_state.castle_rights();
    if rights.kingside(color) && path_is_clear(game_state, king_at, &[1, 2], &[1, 2]) {
        out.push(Move::castle(king_at, Coord::new(king_at.row, king_at.col + 2), king));
    }
    if rights.queenside(color) && path_is_clear(game_state, king_at, &[-1, -2, -3], &[-1, -2]) {
        out.push(Move::castle(king_at, Coord::new(king_at.row, king_at.col - 2), king));
    }
}

/// Column offsets in `empty` must be unoccupied and those in `safe` unattacked.
fn path_is_clear(game_state: &GameState, king_at: Coord, empty: &[i8], safe: &[i8]) -> bool {
    let board = game_state.board();
    let on_rank = |d_col: i8| Coord::new(king_at.row, king_at.col + d_col);
    empty.iter().all(|d_col| board.is_empty_at(on_rank(*d_col)))
        && safe
            .iter()
            .all(|d_col| !square_under_attack(game_state, on_rank(*d_col)))
}
