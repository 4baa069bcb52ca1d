//! Bishop move generation.
//!
//! Emits bishop moves along the four diagonals, restricted to the pin line
//! when the bishop is pinned.

use crate::game_state::chess_rules::DIAGONAL_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Coord,
    piece: Piece,
    check_info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    generate_sliding_moves(
        game_state,
        from,
        piece,
        &DIAGONAL_DIRECTIONS,
        check_info.pin_on(from),
        out,
    );
}
