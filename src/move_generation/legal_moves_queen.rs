//! Queen move generation: rook and bishop rays combined.

use crate::game_state::chess_rules::COMPASS_DIRECTIONS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::move_generation::legal_move_shared::generate_sliding_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(
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
        &COMPASS_DIRECTIONS,
        check_info.pin_on(from),
        out,
    );
}
