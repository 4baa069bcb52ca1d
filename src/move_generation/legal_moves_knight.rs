use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::CheckInfo;
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Coord,
    piece: Piece,
    check_info: &CheckInfo,
    out: &mut Vec<Move>,
) {
    // No knight jump stays on a line through the king.
    if check_info.pin_on(from).is_some() {
        return;
    }

    let board = game_state.board();
    for offset in KNIGHT_OFFSETS {
        let Some(to) = from.offset(offset, 1) else {
            continue;
        };
        match board.get(to) {
            None => out.push(Move::new(from, to, piece, None)),
            Some(target) if target.color != piece.color => {
                out.push(Move::new(from, to, piece, Some(target)))
            }
            Some(_) => {}
        }
    }
}
